//! Brand palette and sidebar tokens for the storefront.
//!
//! # Design
//! - Tokens are static data; Tailwind reads them at build time through
//!   `theme.tokens.json`, written by the config build helper.
//! - Sidebar roles resolve through CSS custom properties so light and dark
//!   modes share one Tailwind config.

use serde_json::{Map, Value};

/// A single color token with a stable name and CSS value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Role identifier (e.g., "DEFAULT", "foreground").
    pub name: &'static str,
    /// CSS color value (`#rrggbb` or `hsl(var(--name))`).
    pub value: &'static str,
}

/// Collection of related tokens exposed under one Tailwind color key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier used as the Tailwind color key.
    pub id: &'static str,
    /// Roles in declaration order.
    pub shades: &'static [ColorToken],
}

/// Brand blue.
pub const BRAND_BLUE: ColorToken = ColorToken {
    name: "blue",
    value: "#1D4ED8",
};

/// Brand yellow.
pub const BRAND_YELLOW: ColorToken = ColorToken {
    name: "yellow",
    value: "#FACC15",
};

/// Brand palette.
pub const BRAND: Palette = Palette {
    id: "brand",
    shades: &[BRAND_BLUE, BRAND_YELLOW],
};

/// Sidebar palette; each role maps to a `--sidebar-*` custom property.
pub const SIDEBAR: Palette = Palette {
    id: "sidebar",
    shades: &[
        ColorToken {
            name: "DEFAULT",
            value: "hsl(var(--sidebar-background))",
        },
        ColorToken {
            name: "foreground",
            value: "hsl(var(--sidebar-foreground))",
        },
        ColorToken {
            name: "primary",
            value: "hsl(var(--sidebar-primary))",
        },
        ColorToken {
            name: "primary-foreground",
            value: "hsl(var(--sidebar-primary-foreground))",
        },
        ColorToken {
            name: "accent",
            value: "hsl(var(--sidebar-accent))",
        },
        ColorToken {
            name: "accent-foreground",
            value: "hsl(var(--sidebar-accent-foreground))",
        },
        ColorToken {
            name: "border",
            value: "hsl(var(--sidebar-border))",
        },
        ColorToken {
            name: "ring",
            value: "hsl(var(--sidebar-ring))",
        },
    ],
};

/// HSL triples backing the sidebar custom properties in light mode.
const SIDEBAR_LIGHT: [(&str, &str); 8] = [
    ("--sidebar-background", "0 0% 98%"),
    ("--sidebar-foreground", "240 5.3% 26.1%"),
    ("--sidebar-primary", "240 5.9% 10%"),
    ("--sidebar-primary-foreground", "0 0% 98%"),
    ("--sidebar-accent", "240 4.8% 95.9%"),
    ("--sidebar-accent-foreground", "240 5.9% 10%"),
    ("--sidebar-border", "220 13% 91%"),
    ("--sidebar-ring", "217.2 91.2% 59.8%"),
];

/// HSL triples backing the sidebar custom properties in dark mode.
const SIDEBAR_DARK: [(&str, &str); 8] = [
    ("--sidebar-background", "240 5.9% 10%"),
    ("--sidebar-foreground", "240 4.8% 95.9%"),
    ("--sidebar-primary", "224.3 76.3% 48%"),
    ("--sidebar-primary-foreground", "0 0% 100%"),
    ("--sidebar-accent", "240 3.7% 15.9%"),
    ("--sidebar-accent-foreground", "240 4.8% 95.9%"),
    ("--sidebar-border", "240 3.7% 15.9%"),
    ("--sidebar-ring", "217.2 91.2% 59.8%"),
];

/// Every palette exported to the styling system.
pub const PALETTES: [Palette; 2] = [BRAND, SIDEBAR];

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Custom property declarations for the given mode.
#[must_use]
pub const fn css_variables(mode: ThemeMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        ThemeMode::Light => &SIDEBAR_LIGHT,
        ThemeMode::Dark => &SIDEBAR_DARK,
    }
}

/// Render the custom properties for `mode` as a CSS declaration block body.
#[must_use]
pub fn css_variable_block(mode: ThemeMode) -> String {
    css_variables(mode)
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stylesheet declaring the custom properties for both modes.
///
/// Light values sit on `:root`; dark values on `[data-theme="dark"]`.
#[must_use]
pub fn css_stylesheet() -> String {
    let block = |mode| {
        css_variable_block(mode)
            .lines()
            .map(|line| format!("  {line}\n"))
            .collect::<String>()
    };
    format!(
        ":root {{\n{}}}\n\n[data-theme=\"{}\"] {{\n{}}}\n",
        block(ThemeMode::Light),
        ThemeMode::Dark.as_str(),
        block(ThemeMode::Dark)
    )
}

/// Tokens shaped for Tailwind's `theme.extend.colors`.
///
/// Palettes nest by id: `brand.blue` yields the `brand-blue` utilities and
/// `sidebar.DEFAULT` yields the bare `sidebar` ones.
#[must_use]
pub fn tailwind_colors() -> Value {
    let mut colors = Map::new();
    for palette in PALETTES {
        let shades = palette
            .shades
            .iter()
            .map(|token| (token.name.to_string(), Value::from(token.value)))
            .collect::<Map<_, _>>();
        colors.insert(palette.id.to_string(), Value::Object(shades));
    }
    Value::Object(colors)
}

/// Whether `value` is a color the token set is allowed to use.
///
/// Accepts `#rgb`, `#rrggbb`, and `hsl(var(--name))` references.
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.chars().all(|ch| ch.is_ascii_hexdigit());
    }
    value
        .strip_prefix("hsl(var(--")
        .and_then(|rest| rest.strip_suffix("))"))
        .is_some_and(|name| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        })
}
