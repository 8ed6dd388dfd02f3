//! Width and padding rules for the page container.

use yew::Classes;

/// Horizontal padding shared by every container width.
pub const CONTAINER_PADDING: &str = "px-4 sm:px-6 lg:px-8";

/// Width behaviour of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContainerWidth {
    /// Centered with a capped max width.
    #[default]
    Constrained,
    /// Spans the full available width.
    Fluid,
}

impl ContainerWidth {
    /// Map the `fluid` prop onto a width mode.
    #[must_use]
    pub const fn from_fluid(fluid: bool) -> Self {
        if fluid { Self::Fluid } else { Self::Constrained }
    }

    /// Tailwind classes selecting the width.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Constrained => "mx-auto w-full max-w-7xl",
            Self::Fluid => "w-full",
        }
    }
}

/// Compose the container class list; caller classes are appended last.
#[must_use]
pub fn container_classes(fluid: bool, extra: &Classes) -> Classes {
    let mut classes = Classes::from(ContainerWidth::from_fluid(fluid).as_class());
    classes.push(CONTAINER_PADDING);
    if !extra.is_empty() {
        classes.push(extra.clone());
    }
    classes
}
