//! Demo product catalog rendered by the storefront shell.

use rust_decimal::Decimal;

use crate::core::cart::CartItem;

/// A product offered on the storefront.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// Product identifier; becomes the cart line id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unit price in minor units (cents).
    pub price_cents: i64,
    /// Image path under the static assets directory.
    pub image: &'static str,
}

impl Product {
    /// Unit price as a decimal amount.
    #[must_use]
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }

    /// Build a cart line for `quantity` units of this product.
    #[must_use]
    pub fn to_cart_item(&self, quantity: u32) -> CartItem {
        CartItem::new(self.id, self.name, self.price(), self.image, quantity)
    }
}

/// Static catalog used until a product API exists.
pub const DEMO_CATALOG: &[Product] = &[
    Product {
        id: "tee-classic",
        name: "Classic Tee",
        price_cents: 1_999,
        image: "/static/images/tee-classic.webp",
    },
    Product {
        id: "mug-enamel",
        name: "Enamel Mug",
        price_cents: 1_250,
        image: "/static/images/mug-enamel.webp",
    },
    Product {
        id: "cap-logo",
        name: "Logo Cap",
        price_cents: 2_400,
        image: "/static/images/cap-logo.webp",
    },
    Product {
        id: "sticker-pack",
        name: "Sticker Pack",
        price_cents: 500,
        image: "/static/images/sticker-pack.webp",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_items_validate() {
        for (index, product) in DEMO_CATALOG.iter().enumerate() {
            assert!(
                DEMO_CATALOG
                    .iter()
                    .skip(index + 1)
                    .all(|other| other.id != product.id),
                "duplicate id {}",
                product.id
            );
            assert!(product.to_cart_item(1).validate().is_ok());
        }
    }

    #[test]
    fn price_converts_from_cents() {
        let mug = &DEMO_CATALOG[1];
        assert_eq!(mug.price(), Decimal::new(1250, 2));
        assert_eq!(mug.to_cart_item(2).line_total(), Decimal::from(25));
    }
}
