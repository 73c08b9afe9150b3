//! Menu item - one orderable product from the static catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as listed in the catalog and carried inside a cart.
///
/// `price` travels as a JSON number so carts stay readable by any consumer
/// of the navigation payload. A missing price counts as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique within the catalog; not unique within a cart
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image reference (URL or bundled asset name)
    #[serde(default)]
    pub image: String,
}

impl MenuItem {
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn has_valid_price(&self) -> bool {
        !self.price.is_sign_negative()
    }
}
