//! Product snapshot type.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Denormalized product display data, copied from the backend response when
/// the shopper adds the product.
///
/// Snapshots are stored verbatim and never refreshed: a price change on the
/// backend is not reflected in a line that was already added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSnapshot {
    /// Backend product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in minor units of the store currency.
    pub price: i64,
    /// Units in stock when the snapshot was taken, if known.
    #[serde(default)]
    pub stock: Option<u32>,
    /// Image URL or asset reference.
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductSnapshot {
    /// Create a snapshot with no stock or image information.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock: None,
            image: None,
        }
    }

    /// Set the stock count.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Unit price as money in `currency`.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Whether the snapshot says the product is sold out.
    pub fn is_sold_out(&self) -> bool {
        self.stock == Some(0)
    }
}
