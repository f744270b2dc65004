//! Saved-for-later product list.

use crate::catalog::ProductSnapshot;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products the shopper saved, unique by product id, in the order they were
/// saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "WishlistRecord")]
pub struct Wishlist {
    items: Vec<ProductSnapshot>,
}

#[derive(Deserialize)]
struct WishlistRecord {
    #[serde(default)]
    items: Vec<ProductSnapshot>,
}

impl From<WishlistRecord> for Wishlist {
    fn from(record: WishlistRecord) -> Self {
        let mut wishlist = Wishlist::new();
        for item in record.items {
            wishlist.add(item);
        }
        wishlist
    }
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product. Returns `false` if it was already saved; the stored
    /// snapshot is not replaced.
    pub fn add(&mut self, product: ProductSnapshot) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Remove a product and return its snapshot.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<ProductSnapshot> {
        let idx = self.items.iter().position(|p| &p.id == product_id)?;
        Some(self.items.remove(idx))
    }

    /// Save the product if absent, remove it otherwise. Returns whether the
    /// product is saved afterwards.
    pub fn toggle(&mut self, product: ProductSnapshot) -> bool {
        if self.remove(&product.id).is_some() {
            false
        } else {
            self.items.push(product);
            true
        }
    }

    /// Check whether a product is saved.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    /// Get a saved snapshot.
    pub fn get(&self, product_id: &ProductId) -> Option<&ProductSnapshot> {
        self.items.iter().find(|p| &p.id == product_id)
    }

    /// Saved products in order.
    pub fn items(&self) -> &[ProductSnapshot] {
        &self.items
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
