//! Stock handling on quantity changes.

use serde::{Deserialize, Serialize};

/// How the cart reacts when a requested quantity exceeds the stock recorded
/// in the line's product snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockPolicy {
    /// Store the requested quantity. Stock limits are left to the caller.
    #[default]
    Unbounded,
    /// Clamp to the snapshot's stock when it is known.
    ClampToSnapshot,
}

impl StockPolicy {
    /// Quantity to store for a `requested` amount given the snapshot `stock`.
    pub fn apply(self, requested: u32, stock: Option<u32>) -> u32 {
        match (self, stock) {
            (StockPolicy::ClampToSnapshot, Some(stock)) => requested.min(stock),
            _ => requested,
        }
    }
}
