//! Read-only cart breakdown for display.

use crate::cart::Cart;
use crate::catalog::VariantSelector;
use crate::ids::{LineId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals and per-line breakdown of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of price * quantity.
    pub total_price: Money,
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineSummary>,
}

impl CartSummary {
    /// Build a summary of `cart`.
    pub fn of(cart: &Cart) -> Self {
        let currency = cart.currency();
        let lines = cart
            .lines()
            .iter()
            .map(|line| LineSummary {
                line_id: line.id.clone(),
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                variant: line.variant.clone(),
                unit_price: line.product.unit_price(currency),
                quantity: line.quantity,
                subtotal: line.subtotal(currency),
                over_stock: line.exceeds_stock(),
            })
            .collect();

        Self {
            line_count: cart.unique_line_count(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            lines,
        }
    }

    /// Lines whose quantity is above the snapshot stock.
    pub fn over_stock(&self) -> impl Iterator<Item = &LineSummary> {
        self.lines.iter().filter(|l| l.over_stock)
    }
}

/// Breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    /// Line ID.
    pub line_id: LineId,
    /// Product ID.
    pub product_id: ProductId,
    /// Product name from the snapshot.
    pub name: String,
    /// Selected variant, if any.
    pub variant: Option<VariantSelector>,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price * quantity.
    pub subtotal: Money,
    /// Quantity exceeds the snapshot stock.
    pub over_stock: bool,
}
