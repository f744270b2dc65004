//! Shopping cart module.
//!
//! Contains the cart aggregate, its lines, the stock policy applied on
//! quantity changes, and the read-only summary used for display.

mod cart;
mod policy;
mod summary;

pub use cart::{Cart, CartLine};
pub use policy::StockPolicy;
pub use summary::{CartSummary, LineSummary};
