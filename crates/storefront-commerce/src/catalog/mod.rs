//! Catalog module.
//!
//! Contains the product snapshot captured at add-time and the variant
//! selector used to tell purchasable options apart.

mod product;
mod variant;

pub use product::ProductSnapshot;
pub use variant::VariantSelector;
