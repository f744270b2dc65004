//! Client-side state for the storefront.
//!
//! This crate holds what the shopper has chosen between page loads:
//!
//! - **Catalog**: product snapshots and variant selectors
//! - **Cart**: line items keyed on product and variant, with derived totals
//! - **Wishlist**: products saved for later
//! - **Store**: the aggregates bound to durable storage, owned by an
//!   explicitly constructed [`Storefront`]
//!
//! Pricing, inventory, payments and orders live in the backend API and are
//! not modelled here.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_cache::FileStore;
//! use storefront_commerce::prelude::*;
//!
//! let store = FileStore::open(".storefront")?;
//! let mut shop = Storefront::new(store, StoreConfig::default())?;
//!
//! let remera = ProductSnapshot::new("MLA-1", "Remera", 1500).with_stock(4);
//! shop.cart_mut().add_quantity(remera.clone(), 2, Some(VariantSelector::new("color", "red")));
//! shop.cart_mut().add(remera, Some(VariantSelector::new("color", "red")));
//!
//! let cart = shop.cart().cart();
//! assert_eq!(cart.unique_line_count(), 1);
//! println!("Total: {}", cart.total_price());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod config;
pub mod store;
pub mod wishlist;

pub use config::{PersistMode, StoreConfig};
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use store::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{PersistMode, StoreConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{ProductSnapshot, VariantSelector};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary, LineSummary, StockPolicy};

    // Wishlist
    pub use crate::wishlist::Wishlist;

    // Stores
    pub use crate::store::{CartStore, Storefront, WishlistStore};
}
