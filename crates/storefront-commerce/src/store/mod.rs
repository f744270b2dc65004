//! Stores: aggregates bound to durable storage.
//!
//! Each store applies a mutation to its in-memory aggregate, then writes a
//! snapshot according to the configured [`PersistMode`](crate::PersistMode).
//! Storage failures never reach the caller of a mutation: the store logs a
//! warning, marks itself degraded, and keeps serving from memory.

mod cart_store;
mod slot;
mod storefront;
mod wishlist_store;

pub use cart_store::CartStore;
pub use storefront::Storefront;
pub use wishlist_store::WishlistStore;
