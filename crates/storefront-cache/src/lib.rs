//! Durable key-value storage for storefront client state.
//!
//! Provides a small storage contract ([`Storage`]) with an in-memory and a
//! file-backed implementation, a typed JSON wrapper ([`Cache`]), and a
//! [`Persisted`] slot that snapshots one value under a fixed key.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartItem>,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("storefront:cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = cache.get("storefront:cart")?;
//!
//! // Delete a value
//! cache.delete("storefront:cart")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;
mod persisted;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, Storage};
pub use memory::MemoryStore;
pub use persisted::{Persisted, Snapshot};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, MemoryStore, Persisted, Snapshot, Storage};
}
