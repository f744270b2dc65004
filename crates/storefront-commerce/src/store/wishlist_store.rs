//! Wishlist bound to durable storage.

use storefront_cache::Storage;

use crate::catalog::ProductSnapshot;
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::store::slot::StateSlot;
use crate::wishlist::Wishlist;

/// The wishlist plus its persisted snapshot.
#[derive(Debug)]
pub struct WishlistStore<S> {
    wishlist: Wishlist,
    state: StateSlot<Wishlist, S>,
}

impl<S: Storage> WishlistStore<S> {
    /// Rehydrate the wishlist stored under `config.wishlist_key()`.
    pub fn open(store: S, config: &StoreConfig) -> Self {
        let (state, restored) =
            StateSlot::open(store, config.wishlist_key(), config.persist_mode);
        Self {
            wishlist: restored.unwrap_or_default(),
            state,
        }
    }

    /// The current wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Save a product.
    pub fn add(&mut self, product: ProductSnapshot) -> bool {
        let added = self.wishlist.add(product);
        if added {
            self.commit();
        }
        added
    }

    /// Remove a product.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<ProductSnapshot> {
        let removed = self.wishlist.remove(product_id);
        if removed.is_some() {
            self.commit();
        }
        removed
    }

    /// Save or unsave a product. Returns whether it is saved afterwards.
    pub fn toggle(&mut self, product: ProductSnapshot) -> bool {
        let saved = self.wishlist.toggle(product);
        self.commit();
        saved
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.wishlist.clear();
        self.commit();
    }

    /// Write pending changes.
    pub fn flush(&mut self) -> Result<(), CommerceError> {
        self.state.flush(&self.wishlist)
    }

    /// Storage key of the snapshot.
    pub fn key(&self) -> &str {
        self.state.key()
    }

    /// Whether there are changes not yet written.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Whether storage failed and the wishlist now lives in memory only.
    pub fn is_degraded(&self) -> bool {
        self.state.is_degraded()
    }

    fn commit(&mut self) {
        tracing::debug!(items = self.wishlist.len(), "wishlist changed");
        self.state.commit(&self.wishlist);
    }
}
