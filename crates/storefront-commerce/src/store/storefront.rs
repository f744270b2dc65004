//! Explicitly constructed container for the client-side stores.

use storefront_cache::Storage;

use crate::catalog::VariantSelector;
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::{LineId, ProductId};
use crate::store::{CartStore, WishlistStore};

/// Owns the cart and wishlist stores for one shopper session.
///
/// Built once by the host and handed to whatever needs it; there is no
/// global instance.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_cache::MemoryStore;
/// use storefront_commerce::prelude::*;
///
/// let mut shop = Storefront::new(MemoryStore::new(), StoreConfig::default())?;
/// shop.cart_mut().add(ProductSnapshot::new("MLA-1", "Remera", 1500), None);
/// assert_eq!(shop.cart().cart().total_items(), 1);
/// ```
#[derive(Debug)]
pub struct Storefront<S> {
    config: StoreConfig,
    cart: CartStore<S>,
    wishlist: WishlistStore<S>,
}

impl<S: Storage + Clone> Storefront<S> {
    /// Validate `config` and rehydrate both stores from `store`.
    pub fn new(store: S, config: StoreConfig) -> Result<Self, CommerceError> {
        config.validate()?;
        let cart = CartStore::open(store.clone(), &config);
        let wishlist = WishlistStore::open(store, &config);
        Ok(Self {
            config,
            cart,
            wishlist,
        })
    }
}

impl<S: Storage> Storefront<S> {
    /// Active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The cart store.
    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// The cart store, mutably.
    pub fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    /// The wishlist store.
    pub fn wishlist(&self) -> &WishlistStore<S> {
        &self.wishlist
    }

    /// The wishlist store, mutably.
    pub fn wishlist_mut(&mut self) -> &mut WishlistStore<S> {
        &mut self.wishlist
    }

    /// Move a saved product into the cart as one unit.
    ///
    /// The product stays in the wishlist if the cart refused it (sold out
    /// under a clamping stock policy). Returns `None` if the product was not
    /// saved or was refused.
    pub fn move_to_cart(
        &mut self,
        product_id: &ProductId,
        variant: Option<VariantSelector>,
    ) -> Option<LineId> {
        let product = self.wishlist.wishlist().get(product_id)?.clone();
        let line = self.cart.add(product, variant)?;
        self.wishlist.remove(product_id);
        Some(line)
    }

    /// Write pending changes of both stores.
    ///
    /// Both stores are attempted; the first error is returned.
    pub fn flush(&mut self) -> Result<(), CommerceError> {
        let cart = self.cart.flush();
        let wishlist = self.wishlist.flush();
        cart.and(wishlist)
    }

    /// Whether either store fell back to memory.
    pub fn is_degraded(&self) -> bool {
        self.cart.is_degraded() || self.wishlist.is_degraded()
    }
}
