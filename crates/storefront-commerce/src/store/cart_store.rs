//! Cart bound to durable storage.

use storefront_cache::Storage;

use crate::cart::{Cart, CartSummary};
use crate::catalog::{ProductSnapshot, VariantSelector};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::LineId;
use crate::store::slot::StateSlot;

/// The cart aggregate plus its persisted snapshot.
///
/// Content mutations are written through according to the configured
/// persist mode. Visibility changes are not persisted.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    state: StateSlot<Cart, S>,
}

impl<S: Storage> CartStore<S> {
    /// Rehydrate the cart stored under `config.cart_key()`, or start empty.
    pub fn open(store: S, config: &StoreConfig) -> Self {
        let (state, restored) = StateSlot::open(store, config.cart_key(), config.persist_mode);
        let mut cart = restored.unwrap_or_else(|| Cart::new(config.currency));
        if cart.currency() != config.currency {
            tracing::warn!(
                stored = %cart.currency(),
                configured = %config.currency,
                "cart currency changed, re-denominating"
            );
            cart.set_currency(config.currency);
        }
        cart.set_stock_policy(config.stock_policy);
        Self { cart, state }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `product`.
    pub fn add(
        &mut self,
        product: ProductSnapshot,
        variant: Option<VariantSelector>,
    ) -> Option<LineId> {
        self.add_quantity(product, 1, variant)
    }

    /// Add `quantity` units of `product`.
    pub fn add_quantity(
        &mut self,
        product: ProductSnapshot,
        quantity: u32,
        variant: Option<VariantSelector>,
    ) -> Option<LineId> {
        let product_id = product.id.clone();
        let line = self.cart.add_quantity(product, quantity, variant);
        tracing::debug!(
            product_id = %product_id,
            quantity,
            line_id = ?line.as_ref().map(LineId::as_str),
            "cart add"
        );
        self.commit();
        line
    }

    /// Remove a line.
    pub fn remove(&mut self, line_id: &LineId) -> bool {
        let removed = self.cart.remove(line_id);
        if removed {
            tracing::debug!(line_id = %line_id, "cart remove");
            self.commit();
        }
        removed
    }

    /// Overwrite a line's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, line_id: &LineId, quantity: i64) -> bool {
        let changed = self.cart.set_quantity(line_id, quantity);
        if changed {
            tracing::debug!(line_id = %line_id, quantity, "cart set quantity");
            self.commit();
        }
        changed
    }

    /// Add one to a line's quantity.
    pub fn increment(&mut self, line_id: &LineId) -> bool {
        let changed = self.cart.increment(line_id);
        if changed {
            self.commit();
        }
        changed
    }

    /// Subtract one from a line's quantity.
    pub fn decrement(&mut self, line_id: &LineId) -> bool {
        let changed = self.cart.decrement(line_id);
        if changed {
            self.commit();
        }
        changed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        tracing::debug!("cart clear");
        self.commit();
    }

    /// Show the cart.
    pub fn open_panel(&mut self) {
        self.cart.open();
    }

    /// Hide the cart.
    pub fn close_panel(&mut self) {
        self.cart.close();
    }

    /// Flip cart visibility.
    pub fn toggle_panel(&mut self) {
        self.cart.toggle();
    }

    /// Totals and per-line breakdown.
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Write pending changes.
    pub fn flush(&mut self) -> Result<(), CommerceError> {
        self.state.flush(&self.cart)
    }

    /// Storage key of the snapshot.
    pub fn key(&self) -> &str {
        self.state.key()
    }

    /// Whether there are changes not yet written.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Whether storage failed and the cart now lives in memory only.
    pub fn is_degraded(&self) -> bool {
        self.state.is_degraded()
    }

    fn commit(&mut self) {
        self.state.commit(&self.cart);
    }
}
