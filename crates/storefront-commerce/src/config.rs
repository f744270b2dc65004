//! Store configuration.

use serde::{Deserialize, Serialize};
use storefront_cache::cache_key;

use crate::cart::StockPolicy;
use crate::error::CommerceError;
use crate::money::Currency;

/// When mutations are written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PersistMode {
    /// Write after every mutation.
    #[default]
    Immediate,
    /// Mark the store dirty and write on explicit flush.
    Deferred,
}

/// Settings shared by the cart and wishlist stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency all snapshot prices are expressed in.
    #[serde(default)]
    pub currency: Currency,

    /// Prefix for storage keys.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Write strategy.
    #[serde(default)]
    pub persist_mode: PersistMode,

    /// Stock handling on quantity changes.
    #[serde(default)]
    pub stock_policy: StockPolicy,
}

fn default_namespace() -> String {
    "storefront".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            namespace: default_namespace(),
            persist_mode: PersistMode::default(),
            stock_policy: StockPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Check the namespace can be used as a storage key segment.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let ns = &self.namespace;
        if ns.is_empty() {
            return Err(CommerceError::InvalidConfig(
                "namespace must not be empty".to_string(),
            ));
        }
        if !ns
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CommerceError::InvalidConfig(format!(
                "namespace {ns:?} may only contain letters, digits, '-' and '_'"
            )));
        }
        Ok(())
    }

    /// Storage key of the cart snapshot.
    pub fn cart_key(&self) -> String {
        cache_key!(self.namespace.as_str(), "cart")
    }

    /// Storage key of the wishlist snapshot.
    pub fn wishlist_key(&self) -> String {
        cache_key!(self.namespace.as_str(), "wishlist")
    }
}
