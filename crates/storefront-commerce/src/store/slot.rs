//! Fail-soft persistence shared by the stores.

use serde::{de::DeserializeOwned, Serialize};
use storefront_cache::{Persisted, Storage};

use crate::config::PersistMode;
use crate::error::CommerceError;

/// A persisted slot plus the write bookkeeping a store needs.
#[derive(Debug)]
pub(crate) struct StateSlot<T, S> {
    slot: Persisted<T, S>,
    mode: PersistMode,
    dirty: bool,
    degraded: bool,
}

impl<T, S> StateSlot<T, S>
where
    T: Serialize + DeserializeOwned,
    S: Storage,
{
    /// Bind `key` and read back whatever was stored there.
    ///
    /// A missing or unreadable snapshot yields `None`; the latter is logged.
    pub(crate) fn open(store: S, key: String, mode: PersistMode) -> (Self, Option<T>) {
        let slot = Persisted::new(store, key);
        let restored = match slot.load() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = slot.key(), error = %e, "discarding unreadable snapshot");
                None
            }
        };
        tracing::debug!(key = slot.key(), restored = restored.is_some(), "opened store");

        let state = Self {
            slot,
            mode,
            dirty: false,
            degraded: false,
        };
        (state, restored)
    }

    /// Record a mutation of `value`.
    pub(crate) fn commit(&mut self, value: &T) {
        self.dirty = true;
        if self.mode == PersistMode::Immediate && !self.degraded {
            if let Err(e) = self.write(value) {
                self.degraded = true;
                tracing::warn!(
                    key = self.slot.key(),
                    error = %e,
                    "storage unavailable, continuing in memory"
                );
            }
        }
    }

    /// Write `value` if it has unsaved changes. Succeeding clears the
    /// degraded flag.
    pub(crate) fn flush(&mut self, value: &T) -> Result<(), CommerceError> {
        if !self.dirty {
            return Ok(());
        }
        self.write(value)?;
        if self.degraded {
            tracing::info!(key = self.slot.key(), "storage recovered");
            self.degraded = false;
        }
        Ok(())
    }

    fn write(&mut self, value: &T) -> Result<(), CommerceError> {
        let revision = self.slot.save(value)?;
        self.dirty = false;
        tracing::debug!(key = self.slot.key(), revision, "persisted snapshot");
        Ok(())
    }

    pub(crate) fn key(&self) -> &str {
        self.slot.key()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn is_degraded(&self) -> bool {
        self.degraded
    }
}
