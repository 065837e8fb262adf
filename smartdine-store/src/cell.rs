//! Typed persistent state cells
//!
//! A `StateCell` binds one in-memory value to one storage key. It is
//! hydrated exactly once at construction and written through on every
//! update; reads never touch the database again. Each collection of the
//! domain store owns one cell, so cross-collection updates are separate
//! durable writes with no transaction spanning them.

use crate::storage::{StateStorage, StorageResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One typed slot backed by durable storage
pub struct StateCell<T> {
    storage: StateStorage,
    key: &'static str,
    value: T,
}

impl<T> StateCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Hydrate the cell from storage, seeding it with `default` when the
    /// key is absent or its payload does not decode
    ///
    /// The fallback value is persisted immediately, so a corrupt payload
    /// is replaced on the spot rather than resurfacing on every start.
    /// Read or write failures of the database itself are propagated.
    pub fn load(storage: &StateStorage, key: &'static str, default: T) -> StorageResult<Self> {
        let value = match storage.read_bytes(key)? {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(error) => {
                    tracing::warn!(key, %error, "Stored value is undecodable, reseeding default");
                    storage.write_value(key, &default)?;
                    default
                }
            },
            None => {
                tracing::info!(key, "No stored value, seeding default");
                storage.write_value(key, &default)?;
                default
            }
        };

        Ok(Self {
            storage: storage.clone(),
            key,
            value,
        })
    }

    /// Current in-memory value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and synchronously write it through
    ///
    /// The in-memory value is updated even when the durable write fails;
    /// the error is returned so the caller can surface the lost
    /// durability, and the next successful `set` on this key repairs it.
    pub fn set(&mut self, value: T) -> StorageResult<()> {
        self.value = value;
        if let Err(error) = self.storage.write_value(self.key, &self.value) {
            tracing::error!(key = self.key, %error, "State write failed, in-memory value kept");
            return Err(error);
        }
        Ok(())
    }
}
