//! Key/value client storage.
//!
//! The token and the theme preference live in `localStorage`. Access goes
//! through [`KeyValueStore`] so the API client and theme store can run
//! against an in-memory map in tests.

use crate::core::error::StorageError;
use crate::utils::dom;

/// String key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
///
/// Looks up the storage object on every call; a missing window or a
/// storage-disabled browser reads as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .ok_or(StorageError::Unavailable)?
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed)
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
