//! The `KeyValueStore` trait implemented by all persistence backends.

use crate::StoreResult;

/// String-keyed, string-valued persistence with full-replace semantics.
///
/// `get` returns the value of the last successful `set` for that key, or
/// `None` if the key was never written or has been removed.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`.  Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
