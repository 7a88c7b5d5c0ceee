use crate::errors::CartError;

/// String key-value storage, the shape of browser local storage.
///
/// The cart store reads its key once when opened and overwrites it with a
/// full snapshot after every change.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CartError>;

    fn set(&self, key: &str, value: &str) -> Result<(), CartError>;

    /// Returns `true` if the key existed.
    fn remove(&self, key: &str) -> Result<bool, CartError>;
}
