use crate::errors::CartError;
use crate::models::cart::CartState;

use super::traits::KeyValueStore;

/// Serialize the whole cart to the JSON array stored under the cart key.
pub fn encode(state: &CartState) -> Result<String, CartError> {
    serde_json::to_string(state)
        .map_err(|e| CartError::Serialization(format!("Failed to serialize cart: {e}")))
}

/// Parse a stored snapshot back into a cart.
pub fn decode(json: &str) -> Result<CartState, CartError> {
    serde_json::from_str(json)
        .map_err(|e| CartError::Deserialization(format!("Failed to deserialize cart: {e}")))
}

/// Read the snapshot under `key`. A missing key is an empty cart.
pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<CartState, CartError> {
    match store.get(key)? {
        Some(json) => decode(&json),
        None => Ok(CartState::new()),
    }
}

/// Overwrite the snapshot under `key` with `state`.
pub fn save(store: &dyn KeyValueStore, key: &str, state: &CartState) -> Result<(), CartError> {
    let json = encode(state)?;
    store.set(key, &json)
}
