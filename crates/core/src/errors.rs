use thiserror::Error;

use crate::models::product::ProductId;

/// Unified error type for the rocketshoes-cart library.
/// Every fallible public function returns `Result<T, CartError>`.
#[derive(Debug, Error)]
pub enum CartError {
    // ── Storage / Snapshot ──────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("Request to {path} failed with status {status}")]
    Api { path: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from {path}: {message}")]
    InvalidResponse { path: String, message: String },

    // ── Business Rules ──────────────────────────────────────────────
    #[error("Requested quantity {requested} of product {product_id} exceeds stock ({available})")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("Product {0} is already in the cart")]
    AlreadyInCart(ProductId),

    #[error("Quantity for product {product_id} is out of range")]
    AmountOverflow { product_id: ProductId },

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },
}

impl CartError {
    /// `true` for failures caused by the transport or the remote service,
    /// as opposed to a rule the store enforced itself.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CartError::Api { .. } | CartError::Network(_) | CartError::InvalidResponse { .. }
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CartError {
    fn from(e: std::io::Error) -> Self {
        CartError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CartError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            let path = e.url().map(|u| u.path().to_string()).unwrap_or_default();
            return CartError::Api {
                path,
                status: status.as_u16(),
            };
        }
        CartError::Network(e.to_string())
    }
}
