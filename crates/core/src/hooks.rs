//! Observation points around the two non-transactional writes every cart
//! operation makes: remote stock first, then the local cart.
//!
//! The store does not compensate when the second write never happens. A
//! stricter setup registers a [`SyncHook`] and reacts there (queue a
//! compensating stock write, record an outbox entry, alert).

use std::fmt;

use crate::errors::CartError;
use crate::models::product::ProductId;

/// Which cart operation issued a stock write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartOperation {
    Add,
    Decrement,
    Remove,
    UpdateAmount,
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::Decrement => write!(f, "decrement"),
            CartOperation::Remove => write!(f, "remove"),
            CartOperation::UpdateAmount => write!(f, "update-amount"),
        }
    }
}

/// A stock write the remote service acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockWrite {
    pub operation: CartOperation,
    pub product_id: ProductId,
    /// Stock amount read just before the write.
    pub observed: i64,
    /// Amount sent in the `PUT`.
    pub written: i64,
}

pub trait SyncHook: Send + Sync {
    /// Called after every acknowledged stock write.
    fn stock_written(&self, _write: &StockWrite) {}

    /// Called when a stock write went through but the matching local commit
    /// did not. Remote stock and the cart have diverged at this point.
    fn commit_skipped(&self, _write: &StockWrite, _error: &CartError) {}
}
