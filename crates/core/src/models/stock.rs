use serde::{Deserialize, Serialize};

use super::product::ProductId;

/// Remaining sellable units for one product (`GET /stock/{id}`).
///
/// Owned by the remote stock service. The amount is signed: the store's
/// write-backs can drive it below zero and the service accepts that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Absent from some `PUT` responses, hence the default.
    #[serde(default)]
    pub id: ProductId,
    pub amount: i64,
}

impl StockEntry {
    pub fn is_exhausted(&self) -> bool {
        self.amount <= 0
    }
}

/// Body of `PUT /stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub amount: i64,
}
