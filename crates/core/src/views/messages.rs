//! User-facing notification texts (pt-BR) for failed cart actions.

use crate::errors::CartError;
use crate::hooks::CartOperation;
use crate::AddOutcome;

pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";
pub const ADD_FAILED: &str = "Erro na adição do produto";
pub const REMOVE_FAILED: &str = "Erro na remoção do produto";
pub const UPDATE_FAILED: &str = "Erro na alteração de quantidade do produto";
/// The decrement path reports with the add text.
pub const DECREMENT_FAILED: &str = ADD_FAILED;

/// Text to show when `operation` failed with `error`.
/// Stock shortages get the out-of-stock text whatever the operation.
pub fn failure_message(operation: CartOperation, error: &CartError) -> &'static str {
    if matches!(error, CartError::OutOfStock { .. }) {
        return OUT_OF_STOCK;
    }
    match operation {
        CartOperation::Add => ADD_FAILED,
        CartOperation::Decrement => DECREMENT_FAILED,
        CartOperation::Remove => REMOVE_FAILED,
        CartOperation::UpdateAmount => UPDATE_FAILED,
    }
}

/// Warning to show after an add that went through on exhausted stock.
pub fn add_notice(outcome: &AddOutcome) -> Option<&'static str> {
    outcome.stock_exhausted.then_some(OUT_OF_STOCK)
}
