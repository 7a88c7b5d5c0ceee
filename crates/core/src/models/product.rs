use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog identifier as served by the `/products` endpoint.
pub type ProductId = u64;

/// A catalog entry (`GET /products`, `GET /products/{id}`).
///
/// Immutable once fetched. Prices arrive as JSON numbers and are held as
/// `Decimal` so subtotals don't pick up floating-point drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}
