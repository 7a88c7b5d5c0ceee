use async_trait::async_trait;

use crate::errors::CartError;
use crate::models::product::{Product, ProductId};
use crate::models::stock::StockEntry;

/// The remote catalog and stock service, as the cart store sees it.
///
/// `ApiClient` implements this over HTTP. The store only ever talks to a
/// `dyn ShopApi`, so tests and alternative backends plug in here.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ShopApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, CartError>;

    /// `GET /products/{id}`
    async fn get_product(&self, product_id: ProductId) -> Result<Product, CartError>;

    /// `GET /stock/{id}`
    async fn get_stock(&self, product_id: ProductId) -> Result<StockEntry, CartError>;

    /// `PUT /stock/{id}` with `{ amount }`. Returns the entry as stored remotely.
    async fn put_stock(&self, product_id: ProductId, amount: i64) -> Result<StockEntry, CartError>;
}
