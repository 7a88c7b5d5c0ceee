use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::{CartConfig, DEFAULT_TIMEOUT_SECS};
use crate::errors::CartError;
use crate::models::product::{Product, ProductId};
use crate::models::stock::{StockEntry, StockUpdate};
use super::traits::ShopApi;

/// Thin JSON-over-HTTP client for the catalog/stock API.
///
/// - `get(path)` / `put(path, body)` join `path` onto the base URL and decode
///   the JSON body.
/// - Transport failures become `CartError::Network`, non-2xx statuses
///   `CartError::Api`, undecodable bodies `CartError::InvalidResponse`.
/// - No retries. The only time limit is the per-request timeout.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CartError> {
        Self::build(base_url.into(), Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn from_config(config: &CartConfig) -> Result<Self, CartError> {
        Self::build(config.api_base_url.clone(), config.request_timeout)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn build(base_url: String, timeout: Duration) -> Result<Self, CartError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        let client = builder
            .build()
            .map_err(|e| CartError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (`/stock/1` → `{base}/stock/1`).
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CartError> {
        tracing::debug!(path, "GET");
        let resp = self.client.get(self.url(path)).send().await?;
        Self::decode(path, resp).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, CartError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "PUT");
        let resp = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(path, resp).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, CartError> {
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(path, status = status.as_u16(), "request rejected");
            return Err(CartError::Api {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        resp.json().await.map_err(|e| CartError::InvalidResponse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ShopApi for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>, CartError> {
        self.get("/products").await
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CartError> {
        self.get(&format!("/products/{product_id}")).await
    }

    async fn get_stock(&self, product_id: ProductId) -> Result<StockEntry, CartError> {
        self.get(&format!("/stock/{product_id}")).await
    }

    async fn put_stock(&self, product_id: ProductId, amount: i64) -> Result<StockEntry, CartError> {
        let mut entry: StockEntry = self
            .put(&format!("/stock/{product_id}"), &StockUpdate { amount })
            .await?;
        if entry.id == 0 {
            entry.id = product_id;
        }
        Ok(entry)
    }
}
