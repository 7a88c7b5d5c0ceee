use std::sync::Arc;

use crate::errors::CartError;
use crate::hooks::{CartOperation, StockWrite, SyncHook};
use crate::models::product::{Product, ProductId};
use crate::models::stock::StockEntry;
use crate::providers::traits::ShopApi;

/// Remote side of every cart operation: stock reads, stock writes and
/// product lookups, with registered hooks told about each write.
///
/// Stock is never cached. Each call goes to the API.
pub struct StockService {
    api: Arc<dyn ShopApi>,
    hooks: Vec<Arc<dyn SyncHook>>,
}

impl StockService {
    pub fn new(api: Arc<dyn ShopApi>) -> Self {
        Self {
            api,
            hooks: Vec::new(),
        }
    }

    pub fn api(&self) -> Arc<dyn ShopApi> {
        Arc::clone(&self.api)
    }

    pub fn add_hook(&mut self, hook: Arc<dyn SyncHook>) {
        self.hooks.push(hook);
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    pub async fn current(&self, product_id: ProductId) -> Result<StockEntry, CartError> {
        let entry = self.api.get_stock(product_id).await?;
        tracing::debug!(product_id, amount = entry.amount, "stock read");
        Ok(entry)
    }

    pub async fn product(&self, product_id: ProductId) -> Result<Product, CartError> {
        self.api.get_product(product_id).await
    }

    /// `PUT` a new stock amount and report it to the hooks.
    pub async fn write(
        &self,
        operation: CartOperation,
        product_id: ProductId,
        observed: i64,
        amount: i64,
    ) -> Result<StockWrite, CartError> {
        self.api.put_stock(product_id, amount).await?;
        let write = StockWrite {
            operation,
            product_id,
            observed,
            written: amount,
        };
        tracing::debug!(%operation, product_id, observed, written = amount, "stock written");
        for hook in &self.hooks {
            hook.stock_written(&write);
        }
        Ok(write)
    }

    /// The local commit for `write` is not going to happen.
    pub fn report_uncommitted(&self, write: &StockWrite, error: &CartError) {
        tracing::warn!(
            operation = %write.operation,
            product_id = write.product_id,
            written = write.written,
            %error,
            "stock updated but cart left unchanged"
        );
        for hook in &self.hooks {
            hook.commit_skipped(write, error);
        }
    }
}
