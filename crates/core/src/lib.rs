pub mod config;
pub mod errors;
pub mod format;
pub mod hooks;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;
pub mod views;

use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::watch;

use config::DEFAULT_STORAGE_KEY;
use errors::CartError;
use hooks::{CartOperation, StockWrite, SyncHook};
use models::{
    cart::{CartLineItem, CartState},
    product::ProductId,
};
use providers::traits::ShopApi;
use services::{cart_service::CartService, stock_service::StockService};
use storage::{snapshot, traits::KeyValueStore};

/// How `add_product` satisfied the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddKind {
    /// A new line item with amount 1 was appended.
    Appended,
    /// The product was already in the cart; its amount went up by one.
    Incremented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    pub kind: AddKind,
    /// Stock read at the start of the operation was already ≤ 0.
    /// The add still went ahead; callers typically warn the user.
    pub stock_exhausted: bool,
}

/// Owner of the cart. Built once at start-up and handed to whatever renders
/// or mutates the cart.
///
/// Every operation reads remote stock, writes remote stock, then commits the
/// new cart locally: snapshot to storage, then publish to subscribers. The
/// remote and local writes are not transactional; see [`hooks`].
#[must_use]
pub struct CartStore {
    state: CartState,
    cart_service: CartService,
    stock_service: StockService,
    storage: Arc<dyn KeyValueStore>,
    storage_key: String,
    publisher: watch::Sender<CartState>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.state.len())
            .field("storage_key", &self.storage_key)
            .field("hooks", &self.stock_service.hook_count())
            .finish()
    }
}

impl CartStore {
    /// Open the store under the default storage key, rehydrating any snapshot.
    pub fn open(
        api: Arc<dyn ShopApi>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, CartError> {
        Self::open_with_key(api, storage, DEFAULT_STORAGE_KEY)
    }

    /// Open the store under `storage_key`. A missing key is an empty cart;
    /// an unreadable snapshot is an error.
    pub fn open_with_key(
        api: Arc<dyn ShopApi>,
        storage: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
    ) -> Result<Self, CartError> {
        let storage_key = storage_key.into();
        let state = snapshot::load(storage.as_ref(), &storage_key)?;
        tracing::debug!(items = state.len(), key = %storage_key, "cart rehydrated");
        let (publisher, _) = watch::channel(state.clone());
        Ok(Self {
            state,
            cart_service: CartService::new(),
            stock_service: StockService::new(api),
            storage,
            storage_key,
            publisher,
        })
    }

    /// HTTP API plus file-backed storage, both taken from `config`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_config(config: &config::CartConfig) -> Result<Self, CartError> {
        let api = Arc::new(providers::http::ApiClient::from_config(config)?);
        let storage = Arc::new(storage::file::FileStore::new(config.storage_path.clone()));
        Self::open_with_key(api, storage, config.storage_key.clone())
    }

    /// Register a hook that observes stock writes and skipped commits.
    pub fn with_hook(mut self, hook: Arc<dyn SyncHook>) -> Self {
        self.stock_service.add_hook(hook);
        self
    }

    // ── Operations ──────────────────────────────────────────────────

    /// Put one unit of `product_id` in the cart.
    ///
    /// Already in the cart: same as `update_product_amount(product_id, 1)`.
    /// Otherwise writes `stock - 1`, fetches the product and appends it.
    /// Exhausted stock is flagged in the outcome but does not stop the add.
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<AddOutcome, CartError> {
        let stock = self.stock_service.current(product_id).await?;
        let stock_exhausted = stock.is_exhausted();
        if stock_exhausted {
            tracing::warn!(product_id, amount = stock.amount, "adding product with no stock left");
        }

        if self.state.contains(product_id) {
            self.update_product_amount(product_id, 1).await?;
            return Ok(AddOutcome {
                kind: AddKind::Incremented,
                stock_exhausted,
            });
        }

        let target = offset(product_id, stock.amount, -1)?;
        let write = self
            .stock_service
            .write(CartOperation::Add, product_id, stock.amount, target)
            .await?;
        let product = match self.stock_service.product(product_id).await {
            Ok(product) => product,
            Err(e) => return Err(self.uncommitted(&write, e)),
        };

        let mut next = self.state.clone();
        if let Err(e) = self.cart_service.append(&mut next, product) {
            return Err(self.uncommitted(&write, e));
        }
        self.commit(next);

        Ok(AddOutcome {
            kind: AddKind::Appended,
            stock_exhausted,
        })
    }

    /// The cart page's "+" button.
    pub async fn increment_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        self.update_product_amount(product_id, 1).await
    }

    /// Return one unit to stock (`stock + 1`), then lower the line item by one.
    ///
    /// The amount is not floored and the line item is never dropped here.
    /// If the product is not in the cart the stock write has already
    /// happened when `NotInCart` comes back.
    pub async fn decrement_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let stock = self.stock_service.current(product_id).await?;
        let target = offset(product_id, stock.amount, 1)?;
        let write = self
            .stock_service
            .write(CartOperation::Decrement, product_id, stock.amount, target)
            .await?;

        let mut next = self.state.clone();
        if let Err(e) = self.cart_service.adjust(&mut next, product_id, -1) {
            return Err(self.uncommitted(&write, e));
        }
        self.commit(next);
        Ok(())
    }

    /// Drop the line item for `product_id`.
    ///
    /// When both the line item and its stock entry exist, stock is written
    /// as `existing + existing` first. The line item is removed whether or
    /// not that exchange succeeded; a failed exchange is still returned as
    /// the error, after the removal has been committed.
    pub async fn remove_product(
        &mut self,
        product_id: ProductId,
    ) -> Result<Option<CartLineItem>, CartError> {
        let existing = self.state.find(product_id).map(|i| i.amount);
        let sync = self.restock_removed(product_id, existing).await;

        let mut next = self.state.clone();
        let removed = self.cart_service.remove(&mut next, product_id);
        if removed.is_some() {
            self.commit(next);
        }

        sync.map(|_| removed)
    }

    /// Raise a line item's amount by `amount` (additive, not absolute).
    ///
    /// `amount ≤ 0` is ignored. Stock below `amount` is `OutOfStock` with
    /// nothing written. Otherwise stock is written as `stock - 1` and the
    /// new amount committed.
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        if amount <= 0 {
            tracing::debug!(product_id, amount, "ignoring non-positive amount");
            return Ok(());
        }

        let stock = self.stock_service.current(product_id).await?;
        if stock.amount < amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut next = self.state.clone();
        self.cart_service.adjust(&mut next, product_id, amount)?;
        let target = offset(product_id, stock.amount, -1)?;
        self.stock_service
            .write(CartOperation::UpdateAmount, product_id, stock.amount, target)
            .await?;
        self.commit(next);
        Ok(())
    }

    // ── Read access ─────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Quantity held for `product_id`, 0 when absent.
    #[must_use]
    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.state.find(product_id).map_or(0, |i| i.amount)
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.state.total()
    }

    /// Receiver that sees every committed cart, starting with the current one.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.publisher.subscribe()
    }

    /// The API the store synchronizes against, for views that need the catalog.
    #[must_use]
    pub fn api(&self) -> Arc<dyn ShopApi> {
        self.stock_service.api()
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The cart as it is written to storage.
    pub fn snapshot_json(&self) -> Result<String, CartError> {
        snapshot::encode(&self.state)
    }

    // ── Internal ────────────────────────────────────────────────────

    async fn restock_removed(
        &self,
        product_id: ProductId,
        existing: Option<i64>,
    ) -> Result<Option<StockWrite>, CartError> {
        let stock = self.stock_service.current(product_id).await?;
        match existing {
            Some(amount) => {
                let target = offset(product_id, amount, amount)?;
                let write = self
                    .stock_service
                    .write(CartOperation::Remove, product_id, stock.amount, target)
                    .await?;
                Ok(Some(write))
            }
            None => Ok(None),
        }
    }

    fn uncommitted(&self, write: &StockWrite, error: CartError) -> CartError {
        self.stock_service.report_uncommitted(write, &error);
        error
    }

    /// Swap in `next`, snapshot it and notify subscribers.
    /// A failed snapshot write is logged, not returned.
    fn commit(&mut self, next: CartState) {
        self.state = next;
        if let Err(e) = snapshot::save(self.storage.as_ref(), &self.storage_key, &self.state) {
            tracing::warn!(error = %e, key = %self.storage_key, "failed to persist cart snapshot");
        }
        self.publisher.send_replace(self.state.clone());
        tracing::info!(items = self.state.len(), total = %self.state.total(), "cart committed");
    }
}

/// `amount + delta`, or `AmountOverflow` when it leaves the `i64` range.
fn offset(product_id: ProductId, amount: i64, delta: i64) -> Result<i64, CartError> {
    amount
        .checked_add(delta)
        .ok_or(CartError::AmountOverflow { product_id })
}
