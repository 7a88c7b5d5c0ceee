// ═══════════════════════════════════════════════════════════════════
// Service Tests: CartService (pure line-item logic), StockService
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

use rocketshoes_cart::errors::CartError;
use rocketshoes_cart::hooks::{CartOperation, StockWrite, SyncHook};
use rocketshoes_cart::models::cart::{CartLineItem, CartState};
use rocketshoes_cart::models::product::{Product, ProductId};
use rocketshoes_cart::models::stock::StockEntry;
use rocketshoes_cart::providers::traits::ShopApi;
use rocketshoes_cart::services::cart_service::CartService;
use rocketshoes_cart::services::stock_service::StockService;

fn product(id: ProductId, price: &str) -> Product {
    Product::new(
        id,
        format!("Tênis {id}"),
        price.parse::<Decimal>().unwrap(),
        format!("https://cdn.example.com/{id}.jpg"),
    )
}

fn cart_with(items: &[(ProductId, i64)]) -> CartState {
    CartState::from_items(
        items
            .iter()
            .map(|&(id, amount)| {
                let mut item = CartLineItem::from_product(product(id, "100"));
                item.amount = amount;
                item
            })
            .collect(),
    )
}

// ═══════════════════════════════════════════════════════════════════
// CartService
// ═══════════════════════════════════════════════════════════════════

mod cart_service {
    use super::*;

    #[test]
    fn append_adds_one_unit_at_the_end() {
        let svc = CartService::new();
        let mut state = cart_with(&[(1, 2)]);

        svc.append(&mut state, product(5, "59.9")).unwrap();

        assert_eq!(state.len(), 2);
        assert_eq!(state.items[1].id, 5);
        assert_eq!(state.items[1].amount, 1);
        assert_eq!(state.items[1].price, "59.9".parse::<Decimal>().unwrap());
    }

    #[test]
    fn append_rejects_duplicates() {
        let svc = CartService::new();
        let mut state = cart_with(&[(1, 2)]);

        let err = svc.append(&mut state, product(1, "100")).unwrap_err();

        assert!(matches!(err, CartError::AlreadyInCart(1)));
        assert_eq!(state.len(), 1);
        assert_eq!(state.items[0].amount, 2);
    }

    #[test]
    fn adjust_returns_new_amount() {
        let svc = CartService::new();
        let mut state = cart_with(&[(1, 2), (2, 1)]);

        assert_eq!(svc.adjust(&mut state, 2, 3).unwrap(), 4);
        assert_eq!(svc.adjust(&mut state, 1, -1).unwrap(), 1);
        assert_eq!(state.items[0].amount, 1);
        assert_eq!(state.items[1].amount, 4);
    }

    #[test]
    fn adjust_has_no_floor() {
        let svc = CartService::new();
        let mut state = cart_with(&[(1, 1)]);

        svc.adjust(&mut state, 1, -1).unwrap();
        svc.adjust(&mut state, 1, -1).unwrap();

        assert_eq!(state.items[0].amount, -1);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn adjust_overflow_leaves_amount() {
        let svc = CartService::new();
        let mut state = cart_with(&[(1, i64::MAX), (2, i64::MIN)]);

        assert!(matches!(
            svc.adjust(&mut state, 1, 1),
            Err(CartError::AmountOverflow { product_id: 1 })
        ));
        assert!(matches!(
            svc.adjust(&mut state, 2, -1),
            Err(CartError::AmountOverflow { product_id: 2 })
        ));
        assert_eq!(state.items[0].amount, i64::MAX);
        assert_eq!(state.items[1].amount, i64::MIN);
    }

    #[test]
    fn adjust_missing_item() {
        let svc = CartService::new();
        let mut state = CartState::new();

        assert!(matches!(
            svc.adjust(&mut state, 9, 1),
            Err(CartError::NotInCart(9))
        ));
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let svc = CartService::default();
        let mut state = cart_with(&[(1, 1), (2, 2), (3, 3)]);

        let removed = svc.remove(&mut state, 2).unwrap();

        assert_eq!(removed.amount, 2);
        let ids: Vec<ProductId> = state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_missing_is_none() {
        let svc = CartService::new();
        let mut state = cart_with(&[(1, 1)]);

        assert!(svc.remove(&mut state, 2).is_none());
        assert_eq!(state.len(), 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
// StockService
// ═══════════════════════════════════════════════════════════════════

struct FixedStock {
    amount: i64,
    puts: Mutex<Vec<(ProductId, i64)>>,
    fail_put: bool,
}

impl FixedStock {
    fn new(amount: i64) -> Self {
        Self {
            amount,
            puts: Mutex::new(Vec::new()),
            fail_put: false,
        }
    }
}

#[async_trait]
impl ShopApi for FixedStock {
    async fn list_products(&self) -> Result<Vec<Product>, CartError> {
        Ok(vec![product(1, "10")])
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CartError> {
        Ok(product(product_id, "10"))
    }

    async fn get_stock(&self, product_id: ProductId) -> Result<StockEntry, CartError> {
        Ok(StockEntry {
            id: product_id,
            amount: self.amount,
        })
    }

    async fn put_stock(&self, product_id: ProductId, amount: i64) -> Result<StockEntry, CartError> {
        if self.fail_put {
            return Err(CartError::Network("connection reset".into()));
        }
        self.puts.lock().unwrap().push((product_id, amount));
        Ok(StockEntry {
            id: product_id,
            amount,
        })
    }
}

#[derive(Default)]
struct CountingHook {
    written: Mutex<Vec<StockWrite>>,
    skipped: Mutex<usize>,
}

impl SyncHook for CountingHook {
    fn stock_written(&self, write: &StockWrite) {
        self.written.lock().unwrap().push(*write);
    }

    fn commit_skipped(&self, _write: &StockWrite, _error: &CartError) {
        *self.skipped.lock().unwrap() += 1;
    }
}

/// A hook relying entirely on the default no-op methods.
struct SilentHook;

impl SyncHook for SilentHook {}

mod stock_service {
    use super::*;

    #[tokio::test]
    async fn current_reads_through_every_time() {
        let api = Arc::new(FixedStock::new(7));
        let svc = StockService::new(api);

        assert_eq!(svc.current(3).await.unwrap().amount, 7);
        assert_eq!(svc.current(3).await.unwrap().id, 3);
    }

    #[tokio::test]
    async fn write_reports_to_every_hook() {
        let api = Arc::new(FixedStock::new(7));
        let mut svc = StockService::new(api.clone());
        let first = Arc::new(CountingHook::default());
        let second = Arc::new(CountingHook::default());
        svc.add_hook(first.clone());
        svc.add_hook(second.clone());
        svc.add_hook(Arc::new(SilentHook));

        let write = svc
            .write(CartOperation::Decrement, 3, 7, 8)
            .await
            .unwrap();

        assert_eq!(
            write,
            StockWrite {
                operation: CartOperation::Decrement,
                product_id: 3,
                observed: 7,
                written: 8,
            }
        );
        assert_eq!(svc.hook_count(), 3);
        assert_eq!(first.written.lock().unwrap().as_slice(), &[write]);
        assert_eq!(second.written.lock().unwrap().as_slice(), &[write]);
        assert_eq!(api.puts.lock().unwrap().as_slice(), &[(3, 8)]);
    }

    #[tokio::test]
    async fn failed_write_is_not_reported() {
        let mut api = FixedStock::new(7);
        api.fail_put = true;
        let mut svc = StockService::new(Arc::new(api));
        let hook = Arc::new(CountingHook::default());
        svc.add_hook(hook.clone());

        let err = svc.write(CartOperation::Add, 1, 7, 6).await.unwrap_err();

        assert!(matches!(err, CartError::Network(_)));
        assert!(hook.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn report_uncommitted_reaches_hooks() {
        let mut svc = StockService::new(Arc::new(FixedStock::new(1)));
        let hook = Arc::new(CountingHook::default());
        svc.add_hook(hook.clone());

        let write = svc.write(CartOperation::Add, 1, 1, 0).await.unwrap();
        svc.report_uncommitted(&write, &CartError::NotInCart(1));

        assert_eq!(*hook.skipped.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn product_lookup_passes_through() {
        let svc = StockService::new(Arc::new(FixedStock::new(1)));
        let p = svc.product(11).await.unwrap();
        assert_eq!(p.id, 11);
        assert_eq!(svc.api().list_products().await.unwrap().len(), 1);
    }
}

mod operation_display {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(CartOperation::Add.to_string(), "add");
        assert_eq!(CartOperation::Decrement.to_string(), "decrement");
        assert_eq!(CartOperation::Remove.to_string(), "remove");
        assert_eq!(CartOperation::UpdateAmount.to_string(), "update-amount");
    }
}
