use crate::errors::CartError;
use crate::format::format_price;
use crate::models::cart::{CartLineItem, CartState};
use crate::models::product::ProductId;
use crate::CartStore;

use super::header::cart_size_label;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub amount: i64,
    pub price_formatted: String,
    pub subtotal_formatted: String,
    /// The "−" button is disabled at one unit or fewer.
    pub can_decrement: bool,
}

impl From<&CartLineItem> for CartRow {
    fn from(item: &CartLineItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            image: item.image.clone(),
            amount: item.amount,
            price_formatted: format_price(item.price),
            subtotal_formatted: format_price(item.subtotal()),
            can_decrement: item.amount > 1,
        }
    }
}

/// The cart page, derived from the current cart on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total_formatted: String,
    pub size_label: String,
}

impl CartView {
    pub fn from_state(state: &CartState) -> Self {
        Self {
            rows: state.items.iter().map(CartRow::from).collect(),
            total_formatted: format_price(state.total()),
            size_label: cart_size_label(state.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub async fn increment(store: &mut CartStore, product_id: ProductId) -> Result<(), CartError> {
        store.increment_product(product_id).await
    }

    pub async fn decrement(store: &mut CartStore, product_id: ProductId) -> Result<(), CartError> {
        store.decrement_product(product_id).await
    }

    pub async fn remove(store: &mut CartStore, product_id: ProductId) -> Result<(), CartError> {
        store.remove_product(product_id).await.map(|_| ())
    }
}
