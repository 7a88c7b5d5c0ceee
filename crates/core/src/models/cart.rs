use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::product::{Product, ProductId};

/// One product held in the cart, with its quantity.
///
/// Serialized flat (product fields plus `amount`) so snapshots keep the same
/// layout the web front end wrote to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub amount: i64,
}

impl CartLineItem {
    /// A fresh line item holding a single unit of `product`.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    /// `price × amount`.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }

    pub fn product(&self) -> Product {
        Product::new(self.id, self.title.clone(), self.price, self.image.clone())
    }
}

/// Ordered cart contents. Insertion order is kept for stable rendering,
/// and there is at most one line item per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Self { items }
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    pub fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    /// Number of distinct line items (what the header badge counts).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all subtotals.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Quantity per product id, as the product list shows it on each button.
    pub fn amounts(&self) -> HashMap<ProductId, i64> {
        self.items.iter().map(|i| (i.id, i.amount)).collect()
    }
}
