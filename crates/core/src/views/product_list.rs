use crate::errors::CartError;
use crate::format::format_price;
use crate::models::cart::CartState;
use crate::models::product::{Product, ProductId};
use crate::providers::traits::ShopApi;
use crate::{AddOutcome, CartStore};

/// One catalog entry as the listing shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price_formatted: String,
    /// Units of this product already in the cart (0 if none).
    pub cart_amount: i64,
}

/// The catalog page. The product list is fetched once, on load; cart
/// quantities are read fresh from the cart every time rows are built.
#[derive(Debug, Clone, Default)]
pub struct ProductListView {
    products: Vec<Product>,
}

impl ProductListView {
    pub async fn load(api: &dyn ShopApi) -> Result<Self, CartError> {
        let products = api.list_products().await?;
        tracing::debug!(count = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn rows(&self, cart: &CartState) -> Vec<ProductRow> {
        let amounts = cart.amounts();
        self.products
            .iter()
            .map(|p| ProductRow {
                id: p.id,
                title: p.title.clone(),
                image: p.image.clone(),
                price_formatted: format_price(p.price),
                cart_amount: amounts.get(&p.id).copied().unwrap_or(0),
            })
            .collect()
    }

    /// "Adicionar ao carrinho".
    pub async fn add(
        store: &mut CartStore,
        product_id: ProductId,
    ) -> Result<AddOutcome, CartError> {
        store.add_product(product_id).await
    }
}
