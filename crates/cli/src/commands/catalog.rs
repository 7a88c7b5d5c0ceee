//! Catalog page: list products with their cart quantities, add to cart.

use rocketshoes_cart::hooks::CartOperation;
use rocketshoes_cart::models::product::ProductId;
use rocketshoes_cart::views::messages;
use rocketshoes_cart::views::product_list::ProductListView;
use rocketshoes_cart::{AddKind, CartStore};

use crate::error::CliError;
use crate::render;

pub async fn list(store: &CartStore) -> Result<(), CliError> {
    let api = store.api();
    let view = ProductListView::load(api.as_ref()).await?;
    print!("{}", render::product_list(&view.rows(store.state())));
    Ok(())
}

pub async fn add(store: &mut CartStore, product_id: ProductId) -> Result<(), CliError> {
    let outcome = ProductListView::add(store, product_id)
        .await
        .map_err(|source| CliError::Action {
            message: messages::failure_message(CartOperation::Add, &source),
            source,
        })?;

    if let Some(notice) = messages::add_notice(&outcome) {
        eprintln!("{notice}");
    }
    match outcome.kind {
        AddKind::Appended => tracing::info!(product_id, "product added to cart"),
        AddKind::Incremented => tracing::info!(product_id, "product quantity increased"),
    }
    println!("{} unidade(s) no carrinho", store.amount_of(product_id));
    Ok(())
}
