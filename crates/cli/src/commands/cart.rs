//! Cart page: show line items and total, change quantities, remove items.

use rocketshoes_cart::errors::CartError;
use rocketshoes_cart::hooks::CartOperation;
use rocketshoes_cart::models::product::ProductId;
use rocketshoes_cart::views::cart::CartView;
use rocketshoes_cart::views::messages;
use rocketshoes_cart::CartStore;

use crate::error::CliError;
use crate::render;

pub fn show(store: &CartStore) {
    print!("{}", render::cart(&CartView::from_state(store.state())));
}

pub async fn increment(store: &mut CartStore, product_id: ProductId) -> Result<(), CliError> {
    CartView::increment(store, product_id)
        .await
        .map_err(|e| action_failed(CartOperation::UpdateAmount, e))?;
    show(store);
    Ok(())
}

/// Refused at one unit, like the disabled "−" button on the cart page.
pub async fn decrement(store: &mut CartStore, product_id: ProductId) -> Result<(), CliError> {
    let view = CartView::from_state(store.state());
    match view.rows.iter().find(|r| r.id == product_id) {
        Some(row) if !row.can_decrement => {
            return Err(CliError::Unavailable(format!(
                "Produto {product_id} já está com a quantidade mínima"
            )));
        }
        _ => {}
    }

    CartView::decrement(store, product_id)
        .await
        .map_err(|e| action_failed(CartOperation::Decrement, e))?;
    show(store);
    Ok(())
}

pub async fn remove(store: &mut CartStore, product_id: ProductId) -> Result<(), CliError> {
    let result = CartView::remove(store, product_id).await;
    show(store);
    result.map_err(|e| action_failed(CartOperation::Remove, e))
}

pub async fn update(
    store: &mut CartStore,
    product_id: ProductId,
    amount: i64,
) -> Result<(), CliError> {
    store
        .update_product_amount(product_id, amount)
        .await
        .map_err(|e| action_failed(CartOperation::UpdateAmount, e))?;
    show(store);
    Ok(())
}

fn action_failed(operation: CartOperation, source: CartError) -> CliError {
    CliError::Action {
        message: messages::failure_message(operation, &source),
        source,
    }
}
