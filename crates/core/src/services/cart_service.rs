use crate::errors::CartError;
use crate::models::cart::{CartLineItem, CartState};
use crate::models::product::{Product, ProductId};

/// Line-item mutations on a `CartState`.
///
/// Pure business logic: no I/O, no API calls. The store runs these against
/// a copy of its state and only swaps the copy in once remote stock agrees.
pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new line item with amount 1.
    /// Fails if the product already has a line item.
    pub fn append(&self, state: &mut CartState, product: Product) -> Result<(), CartError> {
        if state.contains(product.id) {
            return Err(CartError::AlreadyInCart(product.id));
        }
        state.items.push(CartLineItem::from_product(product));
        Ok(())
    }

    /// Add `delta` to a line item's amount in place.
    ///
    /// No floor: a decrement can leave the amount at zero or below, and the
    /// line item stays in the cart. Leaving the `i64` range is `AmountOverflow`
    /// with the line item untouched.
    pub fn adjust(
        &self,
        state: &mut CartState,
        product_id: ProductId,
        delta: i64,
    ) -> Result<i64, CartError> {
        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == product_id)
            .ok_or(CartError::NotInCart(product_id))?;
        item.amount = item
            .amount
            .checked_add(delta)
            .ok_or(CartError::AmountOverflow { product_id })?;
        Ok(item.amount)
    }

    /// Drop the line item for `product_id`, keeping the order of the rest.
    pub fn remove(&self, state: &mut CartState, product_id: ProductId) -> Option<CartLineItem> {
        let idx = state.position(product_id)?;
        Some(state.items.remove(idx))
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
