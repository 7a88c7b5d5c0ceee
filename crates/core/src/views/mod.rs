//! Read-only projections of the cart for rendering, plus thin delegations
//! from UI actions back to the store. Nothing here mutates a `CartState`.

pub mod cart;
pub mod header;
pub mod messages;
pub mod product_list;
