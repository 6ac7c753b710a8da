//! Cart actions and reducer.

use crate::store::{Reducer, StoreAction};
use dukaan_commerce::cart::Cart;
use dukaan_commerce::catalog::Product;
use dukaan_commerce::checkout::OrderSummary;
use dukaan_commerce::ProductId;

/// Every way the cart can change.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add `quantity` units, merging with an existing line.
    AddItem { product: Product, quantity: u32 },
    RemoveItem(ProductId),
    /// Set a line's quantity; zero or less removes it.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    Clear,
    SaveForLater(ProductId),
    MoveToCart(ProductId),
    RecordRecentOrder(OrderSummary),
}

impl CartAction {
    pub fn add(product: Product) -> Self {
        CartAction::AddItem {
            product,
            quantity: 1,
        }
    }
}

impl StoreAction for CartAction {
    fn name(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "cart/add_item",
            CartAction::RemoveItem(_) => "cart/remove_item",
            CartAction::UpdateQuantity { .. } => "cart/update_quantity",
            CartAction::Clear => "cart/clear",
            CartAction::SaveForLater(_) => "cart/save_for_later",
            CartAction::MoveToCart(_) => "cart/move_to_cart",
            CartAction::RecordRecentOrder(_) => "cart/record_recent_order",
        }
    }
}

/// Reducer over [`Cart`]. Totals are recomputed by the cart itself.
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = Cart;
    type Action = CartAction;

    fn reduce(cart: &mut Cart, action: CartAction) {
        match action {
            CartAction::AddItem { product, quantity } => cart.add_item(product, quantity),
            CartAction::RemoveItem(id) => {
                cart.remove_item(id);
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                cart.update_quantity(product_id, quantity);
            }
            CartAction::Clear => cart.clear(),
            CartAction::SaveForLater(id) => {
                cart.save_for_later(id);
            }
            CartAction::MoveToCart(id) => {
                cart.move_to_cart(id);
            }
            CartAction::RecordRecentOrder(summary) => cart.record_recent_order(summary),
        }
    }
}
