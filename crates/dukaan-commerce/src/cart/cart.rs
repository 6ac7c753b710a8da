//! Cart and line item types.

use crate::cart::{CartPricing, PricingPolicy};
use crate::catalog::Product;
use crate::checkout::OrderSummary;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// How many order summaries the cart remembers.
pub const RECENT_ORDER_LIMIT: usize = 10;

/// A product snapshot plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product as it was when added.
    pub product: Product,
    /// Quantity (always at least 1).
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item, clamping the quantity into `1..=MAX_QUANTITY_PER_ITEM`.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.clamp(1, MAX_QUANTITY_PER_ITEM),
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }

    fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self
            .quantity
            .saturating_add(quantity)
            .min(MAX_QUANTITY_PER_ITEM);
    }
}

/// A shopping cart.
///
/// `total` and `item_count` are derived from the active line items and
/// recomputed after every mutation; they cannot be set directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "CartRecord")]
pub struct Cart {
    items: Vec<LineItem>,
    saved_for_later: Vec<LineItem>,
    recent_orders: Vec<OrderSummary>,
    total: Money,
    item_count: u32,
}

/// Serialized form of a cart. Derived totals are ignored on load.
#[derive(Deserialize)]
struct CartRecord {
    #[serde(default)]
    items: Vec<LineItem>,
    #[serde(default)]
    saved_for_later: Vec<LineItem>,
    #[serde(default)]
    recent_orders: Vec<OrderSummary>,
}

impl From<CartRecord> for Cart {
    fn from(record: CartRecord) -> Self {
        let mut cart = Cart {
            items: record.items,
            saved_for_later: record.saved_for_later,
            recent_orders: record.recent_orders,
            total: Money::zero(),
            item_count: 0,
        };
        cart.items.retain(|item| item.quantity > 0);
        cart.recent_orders.truncate(RECENT_ORDER_LIMIT);
        cart.recompute();
        cart
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Items parked for later. These do not count toward totals.
    pub fn saved_for_later(&self) -> &[LineItem] {
        &self.saved_for_later
    }

    /// Recent order summaries, newest first.
    pub fn recent_orders(&self) -> &[OrderSummary] {
        &self.recent_orders
    }

    /// Sum of price times quantity over active line items.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities over active line items.
    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Number of distinct products in the cart.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line item for a product.
    pub fn get_item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get_item(product_id).is_some()
    }

    /// Add a product to the cart.
    ///
    /// A product already in the cart has its quantity increased; a zero
    /// quantity is ignored.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|i| i.product_id() == product.id)
        {
            Some(existing) => existing.add_quantity(quantity),
            None => self.items.push(LineItem::new(product, quantity)),
        }
        self.recompute();
    }

    /// Remove a product from the cart. Returns true if it was present.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);
        self.recompute();
        self.items.len() < len_before
    }

    /// Set a line item's quantity.
    ///
    /// A quantity of zero or less removes the line item. Unknown products are
    /// ignored. Returns true if the cart changed.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        let quantity = u32::try_from(quantity)
            .unwrap_or(MAX_QUANTITY_PER_ITEM)
            .min(MAX_QUANTITY_PER_ITEM);

        let changed = match self.items.iter_mut().find(|i| i.product_id() == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        };
        self.recompute();
        changed
    }

    /// Remove every active line item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Move a line item from the cart to the saved list.
    pub fn save_for_later(&mut self, product_id: ProductId) -> bool {
        let moved = transfer(&mut self.items, &mut self.saved_for_later, product_id);
        self.recompute();
        moved
    }

    /// Move a saved line item back into the cart.
    pub fn move_to_cart(&mut self, product_id: ProductId) -> bool {
        let moved = transfer(&mut self.saved_for_later, &mut self.items, product_id);
        self.recompute();
        moved
    }

    /// Prepend an order summary, evicting the oldest past the limit.
    pub fn record_recent_order(&mut self, summary: OrderSummary) {
        self.recent_orders.insert(0, summary);
        self.recent_orders.truncate(RECENT_ORDER_LIMIT);
    }

    /// Price the cart under a policy.
    pub fn pricing(&self, policy: &PricingPolicy) -> CartPricing {
        policy.price(self.total)
    }

    fn recompute(&mut self) {
        self.total = self.items.iter().map(LineItem::line_total).sum();
        self.item_count = self
            .items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity));
    }
}

/// Move the line for `product_id` from one list to another, merging
/// quantities when the destination already holds the product.
fn transfer(from: &mut Vec<LineItem>, to: &mut Vec<LineItem>, product_id: ProductId) -> bool {
    let Some(index) = from.iter().position(|i| i.product_id() == product_id) else {
        return false;
    };
    let item = from.remove(index);
    match to.iter_mut().find(|i| i.product_id() == product_id) {
        Some(existing) => existing.add_quantity(item.quantity),
        None => to.push(item),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::OrderStatus;
    use crate::ids::CategoryId;
    use chrono::Utc;
    use dukaan_i18n::LocalizedText;

    fn product(id: u64, price: i64) -> Product {
        Product::new(
            ProductId::new(id),
            LocalizedText::new(format!("Product {id}"), ""),
            Money::new(price),
            10,
            CategoryId::new(1),
        )
    }

    fn assert_totals_consistent(cart: &Cart) {
        let expected_total: Money = cart.items().iter().map(LineItem::line_total).sum();
        let expected_count: u32 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.total(), expected_total);
        assert_eq!(cart.item_count(), expected_count);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        cart.add_item(product(1, 100), 3);

        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.get_item(ProductId::new(1)).unwrap().quantity, 5);
        assert_eq!(cart.total(), Money::new(500));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_then_remove_scenario() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 1000), 1);
        cart.add_item(product(1, 1000), 1);
        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.total(), Money::new(2000));
        assert_eq!(cart.item_count(), 2);

        assert!(cart.remove_item(ProductId::new(1)));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_directly() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        assert!(cart.update_quantity(ProductId::new(1), 7));
        assert_eq!(cart.item_count(), 7);
        assert_eq!(cart.total(), Money::new(700));
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        cart.add_item(product(2, 50), 1);

        cart.update_quantity(ProductId::new(1), 0);
        assert!(!cart.contains(ProductId::new(1)));
        cart.update_quantity(ProductId::new(2), -4);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        assert!(!cart.update_quantity(ProductId::new(9), 3));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        assert!(!cart.remove_item(ProductId::new(42)));
        assert_eq!(cart.total(), Money::new(200));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 1), MAX_QUANTITY_PER_ITEM);
        cart.add_item(product(1, 1), 5);
        assert_eq!(cart.item_count(), MAX_QUANTITY_PER_ITEM);
        cart.update_quantity(ProductId::new(1), i64::MAX);
        assert_eq!(cart.item_count(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        cart.add_item(product(2, 300), 1);
        cart.clear();
        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_save_for_later_and_back() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        cart.add_item(product(2, 300), 1);

        assert!(cart.save_for_later(ProductId::new(1)));
        assert_eq!(cart.saved_for_later().len(), 1);
        assert_eq!(cart.total(), Money::new(300));
        assert_eq!(cart.item_count(), 1);

        assert!(cart.move_to_cart(ProductId::new(1)));
        assert!(cart.saved_for_later().is_empty());
        assert_eq!(cart.total(), Money::new(500));
        assert!(!cart.move_to_cart(ProductId::new(1)));
    }

    #[test]
    fn test_saved_list_merges_duplicates() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        cart.save_for_later(ProductId::new(1));
        cart.add_item(product(1, 100), 1);
        cart.save_for_later(ProductId::new(1));

        assert_eq!(cart.saved_for_later().len(), 1);
        assert_eq!(cart.saved_for_later()[0].quantity, 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_recent_orders_capped() {
        let mut cart = Cart::new();
        for i in 0..12 {
            cart.record_recent_order(OrderSummary {
                code: format!("ORD-{i}"),
                date: Utc::now(),
                status: OrderStatus::Processing,
                total: Money::new(100),
                items: 1,
            });
        }
        assert_eq!(cart.recent_orders().len(), RECENT_ORDER_LIMIT);
        assert_eq!(cart.recent_orders()[0].code, "ORD-11");
        assert_eq!(cart.recent_orders()[9].code, "ORD-2");
    }

    #[test]
    fn test_random_sequence_keeps_totals_consistent() {
        let mut cart = Cart::new();
        let ops: [(u64, i64); 10] = [
            (1, 3),
            (2, 1),
            (1, -1),
            (3, 4),
            (2, 0),
            (4, 2),
            (3, 1),
            (1, 2),
            (4, -3),
            (5, 9),
        ];
        for (id, qty) in ops {
            if qty > 0 && id % 2 == 1 {
                cart.add_item(product(id, id as i64 * 150), qty as u32);
            } else {
                cart.update_quantity(ProductId::new(id), qty);
            }
            assert_totals_consistent(&cart);
        }
    }

    #[test]
    fn test_deserialize_recomputes_totals() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 250), 2);
        let mut json = serde_json::to_value(&cart).unwrap();
        json["total"] = serde_json::json!(1);
        json["item_count"] = serde_json::json!(99);

        let restored: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(restored.total(), Money::new(500));
        assert_eq!(restored.item_count(), 2);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 1000), 1);
        let pricing = cart.pricing(&PricingPolicy::default());
        assert_eq!(pricing.subtotal, Money::new(1000));
        assert_eq!(pricing.grand_total, Money::new(1250));
    }
}
