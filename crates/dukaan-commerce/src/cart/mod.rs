//! Shopping cart module.
//!
//! Contains the cart aggregate, line items, and checkout pricing.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM, RECENT_ORDER_LIMIT};
pub use pricing::{CartPricing, PricingPolicy};
