//! Checkout module.
//!
//! Contains the checkout form, orders, and order tracking.

mod form;
mod order;
mod tracking;

pub use form::{CheckoutForm, PaymentMethod};
pub use order::{
    NewOrder, Order, OrderLine, OrderStatus, OrderSummary, DELIVERY_ESTIMATE_DAYS,
};
pub use tracking::{tracking_steps, TrackedOrder, TrackingStep};
