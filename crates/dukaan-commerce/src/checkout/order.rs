//! Order types.

use crate::cart::{CartPricing, LineItem};
use crate::checkout::{CheckoutForm, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Duration, Utc};
use dukaan_i18n::{Language, LocalizedText, TextKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days between order placement and the estimated delivery date.
pub const DELIVERY_ESTIMATE_DAYS: i64 = 3;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order received, not yet picked up for processing.
    Received,
    /// Order being prepared.
    #[default]
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Received,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a lowercase status name.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Translation key for the status label.
    pub fn text_key(&self) -> TextKey {
        match self {
            OrderStatus::Received => TextKey::StatusReceived,
            OrderStatus::Processing => TextKey::StatusProcessing,
            OrderStatus::Shipped => TextKey::StatusShipped,
            OrderStatus::Delivered => TextKey::StatusDelivered,
            OrderStatus::Cancelled => TextKey::StatusCancelled,
        }
    }

    /// Status label in a language.
    pub fn label(&self, language: Language) -> &'static str {
        self.text_key().get(language)
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if order can be cancelled.
    ///
    /// Once an order has shipped it can no longer be cancelled.
    pub fn can_cancel(&self) -> bool {
        !matches!(self, OrderStatus::Shipped | OrderStatus::Delivered)
    }

    /// The next fulfilment step, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Product title at time of order.
    pub title: LocalizedText,
    /// Unit price at time of order.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: u32,
}

impl OrderLine {
    /// Total price for this line.
    pub fn total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl From<&LineItem> for OrderLine {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product.id,
            title: item.product.title.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
        }
    }
}

/// Everything needed to create an order, before the order service assigns
/// an identifier and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrder {
    /// Ordered lines.
    pub lines: Vec<OrderLine>,
    /// Customer and delivery details.
    pub customer: CheckoutForm,
    /// How the customer will pay.
    pub payment_method: PaymentMethod,
    /// Price breakdown at submission.
    pub pricing: CartPricing,
}

impl NewOrder {
    /// Build an order draft from cart lines.
    ///
    /// Fails if there are no lines or the form is incomplete.
    pub fn from_cart(
        items: &[LineItem],
        customer: CheckoutForm,
        payment_method: PaymentMethod,
        pricing: CartPricing,
    ) -> Result<Self, CommerceError> {
        if items.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        customer.validate()?;
        Ok(Self {
            lines: items.iter().map(OrderLine::from).collect(),
            customer,
            payment_method,
            pricing,
        })
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order code (e.g., "ORD-1718000000000").
    pub code: String,
    /// Order status.
    pub status: OrderStatus,
    /// Items in the order.
    pub lines: Vec<OrderLine>,
    /// Customer and delivery details.
    pub customer: CheckoutForm,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Price breakdown.
    pub pricing: CartPricing,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Estimated delivery date.
    pub estimated_delivery: DateTime<Utc>,
    /// Last modification.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the order was cancelled (if applicable).
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create an order from a draft. New orders start out processing.
    pub fn place(id: OrderId, draft: NewOrder, now: DateTime<Utc>) -> Self {
        Self {
            id,
            code: Self::generate_code(now),
            status: OrderStatus::Processing,
            lines: draft.lines,
            customer: draft.customer,
            payment_method: draft.payment_method,
            pricing: draft.pricing,
            created_at: now,
            estimated_delivery: now + Duration::days(DELIVERY_ESTIMATE_DAYS),
            updated_at: None,
            cancelled_at: None,
        }
    }

    /// Order code derived from a timestamp in milliseconds.
    pub fn generate_code(now: DateTime<Utc>) -> String {
        format!("ORD-{}", now.timestamp_millis())
    }

    /// Get total item count.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Amount charged.
    pub fn total(&self) -> Money {
        self.pricing.grand_total
    }

    /// Cancel the order.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<(), CommerceError> {
        if !self.status.can_cancel() {
            return Err(CommerceError::CannotCancel {
                status: self.status,
            });
        }
        self.status = OrderStatus::Cancelled;
        self.cancelled_at = Some(now);
        self.updated_at = Some(now);
        Ok(())
    }

    /// Move the order to its next fulfilment step.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<OrderStatus, CommerceError> {
        let next = self.status.next().ok_or(CommerceError::CannotAdvance {
            status: self.status,
        })?;
        self.status = next;
        self.updated_at = Some(now);
        Ok(next)
    }

    /// Compact summary for order history lists.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            code: self.code.clone(),
            date: self.created_at,
            status: self.status,
            total: self.total(),
            items: self.item_count(),
        }
    }
}

/// A compact record of a past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Order code.
    pub code: String,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    /// Status at the time the summary was taken.
    pub status: OrderStatus,
    /// Amount charged.
    pub total: Money,
    /// Number of items.
    pub items: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Ahmed".into(),
            last_name: "Ali".into(),
            email: "ahmed@example.com".into(),
            phone: "+92 300 1234567".into(),
            address: "House 123, Street 5".into(),
            city: "Karachi".into(),
            state: "Sindh".into(),
            zip_code: "75600".into(),
        }
    }

    fn order(status: OrderStatus) -> Order {
        let draft = NewOrder {
            lines: vec![OrderLine {
                product_id: ProductId::new(1),
                title: LocalizedText::new("Kurta", "کرتا"),
                unit_price: Money::new(1200),
                quantity: 2,
            }],
            customer: form(),
            payment_method: PaymentMethod::CashOnDelivery,
            pricing: CartPricing::default(),
        };
        let mut order = Order::place(OrderId::new(1), draft, Utc::now());
        order.status = status;
        order
    }

    #[test]
    fn test_order_status_can_cancel() {
        assert!(OrderStatus::Received.can_cancel());
        assert!(OrderStatus::Processing.can_cancel());
        assert!(!OrderStatus::Shipped.can_cancel());
        assert!(!OrderStatus::Delivered.can_cancel());
    }

    #[test]
    fn test_status_display_and_parse() {
        assert_eq!(OrderStatus::Shipped.to_string(), "shipped");
        assert_eq!(OrderStatus::from_str_opt("Delivered"), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::from_str_opt("lost"), None);
        assert_eq!(OrderStatus::Cancelled.label(Language::En), "Cancelled");
    }

    #[test]
    fn test_place_order() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let draft = NewOrder {
            lines: Vec::new(),
            customer: form(),
            payment_method: PaymentMethod::Card,
            pricing: CartPricing::default(),
        };
        let order = Order::place(OrderId::new(7), draft, now);
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.code, format!("ORD-{}", now.timestamp_millis()));
        assert_eq!(order.estimated_delivery - order.created_at, Duration::days(3));
    }

    #[test]
    fn test_cancel_processing_order() {
        let mut order = order(OrderStatus::Processing);
        order.cancel(Utc::now()).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.cancelled_at.is_some());
    }

    #[test]
    fn test_cancel_shipped_order_fails() {
        for status in [OrderStatus::Shipped, OrderStatus::Delivered] {
            let mut order = order(status);
            let err = order.cancel(Utc::now()).unwrap_err();
            assert_eq!(err, CommerceError::CannotCancel { status });
            assert_eq!(order.status, status);
        }
    }

    #[test]
    fn test_advance() {
        let mut order = order(OrderStatus::Processing);
        assert_eq!(order.advance(Utc::now()).unwrap(), OrderStatus::Shipped);
        assert_eq!(order.advance(Utc::now()).unwrap(), OrderStatus::Delivered);
        assert!(order.advance(Utc::now()).is_err());
    }

    #[test]
    fn test_summary() {
        let order = order(OrderStatus::Processing);
        let summary = order.summary();
        assert_eq!(summary.code, order.code);
        assert_eq!(summary.items, 2);
    }

    #[test]
    fn test_draft_rejects_empty_cart() {
        let err = NewOrder::from_cart(
            &[],
            form(),
            PaymentMethod::CashOnDelivery,
            CartPricing::default(),
        )
        .unwrap_err();
        assert_eq!(err, CommerceError::EmptyCart);
    }
}
