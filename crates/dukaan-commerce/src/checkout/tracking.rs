//! Order tracking steps.

use crate::checkout::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One step on the tracking timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingStep {
    pub status: OrderStatus,
    /// When the step happened, if known.
    pub date: Option<DateTime<Utc>>,
    pub completed: bool,
}

/// Derive the four-step timeline (received, processing, shipped, delivered)
/// from an order's current status.
pub fn tracking_steps(order: &Order) -> Vec<TrackingStep> {
    let status = order.status;
    vec![
        TrackingStep {
            status: OrderStatus::Received,
            date: Some(order.created_at),
            completed: true,
        },
        TrackingStep {
            status: OrderStatus::Processing,
            date: Some(order.created_at),
            completed: status != OrderStatus::Received,
        },
        TrackingStep {
            status: OrderStatus::Shipped,
            date: None,
            completed: matches!(status, OrderStatus::Shipped | OrderStatus::Delivered),
        },
        TrackingStep {
            status: OrderStatus::Delivered,
            date: None,
            completed: status == OrderStatus::Delivered,
        },
    ]
}

/// An order together with its tracking timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackedOrder {
    pub order: Order,
    pub tracking: Vec<TrackingStep>,
}

impl From<Order> for TrackedOrder {
    fn from(order: Order) -> Self {
        let tracking = tracking_steps(&order);
        Self { order, tracking }
    }
}

impl TrackedOrder {
    /// The last completed step.
    pub fn current_step(&self) -> Option<&TrackingStep> {
        self.tracking.iter().rev().find(|step| step.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartPricing;
    use crate::checkout::{CheckoutForm, NewOrder, PaymentMethod};
    use crate::ids::OrderId;

    fn order_with(status: OrderStatus) -> Order {
        let draft = NewOrder {
            lines: Vec::new(),
            customer: CheckoutForm::default(),
            payment_method: PaymentMethod::CashOnDelivery,
            pricing: CartPricing::default(),
        };
        let mut order = Order::place(OrderId::new(1), draft, Utc::now());
        order.status = status;
        order
    }

    fn completed(status: OrderStatus) -> Vec<bool> {
        tracking_steps(&order_with(status))
            .iter()
            .map(|s| s.completed)
            .collect()
    }

    #[test]
    fn test_processing_timeline() {
        assert_eq!(
            completed(OrderStatus::Processing),
            vec![true, true, false, false]
        );
    }

    #[test]
    fn test_shipped_and_delivered_timeline() {
        assert_eq!(completed(OrderStatus::Shipped), vec![true, true, true, false]);
        assert_eq!(completed(OrderStatus::Delivered), vec![true, true, true, true]);
    }

    #[test]
    fn test_received_timeline() {
        assert_eq!(
            completed(OrderStatus::Received),
            vec![true, false, false, false]
        );
    }

    #[test]
    fn test_current_step() {
        let tracked = TrackedOrder::from(order_with(OrderStatus::Shipped));
        assert_eq!(
            tracked.current_step().map(|s| s.status),
            Some(OrderStatus::Shipped)
        );
        assert_eq!(tracked.tracking[0].date, Some(tracked.order.created_at));
        assert_eq!(tracked.tracking[3].date, None);
    }
}
