//! In-memory order service.

use super::Endpoint;
use crate::service::OrderService;
use crate::{DataResult, LatencyConfig, ServiceTag};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use dukaan_commerce::checkout::{NewOrder, Order, OrderStatus, TrackedOrder};
use dukaan_commerce::{CommerceError, OrderId};
use tokio::sync::RwLock;

pub struct MockOrderService {
    endpoint: Endpoint,
    /// Newest first.
    orders: RwLock<Vec<Order>>,
}

impl MockOrderService {
    pub fn new(orders: Vec<Order>, latency: &LatencyConfig) -> Self {
        Self {
            endpoint: Endpoint::new(ServiceTag::Orders, latency),
            orders: RwLock::new(orders),
        }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_offline(&self, offline: bool) {
        self.endpoint.set_offline(offline);
    }

    /// Copy of the backing data.
    pub async fn snapshot(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }
}

fn index_of(orders: &[Order], id: OrderId) -> Result<usize, CommerceError> {
    orders
        .iter()
        .position(|o| o.id == id)
        .ok_or(CommerceError::OrderNotFound(id))
}

#[async_trait]
impl OrderService for MockOrderService {
    async fn get_all(&self) -> DataResult<Vec<Order>> {
        self.endpoint.call("get_all").await?;
        Ok(self.orders.read().await.clone())
    }

    async fn get_by_id(&self, id: OrderId) -> DataResult<Order> {
        self.endpoint.call("get_by_id").await?;
        let orders = self.orders.read().await;
        let index = index_of(&orders, id)?;
        Ok(orders[index].clone())
    }

    async fn create(&self, draft: NewOrder) -> DataResult<Order> {
        self.endpoint.call("create").await?;
        let mut orders = self.orders.write().await;
        let id = OrderId::next_after(orders.iter().map(|o| o.id));
        let now = Utc::now();
        let mut order = Order::place(id, draft, now);

        // Codes come from the clock; two orders in the same millisecond
        // would otherwise collide.
        let mut bump = 0;
        while orders.iter().any(|o| o.code == order.code) {
            bump += 1;
            order.code = Order::generate_code(now + Duration::milliseconds(bump));
        }

        orders.insert(0, order.clone());
        tracing::info!(id = %order.id, code = %order.code, total = %order.total(), "order created");
        Ok(order)
    }

    async fn update(&self, id: OrderId, mut order: Order) -> DataResult<Order> {
        self.endpoint.call("update").await?;
        let mut orders = self.orders.write().await;
        let index = index_of(&orders, id)?;
        order.id = id;
        order.code = orders[index].code.clone();
        order.updated_at = Some(Utc::now());
        orders[index] = order.clone();
        Ok(order)
    }

    async fn get_by_status(&self, status: OrderStatus) -> DataResult<Vec<Order>> {
        self.endpoint.call("get_by_status").await?;
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect())
    }

    async fn get_recent(&self, limit: usize) -> DataResult<Vec<Order>> {
        self.endpoint.call("get_recent").await?;
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn track(&self, code: &str) -> DataResult<TrackedOrder> {
        self.endpoint.call("track").await?;
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.code == code)
            .cloned()
            .map(TrackedOrder::from)
            .ok_or_else(|| CommerceError::OrderCodeNotFound(code.to_string()).into())
    }

    async fn cancel(&self, id: OrderId) -> DataResult<Order> {
        self.endpoint.call("cancel").await?;
        let mut orders = self.orders.write().await;
        let index = index_of(&orders, id)?;
        orders[index].cancel(Utc::now())?;
        tracing::info!(id = %id, "order cancelled");
        Ok(orders[index].clone())
    }

    async fn advance(&self, id: OrderId) -> DataResult<Order> {
        self.endpoint.call("advance").await?;
        let mut orders = self.orders.write().await;
        let index = index_of(&orders, id)?;
        let status = orders[index].advance(Utc::now())?;
        tracing::info!(id = %id, %status, "order advanced");
        Ok(orders[index].clone())
    }

    async fn delete(&self, id: OrderId) -> DataResult<Order> {
        self.endpoint.call("delete").await?;
        let mut orders = self.orders.write().await;
        let index = index_of(&orders, id)?;
        Ok(orders.remove(index))
    }
}
