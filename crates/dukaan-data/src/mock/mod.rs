//! In-memory mock services with simulated latency.

mod categories;
mod orders;
mod products;
pub mod seed;
mod users;

pub use categories::MockCategoryService;
pub use orders::MockOrderService;
pub use products::MockProductService;
pub use users::MockUserService;

use crate::service::{CategoryService, OrderService, ProductService, UserService};
use crate::{DataError, DataResult, LatencyConfig, ServiceTag};
use dukaan_commerce::account::UserProfile;
use dukaan_commerce::catalog::{Category, Product};
use dukaan_commerce::checkout::Order;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Per-service call gate: logs, sleeps for the simulated latency, and fails
/// when the service has been switched offline.
#[derive(Debug)]
pub(crate) struct Endpoint {
    tag: ServiceTag,
    latency: Duration,
    offline: AtomicBool,
}

impl Endpoint {
    pub(crate) fn new(tag: ServiceTag, latency: &LatencyConfig) -> Self {
        Self {
            tag,
            latency: latency.delay_for(tag),
            offline: AtomicBool::new(false),
        }
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub(crate) async fn call(&self, op: &'static str) -> DataResult<()> {
        tracing::debug!(service = %self.tag, op, "service call");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            tracing::warn!(service = %self.tag, op, "service unavailable");
            return Err(DataError::Unavailable(self.tag));
        }
        Ok(())
    }
}

/// Everything the mock backend holds, for saving and restoring a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendSnapshot {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub user: UserProfile,
}

impl BackendSnapshot {
    /// The embedded seed datasets.
    pub fn seed() -> DataResult<Self> {
        Ok(Self {
            categories: seed::categories()?,
            products: seed::products()?,
            orders: Vec::new(),
            user: seed::user()?,
        })
    }
}

/// The four mock services, sharing one latency configuration.
#[derive(Clone)]
pub struct MockBackend {
    categories: Arc<MockCategoryService>,
    products: Arc<MockProductService>,
    orders: Arc<MockOrderService>,
    users: Arc<MockUserService>,
}

impl MockBackend {
    /// A backend loaded with the embedded seed data.
    pub fn seeded(latency: LatencyConfig) -> DataResult<Self> {
        Ok(Self::from_snapshot(BackendSnapshot::seed()?, latency))
    }

    /// A backend restored from a snapshot.
    pub fn from_snapshot(snapshot: BackendSnapshot, latency: LatencyConfig) -> Self {
        Self {
            categories: Arc::new(MockCategoryService::new(snapshot.categories, &latency)),
            products: Arc::new(MockProductService::new(snapshot.products, &latency)),
            orders: Arc::new(MockOrderService::new(snapshot.orders, &latency)),
            users: Arc::new(MockUserService::new(
                snapshot.user,
                seed::order_history(),
                &latency,
            )),
        }
    }

    /// Capture the current backend state.
    pub async fn snapshot(&self) -> BackendSnapshot {
        BackendSnapshot {
            categories: self.categories.snapshot().await,
            products: self.products.snapshot().await,
            orders: self.orders.snapshot().await,
            user: self.users.snapshot().await,
        }
    }

    /// Switch one service offline (every call fails) or back online.
    pub fn set_offline(&self, tag: ServiceTag, offline: bool) {
        match tag {
            ServiceTag::Categories => self.categories.set_offline(offline),
            ServiceTag::Products => self.products.set_offline(offline),
            ServiceTag::Orders => self.orders.set_offline(offline),
            ServiceTag::Users => self.users.set_offline(offline),
        }
    }

    pub fn categories(&self) -> Arc<dyn CategoryService> {
        self.categories.clone()
    }

    pub fn products(&self) -> Arc<dyn ProductService> {
        self.products.clone()
    }

    pub fn orders(&self) -> Arc<dyn OrderService> {
        self.orders.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }
}
