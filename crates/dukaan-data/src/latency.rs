//! Simulated network latency for the mock services.

use crate::ServiceTag;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-service simulated latency, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// When false every call completes immediately.
    pub enabled: bool,
    pub categories: u64,
    pub products: u64,
    pub orders: u64,
    pub users: u64,
}

impl LatencyConfig {
    /// Create a new latency configuration.
    pub fn new(categories: u64, products: u64, orders: u64, users: u64) -> Self {
        Self {
            enabled: true,
            categories,
            products,
            orders,
            users,
        }
    }

    /// No simulated latency at all.
    pub fn none() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Latency for one service.
    pub fn delay_for(&self, tag: ServiceTag) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        let millis = match tag {
            ServiceTag::Categories => self.categories,
            ServiceTag::Products => self.products,
            ServiceTag::Orders => self.orders,
            ServiceTag::Users => self.users,
        };
        Duration::from_millis(millis)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        let ms = |tag: ServiceTag| tag.default_latency().as_millis() as u64;
        Self {
            enabled: true,
            categories: ms(ServiceTag::Categories),
            products: ms(ServiceTag::Products),
            orders: ms(ServiceTag::Orders),
            users: ms(ServiceTag::Users),
        }
    }
}
