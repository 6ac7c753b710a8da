//! Data access layer for the Dukaan storefront.
//!
//! This crate provides:
//! - `CategoryService`, `ProductService`, `OrderService`, `UserService` - async
//!   service traits that form the storefront's backend boundary
//! - `MockBackend` - in-memory implementations seeded from embedded JSON
//! - `LatencyConfig` - per-service simulated latency
//! - `DataError` - not-found and failure conditions

mod error;
mod latency;
pub mod mock;
pub mod service;
mod tag;

pub use error::{DataError, DataResult};
pub use latency::LatencyConfig;
pub use mock::{BackendSnapshot, MockBackend};
pub use service::{
    CategoryService, OrderService, ProductService, UserService, POPULAR_CATEGORY_LIMIT,
    RECENT_ORDER_LIMIT,
};
pub use tag::ServiceTag;
