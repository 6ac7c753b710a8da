//! Service traits: the boundary between the storefront and its backend.
//!
//! Every read returns owned copies; callers never alias backend storage.
//! Reads, updates and deletes of unknown identifiers fail with a not-found
//! error.

use crate::DataResult;
use async_trait::async_trait;
use dukaan_commerce::account::{
    Acknowledgement, AddressPatch, NewAddress, PreferencesPatch, ProfilePatch, SavedAddress,
    UserProfile,
};
use dukaan_commerce::catalog::{Category, Product};
use dukaan_commerce::checkout::{NewOrder, Order, OrderStatus, OrderSummary, TrackedOrder};
use dukaan_commerce::search::FilterCriteria;
use dukaan_commerce::{AddressId, CategoryId, OrderId, ProductId};

/// How many categories `get_popular` returns by default.
pub const POPULAR_CATEGORY_LIMIT: usize = 6;

/// How many orders `get_recent` returns by default.
pub const RECENT_ORDER_LIMIT: usize = 10;

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn get_all(&self) -> DataResult<Vec<Category>>;
    async fn get_by_id(&self, id: CategoryId) -> DataResult<Category>;
    async fn get_featured(&self) -> DataResult<Vec<Category>>;
    /// The first `limit` categories.
    async fn get_popular(&self, limit: usize) -> DataResult<Vec<Category>>;
    /// Store a new category under a fresh identifier.
    async fn create(&self, category: Category) -> DataResult<Category>;
    /// Replace a category, keeping its identifier.
    async fn update(&self, id: CategoryId, category: Category) -> DataResult<Category>;
    async fn delete(&self, id: CategoryId) -> DataResult<Category>;
}

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_all(&self) -> DataResult<Vec<Product>>;
    async fn get_by_id(&self, id: ProductId) -> DataResult<Product>;
    async fn get_by_category(&self, category_id: CategoryId) -> DataResult<Vec<Product>>;
    async fn get_featured(&self) -> DataResult<Vec<Product>>;
    /// Text match, then filters, then sort.
    async fn search(&self, query: &str, criteria: &FilterCriteria) -> DataResult<Vec<Product>>;
    /// Products discounted strictly above `threshold` percent.
    async fn get_deals(&self, threshold: u8) -> DataResult<Vec<Product>>;
    /// Store a new product under a fresh identifier.
    async fn create(&self, product: Product) -> DataResult<Product>;
    /// Replace a product, keeping its identifier.
    async fn update(&self, id: ProductId, product: Product) -> DataResult<Product>;
    async fn delete(&self, id: ProductId) -> DataResult<Product>;
}

#[async_trait]
pub trait OrderService: Send + Sync {
    /// All orders, newest first.
    async fn get_all(&self) -> DataResult<Vec<Order>>;
    async fn get_by_id(&self, id: OrderId) -> DataResult<Order>;
    /// Place an order. New orders start out processing.
    async fn create(&self, order: NewOrder) -> DataResult<Order>;
    /// Replace an order, keeping its identifier and code.
    async fn update(&self, id: OrderId, order: Order) -> DataResult<Order>;
    async fn get_by_status(&self, status: OrderStatus) -> DataResult<Vec<Order>>;
    /// The `limit` newest orders.
    async fn get_recent(&self, limit: usize) -> DataResult<Vec<Order>>;
    /// Look up an order by code and derive its tracking timeline.
    async fn track(&self, code: &str) -> DataResult<TrackedOrder>;
    /// Cancel an order. Fails once the order has shipped.
    async fn cancel(&self, id: OrderId) -> DataResult<Order>;
    /// Move an order to its next fulfilment step.
    async fn advance(&self, id: OrderId) -> DataResult<Order>;
    async fn delete(&self, id: OrderId) -> DataResult<Order>;
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_profile(&self) -> DataResult<UserProfile>;
    async fn update_profile(&self, patch: ProfilePatch) -> DataResult<UserProfile>;
    async fn update_preferences(&self, patch: PreferencesPatch) -> DataResult<UserProfile>;
    async fn add_address(&self, address: NewAddress) -> DataResult<SavedAddress>;
    async fn update_address(&self, id: AddressId, patch: AddressPatch)
        -> DataResult<SavedAddress>;
    async fn delete_address(&self, id: AddressId) -> DataResult<SavedAddress>;
    async fn set_default_address(&self, id: AddressId) -> DataResult<SavedAddress>;
    async fn change_password(&self, current: &str, new: &str) -> DataResult<Acknowledgement>;
    async fn request_password_reset(&self, email: &str) -> DataResult<Acknowledgement>;
    async fn delete_account(&self) -> DataResult<Acknowledgement>;
    async fn update_last_login(&self) -> DataResult<UserProfile>;
    async fn get_order_history(&self) -> DataResult<Vec<OrderSummary>>;
}
