//! Service tags for the four storefront backends.

use std::time::Duration;

/// Which backend service a call goes to.
///
/// Each tag carries the simulated latency its mock uses by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTag {
    /// Category listings.
    Categories,
    /// Product catalog and search.
    Products,
    /// Order placement and tracking.
    Orders,
    /// User profile and addresses.
    Users,
}

impl ServiceTag {
    pub const ALL: [ServiceTag; 4] = [
        ServiceTag::Categories,
        ServiceTag::Products,
        ServiceTag::Orders,
        ServiceTag::Users,
    ];

    /// Get the default simulated latency for this service.
    pub fn default_latency(&self) -> Duration {
        match self {
            Self::Categories => Duration::from_millis(250),
            Self::Products => Duration::from_millis(300),
            Self::Orders => Duration::from_millis(300),
            Self::Users => Duration::from_millis(200),
        }
    }

    /// Get the name of this service.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Users => "users",
        }
    }
}

impl std::fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
