//! E-commerce domain types and logic for the Dukaan storefront.
//!
//! This crate provides the plain-data model and the pure logic over it:
//!
//! - **Catalog**: Products, badges, categories
//! - **Cart**: Cart aggregate with derived totals, saved-for-later, checkout pricing
//! - **Search**: Filter criteria, the filter/sort pipeline, deals
//! - **Checkout**: Checkout form, orders, tracking
//! - **Account**: User profile, preferences, address book
//!
//! Nothing here performs I/O; the data services and state stores build on it.
//!
//! # Example
//!
//! ```rust
//! use dukaan_commerce::prelude::*;
//! use dukaan_i18n::LocalizedText;
//!
//! let kurta = Product::new(
//!     ProductId::new(1),
//!     LocalizedText::new("Cotton Kurta", "سوتی کرتا"),
//!     Money::new(1000),
//!     10,
//!     CategoryId::new(2),
//! );
//!
//! let mut cart = Cart::new();
//! cart.add_item(kurta.clone(), 1);
//! cart.add_item(kurta, 1);
//!
//! assert_eq!(cart.unique_items(), 1);
//! assert_eq!(cart.total(), Money::new(2000));
//!
//! let pricing = cart.pricing(&PricingPolicy::default());
//! assert_eq!(pricing.grand_total.to_string(), "Rs 2,300");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::{CommerceError, ErrorKind};
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, ErrorKind};
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Badge, BadgeKind, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, PricingPolicy};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, NewOrder, Order, OrderLine, OrderStatus, OrderSummary, PaymentMethod,
        TrackedOrder, TrackingStep,
    };

    // Search
    pub use crate::search::{
        Availability, CategoryFilter, DealCountdown, DealTier, FilterCriteria, FilterPatch,
        PriceRange, SortKey,
    };

    // Account
    pub use crate::account::{AddressBook, NewAddress, Preferences, SavedAddress, UserProfile};
}
