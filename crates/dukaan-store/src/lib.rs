//! State containers for the Dukaan storefront.
//!
//! This crate provides:
//! - `Store<R>` - a reducer-driven container with observers
//! - `CartReducer`, `CatalogReducer`, `LanguageReducer` - the three state slices
//! - `LanguageStore` - language state with its cookie and transition delay
//! - `PageState` - the loading / error / empty / ready triad pages render from
//! - `CountdownTicker` - the deals countdown
//! - `Storefront` - stores and services wired together, including checkout
//!
//! # Example
//!
//! ```rust
//! use dukaan_commerce::prelude::*;
//! use dukaan_i18n::LocalizedText;
//! use dukaan_store::{CartAction, CartReducer, Store};
//!
//! let lamp = Product::new(
//!     ProductId::new(9),
//!     LocalizedText::new("Table Lamp", "ٹیبل لیمپ"),
//!     Money::new(1000),
//!     3,
//!     CategoryId::new(3),
//! );
//!
//! let mut cart: Store<CartReducer> = Store::new("cart", Cart::new());
//! cart.dispatch(CartAction::add(lamp.clone()));
//! cart.dispatch(CartAction::add(lamp));
//! assert_eq!(cart.state().item_count(), 2);
//! assert_eq!(cart.state().total(), Money::new(2000));
//! ```

mod cart;
mod catalog;
mod countdown;
mod error;
mod language;
pub mod page;
mod store;
mod storefront;

pub use cart::{CartAction, CartReducer};
pub use catalog::{CatalogAction, CatalogReducer, CatalogState};
pub use countdown::CountdownTicker;
pub use error::{StoreError, StoreResult};
pub use language::{
    LanguageAction, LanguageReducer, LanguageState, LanguageStore, LANGUAGE_COOKIE,
    TRANSITION_DELAY,
};
pub use page::{EmptyContext, PageState};
pub use store::{Reducer, Store, StoreAction, StoreObserver, SubscriptionId};
pub use storefront::{Services, Storefront, StorefrontSettings, FEATURED_LIMIT};
