//! Bilingual text support for the Dukaan storefront.
//!
//! This crate provides:
//! - `Language` / `Direction` - the two supported display languages and their layout direction
//! - `LocalizedText` - an English/Urdu text pair carried by catalog data
//! - `TextKey` - the strongly-typed UI translation table
//! - `format_*` - locale-aware number, currency and date formatting
//!
//! # Example
//!
//! ```
//! use dukaan_i18n::{t, format_currency, Language, TextKey};
//!
//! assert_eq!(t(TextKey::AddToCart, Language::En), "Add to Cart");
//! assert_eq!(format_currency(12500, Language::Ur), "Rs 12,500");
//! assert!(Language::Ur.direction().is_rtl());
//! ```

mod format;
mod language;
mod text;
mod translations;

pub use format::{format_currency, format_date, format_number, month_name};
pub use language::{Direction, Language, ParseLanguageError};
pub use text::LocalizedText;
pub use translations::{lookup, t, TextKey};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{t, Direction, Language, LocalizedText, TextKey};
}
