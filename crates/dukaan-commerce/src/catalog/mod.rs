//! Product catalog module.
//!
//! Contains types for products, badges, and categories.

mod category;
mod product;

pub use category::{with_product_counts, Category};
pub use product::{Badge, BadgeKind, Product};
