//! Search module.
//!
//! Contains filter criteria, the search/sort pipeline, and deal listings.

mod deals;
mod filter;
mod query;

pub use deals::{deals, is_deal, tier_counts, DealCountdown, DealTier, DEFAULT_DEAL_THRESHOLD};
pub use filter::{Availability, CategoryFilter, FilterCriteria, FilterPatch, PriceRange};
pub use query::{filter_products, search_products, ParseSortKeyError, SortKey};
