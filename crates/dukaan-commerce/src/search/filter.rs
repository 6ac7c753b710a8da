//! Filter criteria for product listings.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use crate::search::SortKey;
use serde::{Deserialize, Serialize};

/// Which category to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// A single category.
    Id(CategoryId),
}

impl CategoryFilter {
    pub fn matches(&self, category_id: CategoryId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Id(id) => *id == category_id,
        }
    }
}

impl From<Option<CategoryId>> for CategoryFilter {
    fn from(id: Option<CategoryId>) -> Self {
        id.map(CategoryFilter::Id).unwrap_or_default()
    }
}

/// An inclusive price range. Missing bounds are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    pub fn new(min: Option<Money>, max: Option<Money>) -> Self {
        Self { min, max }
    }

    /// Range with only an upper bound.
    pub fn up_to(max: Money) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn contains(&self, price: Money) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Stock availability selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl Availability {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Availability::All => true,
            Availability::InStock => product.is_in_stock(),
            Availability::OutOfStock => !product.is_in_stock(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::All => "all",
            Availability::InStock => "in_stock",
            Availability::OutOfStock => "out_of_stock",
        }
    }

    /// Parse a selector name ("all", "in_stock"/"inStock", "out_of_stock"/"outOfStock").
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "all" => Some(Availability::All),
            "instock" => Some(Availability::InStock),
            "outofstock" => Some(Availability::OutOfStock),
            _ => None,
        }
    }
}

/// Active listing criteria.
///
/// Criteria never mutate product data; they are applied as a pure
/// filter-then-sort pipeline over a product list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub price: PriceRange,
    pub sort: SortKey,
    /// Minimum rating (0 disables the filter).
    pub min_rating: f32,
    pub availability: Availability,
}

impl FilterCriteria {
    /// Check whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category_id)
            && self.price.contains(product.price)
            && product.rating >= self.min_rating
            && self.availability.matches(product)
    }

    /// Merge a partial update into these criteria.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
        if let Some(min_rating) = patch.min_rating {
            self.min_rating = min_rating;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
    }

    /// Builder-style patch application.
    pub fn with(mut self, patch: FilterPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// A partial update to [`FilterCriteria`]. Unset fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterPatch {
    pub category: Option<CategoryFilter>,
    pub price: Option<PriceRange>,
    pub sort: Option<SortKey>,
    pub min_rating: Option<f32>,
    pub availability: Option<Availability>,
}

impl FilterPatch {
    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = Some(category);
        self
    }

    pub fn price(mut self, price: PriceRange) -> Self {
        self.price = Some(price);
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterPatch::default()
    }
}
