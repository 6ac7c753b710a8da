//! Product types.

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use dukaan_i18n::{Language, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Visual style of a product badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    #[default]
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
}

impl BadgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::Primary => "primary",
            BadgeKind::Secondary => "secondary",
            BadgeKind::Accent => "accent",
            BadgeKind::Success => "success",
            BadgeKind::Warning => "warning",
            BadgeKind::Error => "error",
        }
    }
}

/// A label shown on a product card (e.g., "Sale", "New").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Bilingual label.
    pub label: LocalizedText,
    /// Visual type.
    #[serde(default)]
    pub kind: BadgeKind,
}

impl Badge {
    pub fn new(label: LocalizedText, kind: BadgeKind) -> Self {
        Self { label, kind }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Bilingual title.
    pub title: LocalizedText,
    /// Bilingual description.
    pub description: LocalizedText,
    /// Current selling price.
    pub price: Money,
    /// Price before discount, shown struck through.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount_percentage: u8,
    /// Units in stock.
    pub stock: u32,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Whether the product is featured on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Average customer rating (0.0-5.0).
    #[serde(default)]
    pub rating: f32,
    /// Number of customer reviews.
    #[serde(default)]
    pub review_count: u32,
    /// Tags for search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Specification table (e.g., "Storage" => "128GB").
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    /// Image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Card badges.
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// When the product was listed.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with no discount.
    pub fn new(
        id: ProductId,
        title: LocalizedText,
        price: Money,
        stock: u32,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            title,
            description: LocalizedText::default(),
            price,
            original_price: None,
            discount_percentage: 0,
            stock,
            category_id,
            featured: false,
            rating: 0.0,
            review_count: 0,
            tags: Vec::new(),
            specifications: BTreeMap::new(),
            images: Vec::new(),
            badges: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Title in the given language.
    pub fn title_in(&self, language: Language) -> &str {
        self.title.get(language)
    }

    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if this product is shown with a discount.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Amount saved against the original price.
    pub fn savings(&self) -> Money {
        match self.original_price {
            Some(original) if original > self.price => original - self.price,
            _ => Money::zero(),
        }
    }

    /// Primary image URL.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive substring match against both titles, both
    /// descriptions, and the tag list.
    ///
    /// A blank query matches every product.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.contains_lowercase(&needle)
            || self.description.contains_lowercase(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Check the pricing invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.rupees() < 0 {
            return Err(CommerceError::ValidationError(format!(
                "product {} has a negative price",
                self.id
            )));
        }
        if self.discount_percentage > 100 {
            return Err(CommerceError::ValidationError(format!(
                "product {} has a discount above 100%",
                self.id
            )));
        }
        if let Some(original) = self.original_price {
            if self.discount_percentage > 0 && self.price > original {
                return Err(CommerceError::ValidationError(format!(
                    "product {} is discounted above its original price",
                    self.id
                )));
            }
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CommerceError::ValidationError(format!(
                "product {} has rating {} outside 0-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}
