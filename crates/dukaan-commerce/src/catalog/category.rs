//! Category types for product organization.

use crate::catalog::Product;
use crate::ids::CategoryId;
use dukaan_i18n::{Language, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Bilingual name.
    pub name: LocalizedText,
    /// Bilingual description.
    #[serde(default)]
    pub description: LocalizedText,
    /// Icon name.
    #[serde(default)]
    pub icon: String,
    /// Whether the category is promoted on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Number of products in this category, derived from a product list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u32>,
}

impl Category {
    /// Create a new category.
    pub fn new(id: CategoryId, name: LocalizedText, icon: impl Into<String>) -> Self {
        Self {
            id,
            name,
            description: LocalizedText::default(),
            icon: icon.into(),
            featured: false,
            product_count: None,
        }
    }

    /// Name in the given language.
    pub fn name_in(&self, language: Language) -> &str {
        self.name.get(language)
    }
}

/// Fill in `product_count` for each category from a product list.
pub fn with_product_counts(categories: Vec<Category>, products: &[Product]) -> Vec<Category> {
    let mut counts: HashMap<CategoryId, u32> = HashMap::new();
    for product in products {
        *counts.entry(product.category_id).or_default() += 1;
    }

    categories
        .into_iter()
        .map(|mut category| {
            category.product_count = Some(counts.get(&category.id).copied().unwrap_or(0));
            category
        })
        .collect()
}
