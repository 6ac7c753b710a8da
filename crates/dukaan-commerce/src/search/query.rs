//! Search and sort pipeline.

use crate::catalog::Product;
use crate::search::FilterCriteria;
use dukaan_i18n::Language;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by newest first.
    Newest,
    /// Sort by highest rated.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Newest,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price_low",
            SortKey::PriceDesc => "price_high",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
        }
    }

    pub fn display_name(&self, language: Language) -> &'static str {
        match (self, language) {
            (SortKey::Featured, Language::En) => "Featured",
            (SortKey::Featured, Language::Ur) => "نمایاں",
            (SortKey::PriceAsc, Language::En) => "Price: Low to High",
            (SortKey::PriceAsc, Language::Ur) => "کم قیمت",
            (SortKey::PriceDesc, Language::En) => "Price: High to Low",
            (SortKey::PriceDesc, Language::Ur) => "زیادہ قیمت",
            (SortKey::Newest, Language::En) => "Newest First",
            (SortKey::Newest, Language::Ur) => "تازہ ترین",
            (SortKey::Rating, Language::En) => "Customer Rating",
            (SortKey::Rating, Language::Ur) => "ریٹنگ",
        }
    }

    /// Compare two products under this key.
    ///
    /// Every key is a total order, so a stable sort keeps catalog order for ties.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Featured => b.featured.cmp(&a.featured),
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "featured" | "relevance" => Ok(SortKey::Featured),
            "price_low" | "price-asc" | "price_asc" => Ok(SortKey::PriceAsc),
            "price_high" | "price-desc" | "price_desc" => Ok(SortKey::PriceDesc),
            "newest" => Ok(SortKey::Newest),
            "rating" => Ok(SortKey::Rating),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Apply the filters in `criteria` and sort the survivors.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();
    matched.sort_by(|a, b| criteria.sort.compare(a, b));
    matched
}

/// Full search pipeline: text match, then filters, then sort.
///
/// The text match is a case-insensitive substring test against both
/// titles, both descriptions and the tags. A blank query matches everything.
pub fn search_products(products: &[Product], query: &str, criteria: &FilterCriteria) -> Vec<Product> {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| p.matches_query(query) && criteria.matches(p))
        .cloned()
        .collect();
    matched.sort_by(|a, b| criteria.sort.compare(a, b));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{CategoryId, ProductId};
    use crate::money::Money;
    use crate::search::{Availability, FilterPatch};
    use chrono::{Duration, Utc};
    use dukaan_i18n::LocalizedText;

    fn catalog() -> Vec<Product> {
        let base = Utc::now();
        let specs = [
            (1, "Smartphone X", 45000, 5, false, 4.5),
            (2, "Phone Case", 800, 0, true, 4.1),
            (3, "Cotton Kurta", 2500, 12, true, 4.8),
            (4, "Headphones", 3500, 3, false, 3.9),
        ];
        specs
            .into_iter()
            .map(|(id, title, price, stock, featured, rating)| {
                let mut p = Product::new(
                    ProductId::new(id),
                    LocalizedText::new(title, ""),
                    Money::new(price),
                    stock,
                    CategoryId::new(1),
                );
                p.featured = featured;
                p.rating = rating;
                p.created_at = base + Duration::days(id as i64);
                p
            })
            .collect()
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_search_substring() {
        let results = search_products(&catalog(), "phone", &FilterCriteria::default());
        assert_eq!(ids(&results), vec![2, 1, 4]);
    }

    #[test]
    fn test_search_in_stock_excludes_out_of_stock() {
        let criteria = FilterCriteria::default()
            .with(FilterPatch::default().availability(Availability::InStock));
        let results = search_products(&catalog(), "phone", &criteria);
        assert_eq!(ids(&results), vec![1, 4]);
    }

    #[test]
    fn test_featured_sort_is_stable() {
        let results = filter_products(&catalog(), &FilterCriteria::default());
        assert_eq!(ids(&results), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_price_sorts() {
        let asc = FilterCriteria::default().with(FilterPatch::default().sort(SortKey::PriceAsc));
        assert_eq!(ids(&filter_products(&catalog(), &asc)), vec![2, 3, 4, 1]);
        let desc = FilterCriteria::default().with(FilterPatch::default().sort(SortKey::PriceDesc));
        assert_eq!(ids(&filter_products(&catalog(), &desc)), vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_newest_and_rating_sorts() {
        let newest = FilterCriteria::default().with(FilterPatch::default().sort(SortKey::Newest));
        assert_eq!(ids(&filter_products(&catalog(), &newest)), vec![4, 3, 2, 1]);
        let rating = FilterCriteria::default().with(FilterPatch::default().sort(SortKey::Rating));
        assert_eq!(ids(&filter_products(&catalog(), &rating)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let products = catalog();
        let criteria = FilterCriteria::default().with(FilterPatch::default().sort(SortKey::PriceAsc));
        let _ = filter_products(&products, &criteria);
        assert_eq!(ids(&products), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("price_low".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        assert_eq!("relevance".parse::<SortKey>().unwrap(), SortKey::Featured);
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}
