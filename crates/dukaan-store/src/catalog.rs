//! Catalog and search state.

use crate::page::{EmptyContext, PageState};
use crate::store::{Reducer, StoreAction};
use dukaan_commerce::catalog::{Category, Product};
use dukaan_commerce::search::{FilterCriteria, FilterPatch};

/// The most recent catalog loads plus the UI-facing loading and error flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub featured: Vec<Product>,
    pub search_results: Vec<Product>,
    pub search_query: String,
    pub deals: Vec<Product>,
    pub filters: FilterCriteria,
    pub loading: bool,
    pub search_loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    fn page<'a>(
        &'a self,
        items: &'a [Product],
        busy: bool,
        empty: EmptyContext,
    ) -> PageState<&'a [Product]> {
        if busy {
            PageState::Loading
        } else if let Some(message) = &self.error {
            PageState::Failed(message.clone())
        } else if items.is_empty() {
            PageState::Empty(empty)
        } else {
            PageState::Ready(items)
        }
    }

    /// The product listing as the page should render it.
    pub fn products_page(&self) -> PageState<&[Product]> {
        self.page(&self.products, self.loading, EmptyContext::Generic)
    }

    pub fn search_page(&self) -> PageState<&[Product]> {
        self.page(&self.search_results, self.search_loading, EmptyContext::Search)
    }

    pub fn deals_page(&self) -> PageState<&[Product]> {
        self.page(&self.deals, self.loading, EmptyContext::Generic)
    }
}

#[derive(Debug, Clone)]
pub enum CatalogAction {
    SetLoading(bool),
    SetSearchLoading(bool),
    /// Record (or clear) an error. Always ends any pending load.
    SetError(Option<String>),
    SetProducts(Vec<Product>),
    SetCategories(Vec<Category>),
    SetFeatured(Vec<Product>),
    SetSearchResults(Vec<Product>),
    SetSearchQuery(String),
    SetDeals(Vec<Product>),
    /// Merge a partial update into the active filters.
    SetFilters(FilterPatch),
    ClearError,
    ClearSearch,
}

impl StoreAction for CatalogAction {
    fn name(&self) -> &'static str {
        match self {
            CatalogAction::SetLoading(_) => "catalog/set_loading",
            CatalogAction::SetSearchLoading(_) => "catalog/set_search_loading",
            CatalogAction::SetError(_) => "catalog/set_error",
            CatalogAction::SetProducts(_) => "catalog/set_products",
            CatalogAction::SetCategories(_) => "catalog/set_categories",
            CatalogAction::SetFeatured(_) => "catalog/set_featured",
            CatalogAction::SetSearchResults(_) => "catalog/set_search_results",
            CatalogAction::SetSearchQuery(_) => "catalog/set_search_query",
            CatalogAction::SetDeals(_) => "catalog/set_deals",
            CatalogAction::SetFilters(_) => "catalog/set_filters",
            CatalogAction::ClearError => "catalog/clear_error",
            CatalogAction::ClearSearch => "catalog/clear_search",
        }
    }
}

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Action = CatalogAction;

    fn reduce(state: &mut CatalogState, action: CatalogAction) {
        match action {
            CatalogAction::SetLoading(loading) => state.loading = loading,
            CatalogAction::SetSearchLoading(loading) => state.search_loading = loading,
            CatalogAction::SetError(error) => {
                state.error = error;
                state.loading = false;
                state.search_loading = false;
            }
            CatalogAction::SetProducts(products) => {
                state.products = products;
                state.loading = false;
                state.error = None;
            }
            CatalogAction::SetCategories(categories) => state.categories = categories,
            CatalogAction::SetFeatured(featured) => state.featured = featured,
            CatalogAction::SetSearchResults(results) => {
                state.search_results = results;
                state.search_loading = false;
                state.loading = false;
                state.error = None;
            }
            CatalogAction::SetSearchQuery(query) => state.search_query = query,
            CatalogAction::SetDeals(deals) => {
                state.deals = deals;
                state.loading = false;
                state.error = None;
            }
            CatalogAction::SetFilters(patch) => state.filters.apply(patch),
            CatalogAction::ClearError => state.error = None,
            CatalogAction::ClearSearch => {
                state.search_results.clear();
                state.search_query.clear();
                state.search_loading = false;
            }
        }
    }
}
