//! The storefront container: stores plus the services they load from.

use crate::cart::{CartAction, CartReducer};
use crate::catalog::{CatalogAction, CatalogReducer, CatalogState};
use crate::error::StoreResult;
use crate::language::LanguageStore;
use crate::page::{self, EmptyContext, PageState};
use crate::store::Store;
use dukaan_cache::CookieJar;
use dukaan_commerce::account::UserProfile;
use dukaan_commerce::cart::{Cart, CartPricing, PricingPolicy};
use dukaan_commerce::catalog::{self, Category, Product};
use dukaan_commerce::checkout::{
    CheckoutForm, NewOrder, Order, OrderSummary, PaymentMethod, TrackedOrder,
};
use dukaan_commerce::search::{
    CategoryFilter, FilterCriteria, FilterPatch, DEFAULT_DEAL_THRESHOLD,
};
use dukaan_commerce::{CategoryId, CommerceError, OrderId, ProductId};
use dukaan_data::{
    CategoryService, MockBackend, OrderService, ProductService, UserService, RECENT_ORDER_LIMIT,
};
use dukaan_i18n::Language;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Most featured products shown on the home page.
pub const FEATURED_LIMIT: usize = 8;

/// Storefront behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontSettings {
    /// Language used when no cookie is set.
    pub default_language: Language,
    /// Products with a discount strictly above this are deals.
    pub deal_threshold: u8,
    pub pricing: PricingPolicy,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            deal_threshold: DEFAULT_DEAL_THRESHOLD,
            pricing: PricingPolicy::default(),
        }
    }
}

/// The backend boundary the storefront talks to.
#[derive(Clone)]
pub struct Services {
    pub categories: Arc<dyn CategoryService>,
    pub products: Arc<dyn ProductService>,
    pub orders: Arc<dyn OrderService>,
    pub users: Arc<dyn UserService>,
}

impl From<&MockBackend> for Services {
    fn from(backend: &MockBackend) -> Self {
        Self {
            categories: backend.categories(),
            products: backend.products(),
            orders: backend.orders(),
            users: backend.users(),
        }
    }
}

/// Everything a storefront session holds.
pub struct Storefront {
    services: Services,
    cart: Store<CartReducer>,
    catalog: Store<CatalogReducer>,
    language: LanguageStore,
    settings: StorefrontSettings,
}

impl Storefront {
    /// Build a storefront with an empty cart. The language is read from the
    /// jar's cookie.
    pub fn new(
        services: Services,
        jar: CookieJar,
        settings: StorefrontSettings,
    ) -> StoreResult<Self> {
        Ok(Self {
            services,
            cart: Store::new("cart", Cart::new()),
            catalog: Store::new("catalog", CatalogState::default()),
            language: LanguageStore::load(jar, settings.default_language)?,
            settings,
        })
    }

    /// Resume with a previously saved cart.
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = Store::new("cart", cart);
        self
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn settings(&self) -> &StorefrontSettings {
        &self.settings
    }

    pub fn cart(&self) -> &Cart {
        self.cart.state()
    }

    pub fn cart_store(&mut self) -> &mut Store<CartReducer> {
        &mut self.cart
    }

    pub fn catalog(&self) -> &CatalogState {
        self.catalog.state()
    }

    pub fn catalog_store(&mut self) -> &mut Store<CatalogReducer> {
        &mut self.catalog
    }

    pub fn language(&self) -> &LanguageStore {
        &self.language
    }

    pub fn language_mut(&mut self) -> &mut LanguageStore {
        &mut self.language
    }

    // Catalog loads. Each one raises the loading flag and clears the last
    // failure, then either stores its result or records the failure message.

    /// The home page: every product and category, with the first
    /// [`FEATURED_LIMIT`] featured products picked out.
    pub async fn load_home(&mut self) -> StoreResult<()> {
        self.begin_load();
        let result = page::load_both(
            "home page",
            self.services.products.get_all(),
            self.services.categories.get_all(),
        )
        .await;
        let (products, categories) = self.settle(result)?;
        let featured = products
            .iter()
            .filter(|product| product.featured)
            .take(FEATURED_LIMIT)
            .cloned()
            .collect();
        self.catalog.dispatch(CatalogAction::SetCategories(catalog::with_product_counts(
            categories, &products,
        )));
        self.catalog.dispatch(CatalogAction::SetProducts(products));
        self.catalog.dispatch(CatalogAction::SetFeatured(featured));
        self.catalog.dispatch(CatalogAction::SetLoading(false));
        Ok(())
    }

    /// The product listing under the active filters.
    pub async fn load_products(&mut self) -> StoreResult<()> {
        self.begin_load();
        let filters = self.catalog().filters;
        let result = page::load("products", self.services.products.search("", &filters)).await;
        let products = self.settle(result)?;
        self.catalog.dispatch(CatalogAction::SetProducts(products));
        Ok(())
    }

    /// All categories, with product counts.
    pub async fn load_categories(&mut self) -> StoreResult<()> {
        self.begin_load();
        let result = page::load_both(
            "categories",
            self.services.categories.get_all(),
            self.services.products.get_all(),
        )
        .await;
        let (categories, products) = self.settle(result)?;
        self.catalog.dispatch(CatalogAction::SetCategories(catalog::with_product_counts(
            categories, &products,
        )));
        self.catalog.dispatch(CatalogAction::SetLoading(false));
        Ok(())
    }

    /// One category page: the category and its products under the active
    /// filters.
    pub async fn load_category(&mut self, id: CategoryId) -> StoreResult<Category> {
        self.begin_load();
        let filters = self
            .catalog()
            .filters
            .with(FilterPatch::default().category(CategoryFilter::Id(id)));
        let result = page::load_both(
            "category",
            self.services.categories.get_by_id(id),
            self.services.products.search("", &filters),
        )
        .await;
        let (category, products) = self.settle(result)?;
        self.catalog.dispatch(CatalogAction::SetProducts(products));
        Ok(category)
    }

    pub async fn load_product(&mut self, id: ProductId) -> StoreResult<Product> {
        self.begin_load();
        let result = page::load("product", self.services.products.get_by_id(id)).await;
        let product = self.settle(result)?;
        self.catalog.dispatch(CatalogAction::SetLoading(false));
        Ok(product)
    }

    pub async fn load_deals(&mut self) -> StoreResult<()> {
        self.begin_load();
        let result = page::load(
            "deals",
            self.services.products.get_deals(self.settings.deal_threshold),
        )
        .await;
        let deals = self.settle(result)?;
        self.catalog.dispatch(CatalogAction::SetDeals(deals));
        Ok(())
    }

    /// Run a search with the active filters.
    pub async fn search(&mut self, query: &str) -> StoreResult<()> {
        self.catalog
            .dispatch(CatalogAction::SetSearchQuery(query.to_string()));
        self.catalog.dispatch(CatalogAction::SetSearchLoading(true));
        self.catalog.dispatch(CatalogAction::ClearError);
        let filters = self.catalog().filters;
        let result = page::load(
            "search results",
            self.services.products.search(query, &filters),
        )
        .await;
        let results = self.settle(result)?;
        self.catalog.dispatch(CatalogAction::SetSearchResults(results));
        Ok(())
    }

    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.catalog.dispatch(CatalogAction::SetFilters(patch));
    }

    pub fn reset_filters(&mut self) {
        let defaults = FilterCriteria::default();
        self.set_filters(FilterPatch {
            category: Some(defaults.category),
            price: Some(defaults.price),
            sort: Some(defaults.sort),
            min_rating: Some(defaults.min_rating),
            availability: Some(defaults.availability),
        });
    }

    pub fn clear_search(&mut self) {
        self.catalog.dispatch(CatalogAction::ClearSearch);
    }

    fn begin_load(&mut self) {
        self.catalog.dispatch(CatalogAction::SetLoading(true));
        self.catalog.dispatch(CatalogAction::ClearError);
    }

    fn settle<T>(&mut self, result: StoreResult<T>) -> StoreResult<T> {
        if let Err(err) = &result {
            self.catalog
                .dispatch(CatalogAction::SetError(Some(err.to_string())));
        }
        result
    }

    // Cart.

    /// Fetch a product and add it to the cart.
    pub async fn add_to_cart(&mut self, id: ProductId, quantity: u32) -> StoreResult<()> {
        let product = self.services.products.get_by_id(id).await?;
        if !product.is_in_stock() {
            return Err(CommerceError::ValidationError(format!(
                "{} is out of stock",
                product.title.en
            ))
            .into());
        }
        self.cart.dispatch(CartAction::AddItem { product, quantity });
        Ok(())
    }

    pub fn dispatch_cart(&mut self, action: CartAction) {
        self.cart.dispatch(action);
    }

    pub fn cart_pricing(&self) -> CartPricing {
        self.cart().pricing(&self.settings.pricing)
    }

    pub fn cart_page(&self) -> PageState<&Cart> {
        if self.cart().is_empty() {
            PageState::Empty(EmptyContext::Cart)
        } else {
            PageState::Ready(self.cart())
        }
    }

    // Checkout and orders.

    /// Submit the checkout form: create the order, remember it, empty the cart.
    pub async fn place_order(
        &mut self,
        form: CheckoutForm,
        payment_method: PaymentMethod,
    ) -> StoreResult<Order> {
        let draft = NewOrder::from_cart(
            self.cart().items(),
            form,
            payment_method,
            self.cart_pricing(),
        )?;
        let order = self.services.orders.create(draft).await?;
        self.cart
            .dispatch(CartAction::RecordRecentOrder(order.summary()));
        self.cart.dispatch(CartAction::Clear);
        tracing::info!(code = %order.code, total = %order.total(), payment = %payment_method, "order placed");
        Ok(order)
    }

    pub async fn recent_orders(&self) -> StoreResult<Vec<Order>> {
        page::load(
            "orders",
            self.services.orders.get_recent(RECENT_ORDER_LIMIT),
        )
        .await
    }

    pub async fn track_order(&self, code: &str) -> StoreResult<TrackedOrder> {
        Ok(self.services.orders.track(code).await?)
    }

    pub async fn cancel_order(&self, id: OrderId) -> StoreResult<Order> {
        let order = self.services.orders.cancel(id).await?;
        Ok(order)
    }

    // Account.

    /// Profile and order history for the account page.
    pub async fn load_account(&self) -> StoreResult<(UserProfile, Vec<OrderSummary>)> {
        page::load_both(
            "account",
            self.services.users.get_profile(),
            self.services.users.get_order_history(),
        )
        .await
    }

    // Language.

    pub async fn set_language(&mut self, language: Language) -> StoreResult<()> {
        self.language.set_language(language).await
    }

    pub async fn toggle_language(&mut self) -> StoreResult<Language> {
        self.language.toggle().await
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("cart", self.cart())
            .field("language", &self.language)
            .field("settings", &self.settings)
            .finish()
    }
}
