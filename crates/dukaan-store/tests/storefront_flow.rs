//! End-to-end storefront flows over the seeded mock backend.

use dukaan_cache::{Cache, CookieJar};
use dukaan_commerce::checkout::{CheckoutForm, OrderStatus, PaymentMethod};
use dukaan_commerce::search::{Availability, FilterPatch, SortKey};
use dukaan_commerce::{CategoryId, CommerceError, Money, ProductId};
use dukaan_data::{LatencyConfig, MockBackend, ServiceTag};
use dukaan_i18n::{Direction, Language};
use dukaan_store::{
    CartAction, EmptyContext, PageState, Services, StoreError, Storefront, StorefrontSettings,
    FEATURED_LIMIT, LANGUAGE_COOKIE,
};

fn storefront() -> (MockBackend, Storefront) {
    let backend = MockBackend::seeded(LatencyConfig::none()).unwrap();
    let storefront = Storefront::new(
        Services::from(&backend),
        CookieJar::in_memory(),
        StorefrontSettings::default(),
    )
    .unwrap();
    (backend, storefront)
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Ahmed".into(),
        last_name: "Ali".into(),
        email: "ahmed@example.com".into(),
        phone: "+92 300 1234567".into(),
        address: "123 Main Street, Block A".into(),
        city: "Karachi".into(),
        state: "Sindh".into(),
        zip_code: "75300".into(),
    }
}

#[tokio::test]
async fn test_home_page_loads_featured() {
    let (_, mut storefront) = storefront();
    storefront.load_home().await.unwrap();

    let catalog = storefront.catalog();
    assert!(!catalog.loading);
    assert!(catalog.error.is_none());
    assert!(catalog.featured.iter().all(|p| p.featured));
    assert!(!catalog.featured.is_empty());
    assert!(catalog.featured.len() <= FEATURED_LIMIT);
    assert!(!catalog.products.is_empty());
    assert!(catalog.categories.iter().all(|c| c.product_count.is_some()));
}

#[tokio::test]
async fn test_search_phone_then_in_stock_only() {
    let (_, mut storefront) = storefront();
    storefront.search("phone").await.unwrap();

    let titles: Vec<&str> = storefront
        .catalog()
        .search_results
        .iter()
        .map(|p| p.title.en.as_str())
        .collect();
    assert!(titles.contains(&"Smartphone X"));
    assert_eq!(storefront.catalog().search_query, "phone");

    storefront.search("laptop").await.unwrap();
    assert_eq!(storefront.catalog().search_results.len(), 1);

    storefront.set_filters(FilterPatch::default().availability(Availability::InStock));
    storefront.search("laptop").await.unwrap();
    assert_eq!(
        storefront.catalog().search_page(),
        PageState::Empty(EmptyContext::Search)
    );

    storefront.clear_search();
    assert!(storefront.catalog().search_query.is_empty());
}

#[tokio::test]
async fn test_listing_respects_filters() {
    let (_, mut storefront) = storefront();
    storefront.set_filters(FilterPatch::default().sort(SortKey::PriceAsc));
    storefront.load_products().await.unwrap();

    let prices: Vec<Money> = storefront.catalog().products.iter().map(|p| p.price).collect();
    let mut sorted = prices.clone();
    sorted.sort();
    assert_eq!(prices, sorted);

    storefront.reset_filters();
    assert_eq!(storefront.catalog().filters.sort, SortKey::Featured);
}

#[tokio::test]
async fn test_category_page_and_counts() {
    let (_, mut storefront) = storefront();
    let category = storefront.load_category(CategoryId::new(1)).await.unwrap();
    assert_eq!(category.name.en, "Electronics");
    assert!(storefront
        .catalog()
        .products
        .iter()
        .all(|p| p.category_id == CategoryId::new(1)));

    storefront.load_categories().await.unwrap();
    let electronics = storefront
        .catalog()
        .categories
        .iter()
        .find(|c| c.id == CategoryId::new(1))
        .unwrap();
    assert_eq!(
        electronics.product_count,
        Some(storefront.catalog().products.len() as u32)
    );
}

#[tokio::test]
async fn test_deals_are_above_threshold() {
    let (_, mut storefront) = storefront();
    storefront.load_deals().await.unwrap();
    let deals = &storefront.catalog().deals;
    assert!(!deals.is_empty());
    assert!(deals.iter().all(|p| p.discount_percentage > 20));
}

#[tokio::test]
async fn test_checkout_flow() {
    let (_, mut storefront) = storefront();
    storefront.add_to_cart(ProductId::new(1), 1).await.unwrap();
    storefront.add_to_cart(ProductId::new(1), 1).await.unwrap();
    storefront.add_to_cart(ProductId::new(11), 2).await.unwrap();

    let cart = storefront.cart();
    assert_eq!(cart.unique_items(), 2);
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.total(), Money::new(45000 * 2 + 650 * 2));

    let pricing = storefront.cart_pricing();
    assert!(pricing.has_free_shipping());
    assert_eq!(pricing.tax_total, Money::new(4565));

    let order = storefront
        .place_order(checkout_form(), PaymentMethod::CashOnDelivery)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.total(), pricing.grand_total);
    assert_eq!(order.item_count(), 4);

    assert!(storefront.cart().is_empty());
    assert_eq!(
        storefront.cart_page(),
        PageState::Empty(EmptyContext::Cart)
    );
    assert_eq!(storefront.cart().recent_orders()[0].code, order.code);

    let tracked = storefront.track_order(&order.code).await.unwrap();
    assert_eq!(tracked.tracking.len(), 4);

    let cancelled = storefront.cancel_order(order.id).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(storefront.recent_orders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_checkout_rejects_empty_cart_and_bad_form() {
    let (_, mut storefront) = storefront();
    let err = storefront
        .place_order(checkout_form(), PaymentMethod::Card)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Commerce(CommerceError::EmptyCart)));

    storefront.add_to_cart(ProductId::new(2), 1).await.unwrap();
    let form = CheckoutForm {
        city: String::new(),
        ..checkout_form()
    };
    let err = storefront
        .place_order(form, PaymentMethod::Bank)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("city"));
    assert_eq!(storefront.cart().unique_items(), 1);
}

#[tokio::test]
async fn test_out_of_stock_and_unknown_products() {
    let (_, mut storefront) = storefront();
    let err = storefront.add_to_cart(ProductId::new(3), 1).await.unwrap_err();
    assert!(err.to_string().contains("out of stock"));

    let err = storefront.add_to_cart(ProductId::new(999), 1).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(storefront.cart().is_empty());
}

#[tokio::test]
async fn test_failed_load_then_retry() {
    let (backend, mut storefront) = storefront();
    backend.set_offline(ServiceTag::Products, true);

    let err = storefront.load_products().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to load products");
    assert_eq!(
        storefront.catalog().products_page().error(),
        Some("Failed to load products")
    );
    assert!(!storefront.catalog().loading);

    backend.set_offline(ServiceTag::Products, false);
    storefront.load_products().await.unwrap();
    assert!(storefront.catalog().products_page().is_ready());
}

#[tokio::test]
async fn test_home_is_all_or_nothing() {
    let (backend, mut storefront) = storefront();
    backend.set_offline(ServiceTag::Categories, true);
    assert!(storefront.load_home().await.is_err());
    assert!(storefront.catalog().featured.is_empty());
    assert_eq!(
        storefront.catalog().error.as_deref(),
        Some("Failed to load home page")
    );
}

#[tokio::test]
async fn test_retry_clears_previous_failure() {
    let (backend, mut storefront) = storefront();
    backend.set_offline(ServiceTag::Categories, true);
    assert!(storefront.load_home().await.is_err());
    assert!(storefront.catalog().error.is_some());

    backend.set_offline(ServiceTag::Categories, false);
    storefront.load_home().await.unwrap();
    assert!(storefront.catalog().error.is_none());
    assert!(!storefront.catalog().loading);
    assert!(!storefront.catalog().featured.is_empty());

    backend.set_offline(ServiceTag::Products, true);
    assert!(storefront.load_product(ProductId::new(1)).await.is_err());
    backend.set_offline(ServiceTag::Products, false);
    storefront.load_categories().await.unwrap();
    assert!(storefront.catalog().error.is_none());

    backend.set_offline(ServiceTag::Products, true);
    assert!(storefront.search("phone").await.is_err());
    backend.set_offline(ServiceTag::Products, false);
    storefront.load_product(ProductId::new(1)).await.unwrap();
    assert!(storefront.catalog().error.is_none());
}

#[tokio::test]
async fn test_saved_for_later_round_trip() {
    let (_, mut storefront) = storefront();
    storefront.add_to_cart(ProductId::new(5), 2).await.unwrap();
    storefront.dispatch_cart(CartAction::SaveForLater(ProductId::new(5)));
    assert!(storefront.cart().is_empty());
    assert_eq!(storefront.cart_pricing().grand_total, Money::zero());

    storefront.dispatch_cart(CartAction::MoveToCart(ProductId::new(5)));
    assert_eq!(storefront.cart().item_count(), 2);
}

#[tokio::test]
async fn test_account_page() {
    let (_, storefront) = storefront();
    let (profile, history) = storefront.load_account().await.unwrap();
    assert_eq!(profile.name.get(Language::Ur), "احمد علی");
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn test_language_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let backend = MockBackend::seeded(LatencyConfig::none()).unwrap();

    let jar = CookieJar::new(Cache::open(&path).unwrap());
    let mut storefront =
        Storefront::new(Services::from(&backend), jar, StorefrontSettings::default()).unwrap();
    assert_eq!(storefront.toggle_language().await.unwrap(), Language::Ur);
    assert_eq!(storefront.language().direction(), Direction::Rtl);
    drop(storefront);

    let jar = CookieJar::new(Cache::open(&path).unwrap());
    assert_eq!(jar.get(LANGUAGE_COOKIE).unwrap().as_deref(), Some("ur"));
    let storefront =
        Storefront::new(Services::from(&backend), jar, StorefrontSettings::default()).unwrap();
    assert_eq!(storefront.language().language(), Language::Ur);
    assert!(!storefront.language().is_loading());
}
