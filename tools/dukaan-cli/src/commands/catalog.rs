//! Catalog browsing: home, listings, categories, search and deals.

use std::time::Duration;

use anyhow::{bail, Result};
use dukaan_commerce::catalog::Product;
use dukaan_commerce::search::{tier_counts, DealCountdown};
use dukaan_commerce::{CategoryId, ProductId};
use dukaan_i18n::{format_number, t, Language, TextKey};
use dukaan_store::{CountdownTicker, EmptyContext, PageState};

use super::{with_spinner, CatalogArgs, DealsArgs, SearchArgs};
use crate::context::Context;
use crate::output::stock_badge;
use crate::state::ShopState;

/// Featured products and categories.
pub async fn home(ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();
    with_spinner(ctx, lang, state.storefront.load_home()).await?;

    let catalog = state.storefront.catalog();
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "featured": catalog.featured,
            "categories": catalog.categories,
        }));
        return Ok(());
    }

    ctx.output.header(t(TextKey::HeroTitle, lang));
    ctx.output.info(t(TextKey::HeroSubtitle, lang));

    ctx.output.header(t(TextKey::Categories, lang));
    for category in &catalog.categories {
        ctx.output.list_item(&format!(
            "{} {} [{}]",
            category.icon,
            category.name_in(lang),
            category.id
        ));
    }

    ctx.output.header(t(TextKey::Featured, lang));
    ctx.output.products(&catalog.featured, lang);
    Ok(())
}

/// The product listing.
pub async fn products(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();
    state.storefront.set_filters(args.patch());
    with_spinner(ctx, lang, state.storefront.load_products()).await?;

    let catalog = state.storefront.catalog();
    ctx.output.header(&format!(
        "{} ({}: {})",
        t(TextKey::Shop, lang),
        t(TextKey::SortBy, lang),
        catalog.filters.sort.display_name(lang)
    ));
    render(catalog.products_page(), lang, ctx)
}

/// One product in detail.
pub async fn product(id: u64, ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();
    let product = with_spinner(ctx, lang, state.storefront.load_product(ProductId::new(id))).await?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }
    describe(&product, lang, ctx);
    Ok(())
}

fn describe(product: &Product, lang: Language, ctx: &Context) {
    ctx.output.header(product.title_in(lang));
    ctx.output.info(product.description.get(lang));
    ctx.output.kv(t(TextKey::Price, lang), &product.price.display(lang));
    if let Some(original) = product.original_price.filter(|_| product.is_on_sale()) {
        ctx.output.kv(
            t(TextKey::Sale, lang),
            &format!(
                "{} → {} (-{}%)",
                original.display(lang),
                product.price.display(lang),
                product.discount_percentage
            ),
        );
    }
    ctx.output.kv(
        t(TextKey::CustomerRating, lang),
        &format!(
            "{:.1} ({} {})",
            product.rating,
            format_number(i64::from(product.review_count), lang),
            t(TextKey::Reviews, lang)
        ),
    );
    ctx.output.kv(t(TextKey::Quantity, lang), &stock_badge(product, lang));

    if !product.badges.is_empty() {
        let badges: Vec<&str> = product.badges.iter().map(|b| b.label.get(lang)).collect();
        ctx.output.kv("Badges", &badges.join(", "));
    }
    if !product.specifications.is_empty() {
        ctx.output.header(t(TextKey::Specifications, lang));
        for (key, value) in &product.specifications {
            ctx.output.kv(key, value);
        }
    }
}

/// All categories with product counts.
pub async fn categories(ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();
    with_spinner(ctx, lang, state.storefront.load_categories()).await?;

    let categories = &state.storefront.catalog().categories;
    if ctx.output.is_json() {
        ctx.output.json(categories);
        return Ok(());
    }

    ctx.output.header(t(TextKey::Categories, lang));
    for category in categories {
        let count = category.product_count.unwrap_or(0);
        ctx.output.table_row(
            &[
                &category.id.to_string(),
                &category.icon,
                category.name_in(lang),
                &count.to_string(),
            ],
            &[4, 2, 24, 4],
        );
    }
    Ok(())
}

/// One category page.
pub async fn category(id: u64, filters: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();
    state.storefront.set_filters(filters.patch());
    let category =
        with_spinner(ctx, lang, state.storefront.load_category(CategoryId::new(id))).await?;

    ctx.output
        .header(&format!("{} {}", category.icon, category.name_in(lang)));
    ctx.output.info(category.description.get(lang));
    render(state.storefront.catalog().products_page(), lang, ctx)
}

/// Search with filters.
pub async fn search(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();
    state.storefront.set_filters(args.filters.patch());
    with_spinner(ctx, lang, state.storefront.search(&args.query)).await?;

    let catalog = state.storefront.catalog();
    ctx.output.header(&format!(
        "{}: \"{}\" ({})",
        t(TextKey::SearchResults, lang),
        catalog.search_query,
        catalog.search_results.len()
    ));
    render(catalog.search_page(), lang, ctx)
}

/// Deals, optionally narrowed to one tier, and the countdown.
pub async fn deals(args: DealsArgs, ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();
    with_spinner(ctx, lang, state.storefront.load_deals()).await?;

    let catalog = state.storefront.catalog();
    ctx.output.header(t(TextKey::Deals, lang));
    if !ctx.output.is_json() {
        for (tier, count) in tier_counts(&catalog.deals) {
            ctx.output.kv(tier.label(lang), &count.to_string());
        }
    }

    let in_tier;
    let page = match args.tier {
        Some(tier) => {
            in_tier = tier.filter(&catalog.deals);
            if in_tier.is_empty() {
                PageState::Empty(EmptyContext::Generic)
            } else {
                PageState::Ready(in_tier.as_slice())
            }
        }
        None => catalog.deals_page(),
    };
    render(page, lang, ctx)?;

    if let Some(seconds) = args.countdown.filter(|_| !ctx.output.is_json()) {
        watch_countdown(seconds, lang, ctx).await;
    }
    Ok(())
}

async fn watch_countdown(seconds: u64, lang: Language, ctx: &Context) {
    let ticker = CountdownTicker::spawn(DealCountdown::FULL);
    let mut updates = ticker.subscribe();
    let label = t(TextKey::LimitedOffer, lang);
    let bar = ctx.output.spinner(&format!("{} {}", label, ticker.current()));

    let deadline = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = *updates.borrow();
                bar.set_message(format!("{} {}", label, current));
            }
        }
    }
    bar.finish();
    ticker.stop();
}

/// Print a product page, or its empty/error state.
fn render(page: PageState<&[Product]>, lang: Language, ctx: &Context) -> Result<()> {
    match page {
        PageState::Ready(products) => ctx.output.products(products, lang),
        PageState::Empty(empty) => {
            if ctx.output.is_json() {
                ctx.output.json(&Vec::<Product>::new());
            } else {
                ctx.output.info(empty.message(lang));
            }
        }
        PageState::Failed(message) => bail!(message),
        PageState::Loading => ctx.output.info(t(TextKey::Loading, lang)),
    }
    Ok(())
}
