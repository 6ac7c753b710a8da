//! Cart commands.

use anyhow::{bail, Result};
use dukaan_commerce::ProductId;
use dukaan_i18n::{t, Language, TextKey};
use dukaan_store::{CartAction, PageState, Storefront};

use super::{confirm, with_spinner, CartArgs, CartCommand};
use crate::context::Context;
use crate::state::ShopState;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {
            show(&state.storefront, lang, ctx);
            return Ok(());
        }
        CartCommand::Add { product, quantity } => {
            let id = ProductId::new(product);
            with_spinner(ctx, lang, state.storefront.add_to_cart(id, quantity)).await?;
            ctx.output.success(t(TextKey::AddedToCart, lang));
        }
        CartCommand::Remove { product } => {
            let id = ProductId::new(product);
            require_line(&state.storefront, id)?;
            state.storefront.dispatch_cart(CartAction::RemoveItem(id));
            ctx.output.success(t(TextKey::RemovedFromCart, lang));
        }
        CartCommand::Update { product, quantity } => {
            let id = ProductId::new(product);
            require_line(&state.storefront, id)?;
            state.storefront.dispatch_cart(CartAction::UpdateQuantity {
                product_id: id,
                quantity,
            });
            if quantity <= 0 {
                ctx.output.success(t(TextKey::RemovedFromCart, lang));
            } else {
                ctx.output.success(&format!("{} = {}", t(TextKey::Quantity, lang), quantity));
            }
        }
        CartCommand::Save { product } => {
            let id = ProductId::new(product);
            require_line(&state.storefront, id)?;
            state.storefront.dispatch_cart(CartAction::SaveForLater(id));
            ctx.output.success(t(TextKey::SavedForLater, lang));
        }
        CartCommand::Restore { product } => {
            let id = ProductId::new(product);
            if !state
                .storefront
                .cart()
                .saved_for_later()
                .iter()
                .any(|line| line.product_id() == id)
            {
                bail!("Product {} is not saved for later", id);
            }
            state.storefront.dispatch_cart(CartAction::MoveToCart(id));
            ctx.output.success(t(TextKey::AddedToCart, lang));
        }
        CartCommand::Clear { yes } => {
            if !yes && !confirm("Remove everything from the cart?")? {
                ctx.output.warn("Cart left unchanged");
                return Ok(());
            }
            state.storefront.dispatch_cart(CartAction::Clear);
            ctx.output.success(t(TextKey::EmptyCart, lang));
        }
    }

    state.save().await?;
    show(&state.storefront, lang, ctx);
    Ok(())
}

fn require_line(storefront: &Storefront, id: ProductId) -> Result<()> {
    if !storefront.cart().contains(id) {
        bail!("Product {} is not in the cart", id);
    }
    Ok(())
}

/// Print the cart with its pricing summary.
pub fn show(storefront: &Storefront, lang: Language, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "cart": storefront.cart(),
            "pricing": storefront.cart_pricing(),
        }));
        return;
    }

    ctx.output.header(t(TextKey::Cart, lang));
    let cart = match storefront.cart_page() {
        PageState::Ready(cart) => cart,
        PageState::Empty(empty) => {
            ctx.output.info(empty.message(lang));
            ctx.output.info(t(TextKey::ContinueShopping, lang));
            show_saved(storefront, lang, ctx);
            return;
        }
        PageState::Loading | PageState::Failed(_) => return,
    };

    let widths = [4, 28, 6, 12];
    for line in cart.items() {
        ctx.output.table_row(
            &[
                &line.product_id().to_string(),
                line.product.title_in(lang),
                &format!("× {}", line.quantity),
                &line.line_total().display(lang),
            ],
            &widths,
        );
    }

    let pricing = storefront.cart_pricing();
    ctx.output.header(t(TextKey::OrderSummary, lang));
    ctx.output.kv(t(TextKey::Subtotal, lang), &pricing.subtotal.display(lang));
    let shipping = if pricing.has_free_shipping() {
        t(TextKey::Free, lang).to_string()
    } else {
        pricing.shipping_total.display(lang)
    };
    ctx.output.kv(t(TextKey::Shipping, lang), &shipping);
    ctx.output.kv(t(TextKey::Tax, lang), &pricing.tax_total.display(lang));
    ctx.output.kv(t(TextKey::Total, lang), &pricing.grand_total.display(lang));

    show_saved(storefront, lang, ctx);
}

fn show_saved(storefront: &Storefront, lang: Language, ctx: &Context) {
    let saved = storefront.cart().saved_for_later();
    if saved.is_empty() {
        return;
    }
    ctx.output.header(t(TextKey::SavedForLater, lang));
    for line in saved {
        ctx.output.list_item(&format!(
            "[{}] {} × {}",
            line.product_id(),
            line.product.title_in(lang),
            line.quantity
        ));
    }
}
