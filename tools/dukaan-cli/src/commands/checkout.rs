//! Checkout: collect shipping details and a payment method, then place the order.

use anyhow::{Context as _, Result};
use dialoguer::{Input, Select};
use dukaan_commerce::account::UserProfile;
use dukaan_commerce::checkout::{CheckoutForm, PaymentMethod};
use dukaan_commerce::CommerceError;
use dukaan_i18n::{format_date, t, Language, TextKey};

use super::{cart, confirm, with_spinner, CheckoutArgs};
use crate::context::Context;
use crate::output::status_badge;
use crate::state::ShopState;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();

    if state.storefront.cart().is_empty() {
        return Err(CommerceError::EmptyCart.into());
    }

    ctx.output.header(t(TextKey::Checkout, lang));
    ctx.output.step(1, 4, t(TextKey::OrderSummary, lang));
    cart::show(&state.storefront, lang, ctx);

    ctx.output.step(2, 4, t(TextKey::Address, lang));
    let profile = if args.from_profile {
        let (profile, _) = with_spinner(ctx, lang, state.storefront.load_account()).await?;
        Some(form_from_profile(&profile))
    } else {
        None
    };
    let interactive = !args.yes && !ctx.output.is_json();
    let form = collect_form(&args, profile.unwrap_or_default(), lang, interactive)?;

    ctx.output.step(3, 4, t(TextKey::PaymentMethods, lang));
    let payment = match args.payment {
        Some(method) => method,
        None if interactive => choose_payment(lang)?,
        None => PaymentMethod::default(),
    };
    ctx.output.kv(t(TextKey::PaymentMethods, lang), payment.label(lang));

    if interactive {
        let pricing = state.storefront.cart_pricing();
        let prompt = format!(
            "{} {}?",
            t(TextKey::Confirm, lang),
            pricing.grand_total.display(lang)
        );
        if !confirm(&prompt)? {
            ctx.output.warn(t(TextKey::Cancel, lang));
            return Ok(());
        }
    }

    ctx.output.step(4, 4, t(TextKey::Checkout, lang));
    let order = with_spinner(ctx, lang, state.storefront.place_order(form, payment))
        .await
        .context("Checkout failed")?;
    state.save().await?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success(t(TextKey::OrderPlaced, lang));
    ctx.output.kv("Order", &format!("{} (#{})", order.code, order.id));
    ctx.output.kv("Status", &status_badge(order.status, lang));
    ctx.output.kv(t(TextKey::Total, lang), &order.total().display(lang));
    ctx.output.kv("Delivery", &format_date(&order.estimated_delivery, lang));
    Ok(())
}

/// Shipping details taken from the profile and its default address.
pub fn form_from_profile(profile: &UserProfile) -> CheckoutForm {
    let (first_name, last_name) = match profile.name.en.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (profile.name.en.clone(), String::new()),
    };
    let mut form = CheckoutForm {
        first_name,
        last_name,
        email: profile.email.clone(),
        phone: profile.phone.clone(),
        ..CheckoutForm::default()
    };
    if let Some(address) = profile.addresses.default_address() {
        form.address = address.address.clone();
        form.city = address.city.clone();
        form.state = address.state.clone();
        form.zip_code = address.postal_code.clone();
    }
    form
}

/// Flags win over the profile; anything still blank is prompted for.
fn collect_form(
    args: &CheckoutArgs,
    fallback: CheckoutForm,
    lang: Language,
    interactive: bool,
) -> Result<CheckoutForm> {
    let field = |flag: &Option<String>, fallback: String, key: TextKey| -> Result<String> {
        if let Some(value) = flag {
            return Ok(value.clone());
        }
        if !fallback.trim().is_empty() || !interactive {
            return Ok(fallback);
        }
        Ok(Input::<String>::new()
            .with_prompt(t(key, lang))
            .allow_empty(true)
            .interact_text()?)
    };

    Ok(CheckoutForm {
        first_name: field(&args.first_name, fallback.first_name, TextKey::FirstName)?,
        last_name: field(&args.last_name, fallback.last_name, TextKey::LastName)?,
        email: field(&args.email, fallback.email, TextKey::Email)?,
        phone: field(&args.phone, fallback.phone, TextKey::Phone)?,
        address: field(&args.address, fallback.address, TextKey::Address)?,
        city: field(&args.city, fallback.city, TextKey::City)?,
        state: field(&args.state, fallback.state, TextKey::State)?,
        zip_code: field(&args.zip_code, fallback.zip_code, TextKey::ZipCode)?,
    })
}

fn choose_payment(lang: Language) -> Result<PaymentMethod> {
    let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.label(lang)).collect();
    let index = Select::new()
        .with_prompt(t(TextKey::PaymentMethods, lang))
        .items(&labels[..])
        .default(0)
        .interact()?;
    Ok(PaymentMethod::ALL[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use dukaan_data::{LatencyConfig, MockBackend, UserService};

    #[tokio::test]
    async fn test_form_from_seeded_profile() {
        let backend = MockBackend::seeded(LatencyConfig::none()).unwrap();
        let profile = backend.users().get_profile().await.unwrap();
        let form = form_from_profile(&profile);
        assert_eq!(form.first_name, "Ahmed");
        assert_eq!(form.last_name, "Ali");
        assert_eq!(form.city, "Karachi");
        assert_eq!(form.zip_code, "75300");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_flags_override_fallback() {
        let args = CheckoutArgs {
            city: Some("Lahore".into()),
            ..Default::default()
        };
        let fallback = CheckoutForm {
            city: "Karachi".into(),
            ..CheckoutForm::default()
        };
        let form = collect_form(&args, fallback, Language::En, false).unwrap();
        assert_eq!(form.city, "Lahore");
        assert!(form.first_name.is_empty());
        assert!(form.validate().is_err());
    }
}
