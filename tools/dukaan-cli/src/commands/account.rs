//! Account commands: profile, addresses, preferences.

use anyhow::Result;
use dialoguer::Password;
use dukaan_commerce::account::{
    Acknowledgement, NewAddress, PreferencesPatch, ProfilePatch, SavedAddress, UserProfile,
};
use dukaan_commerce::AddressId;
use dukaan_data::UserService;
use dukaan_i18n::{format_date, t, Language, LocalizedText, TextKey};

use super::{confirm, with_spinner, AccountArgs, AccountCommand};
use crate::context::Context;
use crate::state::ShopState;

/// Run the account command.
pub async fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    let state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();
    let users = state.storefront.services().users.clone();

    match args.command.unwrap_or(AccountCommand::Show) {
        AccountCommand::Show => {
            let (profile, history) =
                with_spinner(ctx, lang, state.storefront.load_account()).await?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "profile": profile,
                    "orders": history,
                }));
                return Ok(());
            }
            show(&profile, lang, ctx);
            ctx.output.kv("Orders", &history.len().to_string());
            return Ok(());
        }
        AccountCommand::Update {
            name_en,
            name_ur,
            email,
            phone,
        } => {
            let current = with_spinner(ctx, lang, users.get_profile()).await?;
            let name = match (name_en, name_ur) {
                (None, None) => None,
                (en, ur) => Some(LocalizedText::new(
                    en.unwrap_or(current.name.en),
                    ur.unwrap_or(current.name.ur),
                )),
            };
            let patch = ProfilePatch {
                name,
                email,
                phone,
                ..ProfilePatch::default()
            };
            let profile = with_spinner(ctx, lang, users.update_profile(patch)).await?;
            show(&profile, lang, ctx);
        }
        AccountCommand::Addresses => {
            let profile = with_spinner(ctx, lang, users.get_profile()).await?;
            let addresses = profile.addresses.addresses();
            if ctx.output.is_json() {
                ctx.output.json(&addresses);
                return Ok(());
            }
            ctx.output.header(t(TextKey::Address, lang));
            if addresses.is_empty() {
                ctx.output.info("No saved addresses.");
            }
            for address in addresses {
                ctx.output.list_item(&address_line(address));
            }
            return Ok(());
        }
        AccountCommand::AddAddress {
            kind,
            name,
            address,
            city,
            state: province,
            country,
            postal_code,
            default,
        } => {
            let new = NewAddress {
                kind,
                name,
                address,
                city,
                state: province,
                country,
                postal_code,
                is_default: default,
            };
            let saved = with_spinner(ctx, lang, users.add_address(new)).await?;
            ctx.output.success(&format!("Saved {}", address_line(&saved)));
        }
        AccountCommand::DefaultAddress { id } => {
            let saved = with_spinner(ctx, lang, users.set_default_address(AddressId::new(id))).await?;
            ctx.output.success(&format!("Default is now {}", address_line(&saved)));
        }
        AccountCommand::RemoveAddress { id } => {
            let removed = with_spinner(ctx, lang, users.delete_address(AddressId::new(id))).await?;
            ctx.output.success(&format!("Removed {}", address_line(&removed)));
        }
        AccountCommand::Preferences {
            language,
            email,
            sms,
            push,
            newsletter,
        } => {
            let patch = PreferencesPatch {
                language,
                email_notifications: email,
                sms_notifications: sms,
                push_notifications: push,
                newsletter,
            };
            let profile = with_spinner(ctx, lang, users.update_preferences(patch)).await?;
            show_preferences(&profile, ctx);
        }
        AccountCommand::Password => {
            let current = Password::new().with_prompt("Current password").interact()?;
            let new = Password::new()
                .with_prompt("New password")
                .with_confirmation("Repeat new password", "Passwords do not match")
                .interact()?;
            let ack = with_spinner(ctx, lang, users.change_password(&current, &new)).await?;
            acknowledge(&ack, ctx);
        }
        AccountCommand::ResetPassword { email } => {
            let ack = with_spinner(ctx, lang, users.request_password_reset(&email)).await?;
            acknowledge(&ack, ctx);
        }
        AccountCommand::Delete { yes } => {
            if !yes && !confirm("Delete this account?")? {
                ctx.output.warn("Account left unchanged");
                return Ok(());
            }
            let ack = with_spinner(ctx, lang, users.delete_account()).await?;
            acknowledge(&ack, ctx);
        }
    }

    state.save().await
}

fn show(profile: &UserProfile, lang: Language, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(profile);
        return;
    }

    ctx.output.header(t(TextKey::Account, lang));
    ctx.output.kv("Name", profile.name.get(lang));
    ctx.output.kv(t(TextKey::Email, lang), &profile.email);
    ctx.output.kv(t(TextKey::Phone, lang), &profile.phone);
    if let Some(dob) = profile.date_of_birth {
        ctx.output.kv("Born", &format_date(&dob, lang));
    }
    ctx.output.kv("Member since", &format_date(&profile.join_date, lang));
    if let Some(last_login) = profile.last_login {
        ctx.output.kv("Last login", &format_date(&last_login, lang));
    }
    if let Some(address) = profile.addresses.default_address() {
        ctx.output.kv(t(TextKey::Address, lang), &address.one_line());
    }
    show_preferences(profile, ctx);
}

fn show_preferences(profile: &UserProfile, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&profile.preferences);
        return;
    }
    let prefs = &profile.preferences;
    ctx.output.header("Preferences");
    ctx.output.kv("language", prefs.language.native_name());
    ctx.output.kv("email", &prefs.notifications.email.to_string());
    ctx.output.kv("sms", &prefs.notifications.sms.to_string());
    ctx.output.kv("push", &prefs.notifications.push.to_string());
    ctx.output.kv("newsletter", &prefs.newsletter.to_string());
}

fn address_line(address: &SavedAddress) -> String {
    let marker = if address.is_default { " (default)" } else { "" };
    format!(
        "[{}] {}: {}{}",
        address.id,
        address.name,
        address.one_line(),
        marker
    )
}

fn acknowledge(ack: &Acknowledgement, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(ack);
    } else if ack.success {
        ctx.output.success(&ack.message);
    } else {
        ctx.output.warn(&ack.message);
    }
}
