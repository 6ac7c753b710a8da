//! Language switching.

use anyhow::Result;
use dukaan_i18n::{t, TextKey};
use dukaan_store::{LanguageState, LANGUAGE_COOKIE};

use super::{LangArgs, LangCommand};
use crate::context::Context;
use crate::state::ShopState;

/// Run the lang command.
pub async fn run(args: LangArgs, ctx: &Context) -> Result<()> {
    let mut state = ShopState::open(ctx)?;

    match args.command.unwrap_or(LangCommand::Show) {
        LangCommand::Show => {}
        LangCommand::Set { language } => {
            state.storefront.set_language(language).await?;
        }
        LangCommand::Toggle => {
            state.storefront.toggle_language().await?;
        }
    }

    let current: &LanguageState = state.storefront.language().state();
    if ctx.output.is_json() {
        ctx.output.json(current);
        return Ok(());
    }

    let lang = current.language;
    ctx.output.kv("language", &format!("{} ({})", lang.native_name(), lang));
    ctx.output.kv("direction", current.direction.as_str());
    ctx.output.debug(&format!("stored in the {} cookie", LANGUAGE_COOKIE));
    let hint = if lang.direction().is_rtl() {
        t(TextKey::SwitchToEnglish, lang)
    } else {
        t(TextKey::SwitchToUrdu, lang)
    };
    ctx.output.info(&format!("{} → dukaan lang toggle", hint));
    Ok(())
}
