//! Order commands.

use anyhow::{bail, Result};
use chrono::Utc;
use dukaan_commerce::checkout::{Order, OrderStatus, TrackedOrder};
use dukaan_commerce::OrderId;
use dukaan_data::OrderService;
use dukaan_i18n::{format_date, t, Language, TextKey};

use super::{confirm, with_spinner, OrdersArgs, OrdersCommand};
use crate::context::Context;
use crate::output::status_badge;
use crate::state::ShopState;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let state = ShopState::open(ctx)?;
    let lang = state.storefront.language().language();

    match args.command.unwrap_or(OrdersCommand::List { status: None }) {
        OrdersCommand::List { status } => {
            let orders = match status {
                Some(name) => {
                    let Some(status) = OrderStatus::from_str_opt(&name) else {
                        bail!("Unknown order status: {}", name);
                    };
                    let orders = state.storefront.services().orders.get_by_status(status);
                    with_spinner(ctx, lang, orders).await?
                }
                None => with_spinner(ctx, lang, state.storefront.recent_orders()).await?,
            };
            list(&orders, lang, ctx);
        }
        OrdersCommand::Track { code } => {
            let tracked = with_spinner(ctx, lang, state.storefront.track_order(&code)).await?;
            track(&tracked, lang, ctx);
        }
        OrdersCommand::Cancel { id, yes } => {
            let id = OrderId::new(id);
            if !yes && !confirm(&format!("Cancel order #{}?", id))? {
                ctx.output.warn("Order left unchanged");
                return Ok(());
            }
            let order = with_spinner(ctx, lang, state.storefront.cancel_order(id)).await?;
            state.save().await?;
            ctx.output.success(&format!(
                "{} {}",
                order.code,
                status_badge(order.status, lang)
            ));
        }
        OrdersCommand::Advance { id } => {
            let advance = state.storefront.services().orders.advance(OrderId::new(id));
            let order = with_spinner(ctx, lang, advance).await?;
            state.save().await?;
            ctx.output.success(&format!(
                "{} {}",
                order.code,
                status_badge(order.status, lang)
            ));
        }
        OrdersCommand::History => {
            let (_, history) = with_spinner(ctx, lang, state.storefront.load_account()).await?;
            if ctx.output.is_json() {
                ctx.output.json(&history);
                return Ok(());
            }
            ctx.output.header(t(TextKey::Account, lang));
            for summary in &history {
                ctx.output.table_row(
                    &[
                        &summary.code,
                        &format_date(&summary.date, lang),
                        &status_badge(summary.status, lang),
                        &summary.items.to_string(),
                        &summary.total.display(lang),
                    ],
                    &[18, 18, 12, 4, 12],
                );
            }
        }
    }
    Ok(())
}

fn list(orders: &[Order], lang: Language, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return;
    }
    if orders.is_empty() {
        ctx.output.info("No orders yet.");
        ctx.output.info("Run `dukaan checkout` to place one.");
        return;
    }

    let widths = [4, 18, 18, 12, 12];
    ctx.output.table_row(&["ID", "CODE", "DATE", "STATUS", "TOTAL"], &widths);
    for order in orders {
        ctx.output.table_row(
            &[
                &order.id.to_string(),
                &order.code,
                &format_date(&order.created_at, lang),
                &status_badge(order.status, lang),
                &order.total().display(lang),
            ],
            &widths,
        );
    }
    ctx.output.info(&format!("Total: {} order(s)", orders.len()));
}

fn track(tracked: &TrackedOrder, lang: Language, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(tracked);
        return;
    }

    let order = &tracked.order;
    ctx.output.header(&format!("{} (#{})", order.code, order.id));
    ctx.output.kv("Status", &status_badge(order.status, lang));
    ctx.output.kv(t(TextKey::Total, lang), &order.total().display(lang));
    ctx.output.kv(t(TextKey::PaymentMethods, lang), order.payment_method.label(lang));
    ctx.output.kv(t(TextKey::Address, lang), &order.customer.one_line());

    if order.status == OrderStatus::Cancelled {
        if let Some(at) = order.cancelled_at {
            ctx.output.kv(t(TextKey::StatusCancelled, lang), &format_date(&at, lang));
        }
    } else if !order.status.is_terminal() {
        let days = (order.estimated_delivery - Utc::now()).num_days().max(0);
        ctx.output.kv(
            "Delivery",
            &format!("{} ({}d)", format_date(&order.estimated_delivery, lang), days),
        );
    }

    ctx.output.header("Tracking");
    for step in &tracked.tracking {
        let mark = if step.completed { "●" } else { "○" };
        let date = step
            .date
            .map(|date| format_date(&date, lang))
            .unwrap_or_default();
        ctx.output
            .list_item(&format!("{} {} {}", mark, step.status.label(lang), date));
    }

    ctx.output.header(t(TextKey::OrderSummary, lang));
    for line in &order.lines {
        ctx.output.list_item(&format!(
            "{} × {} = {}",
            line.title.get(lang),
            line.quantity,
            line.total().display(lang)
        ));
    }
}
