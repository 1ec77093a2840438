//! # Order Commands
//!
//! Commands that read or change the order being edited.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Partial  │────►│ Complete │────►│ Receipt  │       │
//! │  │  Order   │     │          │     │          │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                │                │              │
//! │       │           set_entree       submit_order          │              │
//! │       │           set_side                               │              │
//! │       │           set_accompaniment                      │              │
//! │       │                │                                 │              │
//! │       └──── cancel_order ◄──────────────── reset ◄───────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;
use tray_core::{format_currency, Catalog, Category, CurrencyFormat, MenuItem, OrderSnapshot};

use crate::error::{ApiError, ErrorCode};
use crate::state::{ConfigState, OrderSession};

/// A selected item as the screen shows it.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SelectedItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl SelectedItem {
    fn from_item(item: &MenuItem, format: &CurrencyFormat) -> Self {
        SelectedItem {
            name: item.name.clone(),
            description: item.description.clone(),
            price: format_currency(item.price, format),
        }
    }
}

/// Order response including selections and formatted totals.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderResponse {
    pub entree: Option<SelectedItem>,
    pub side: Option<SelectedItem>,
    pub accompaniment: Option<SelectedItem>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub complete: bool,
}

impl OrderResponse {
    pub fn from_snapshot(snapshot: &OrderSnapshot, format: &CurrencyFormat) -> Self {
        let item = |slot: &Option<MenuItem>| {
            slot.as_ref()
                .map(|item| SelectedItem::from_item(item, format))
        };
        let totals = snapshot.totals.formatted(format);

        OrderResponse {
            entree: item(&snapshot.entree),
            side: item(&snapshot.side),
            accompaniment: item(&snapshot.accompaniment),
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            complete: snapshot.entree.is_some()
                && snapshot.side.is_some()
                && snapshot.accompaniment.is_some(),
        }
    }
}

/// What the screen shows after a successful submit.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReceiptResponse {
    pub store_name: String,
    pub order: OrderResponse,
    #[ts(type = "string")]
    pub submitted_at: DateTime<Utc>,
}

/// Gets the current order.
pub fn get_order(session: &OrderSession, config: &ConfigState) -> OrderResponse {
    debug!("get_order command");
    let snapshot = session.with_order(|o| o.snapshot());
    OrderResponse::from_snapshot(&snapshot, &config.currency_format())
}

/// Selects `id` for `category`.
///
/// On a lookup miss the category is left empty and the error is returned;
/// the screen should re-prompt.
pub fn set_item(
    session: &OrderSession,
    catalog: &Catalog,
    config: &ConfigState,
    category: Category,
    id: &str,
) -> Result<OrderResponse, ApiError> {
    debug!(%category, id, "set_item command");
    let snapshot = session.with_order_mut(|o| {
        o.select(category, id, catalog)?;
        Ok::<_, ApiError>(o.snapshot())
    })?;
    Ok(OrderResponse::from_snapshot(&snapshot, &config.currency_format()))
}

pub fn set_entree(
    session: &OrderSession,
    catalog: &Catalog,
    config: &ConfigState,
    id: &str,
) -> Result<OrderResponse, ApiError> {
    set_item(session, catalog, config, Category::Entree, id)
}

pub fn set_side(
    session: &OrderSession,
    catalog: &Catalog,
    config: &ConfigState,
    id: &str,
) -> Result<OrderResponse, ApiError> {
    set_item(session, catalog, config, Category::Side, id)
}

pub fn set_accompaniment(
    session: &OrderSession,
    catalog: &Catalog,
    config: &ConfigState,
    id: &str,
) -> Result<OrderResponse, ApiError> {
    set_item(session, catalog, config, Category::Accompaniment, id)
}

/// Submits the order and starts a fresh one.
///
/// Requires a selection in every category. The receipt is taken and the
/// order reset under the same lock.
pub fn submit_order(
    session: &OrderSession,
    config: &ConfigState,
) -> Result<ReceiptResponse, ApiError> {
    debug!("submit_order command");
    let snapshot = session.with_order_mut(|o| -> Result<OrderSnapshot, ApiError> {
        if !o.is_complete() {
            let missing: Vec<Category> = Category::ALL
                .into_iter()
                .filter(|c| o.selection(*c).is_none())
                .collect();
            return Err(ApiError::new(
                ErrorCode::OrderIncomplete,
                format!("Choose {} before submitting", describe_missing(&missing)),
            ));
        }
        o.check_totals()?;
        let snapshot = o.snapshot();
        o.reset();
        Ok(snapshot)
    })?;

    Ok(ReceiptResponse {
        store_name: config.store_name.clone(),
        order: OrderResponse::from_snapshot(&snapshot, &config.currency_format()),
        submitted_at: Utc::now(),
    })
}

/// "an entree", "a side and an accompaniment", "an entree, a side and an
/// accompaniment".
fn describe_missing(categories: &[Category]) -> String {
    let phrases: Vec<String> = categories
        .iter()
        .map(|c| {
            let name = c.as_str();
            let article = if name.starts_with(&['a', 'e', 'i', 'o', 'u'][..]) {
                "an"
            } else {
                "a"
            };
            format!("{article} {name}")
        })
        .collect();

    match phrases.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

/// Abandons the order.
pub fn cancel_order(session: &OrderSession, config: &ConfigState) -> OrderResponse {
    debug!("cancel_order command");
    let snapshot = session.with_order_mut(|o| {
        o.reset();
        o.snapshot()
    });
    OrderResponse::from_snapshot(&snapshot, &config.currency_format())
}
