//! # Order State
//!
//! The in-progress order on the ordering screen: one selection per
//! [`Category`] plus the running subtotal, tax and total.
//!
//! ## Selection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    select(category, id)                                 │
//! │                                                                         │
//! │  1. Release slot ───────► subtotal -= slot.counted_price               │
//! │                           slot = { None, 0 }                            │
//! │                                                                         │
//! │  2. Resolve id ─────────► catalog.require(id)                          │
//! │                           ├── hit:  slot = { Some(item), item.price }   │
//! │                           └── miss: slot stays { None, 0 }              │
//! │                                                                         │
//! │  3. add_to_subtotal ────► subtotal += slot.counted_price               │
//! │                           recompute_tax_and_total()                     │
//! │                                                                         │
//! │  4. Notify observers ───► OrderEvent::SelectionChanged                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants (outside of a call in progress)
//! - `subtotal` is the sum of the prices of the selected items
//! - each slot's `counted_price` is its selection's price, or zero when empty
//! - `tax == subtotal.calculate_tax(tax_rate)` and `total == subtotal + tax`
//!
//! ## Threading
//! `OrderState` is a plain single-owner value. Screens that share one across
//! threads must serialise every mutating call behind a lock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::{format_currency, CurrencyFormat, Money};
use crate::types::{Category, MenuItem, TaxRate};
use crate::validation::normalize_item_id;

// =============================================================================
// Category Slot
// =============================================================================

/// One category's selection and the price it contributes to the subtotal.
///
/// `counted_price` starts at zero, so releasing an empty slot subtracts
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlot {
    selection: Option<MenuItem>,
    counted_price: Money,
}

impl CategorySlot {
    pub fn selection(&self) -> Option<&MenuItem> {
        self.selection.as_ref()
    }

    /// Price of this slot currently included in the subtotal.
    pub fn counted_price(&self) -> Money {
        self.counted_price
    }

    pub fn is_selected(&self) -> bool {
        self.selection.is_some()
    }

    /// Empties the slot and returns the price it was contributing.
    fn release(&mut self) -> Money {
        self.selection = None;
        std::mem::take(&mut self.counted_price)
    }

    fn fill(&mut self, item: MenuItem) {
        self.counted_price = item.price;
        self.selection = Some(item);
    }
}

// =============================================================================
// Totals & Snapshots
// =============================================================================

/// Subtotal, tax and total at one moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderTotals {
    /// Renders the totals as currency text for display.
    pub fn formatted(&self, format: &CurrencyFormat) -> FormattedTotals {
        FormattedTotals {
            subtotal: format_currency(self.subtotal, format),
            tax: format_currency(self.tax, format),
            total: format_currency(self.total, format),
        }
    }
}

/// Totals as the screen shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

/// Read-only copy of an order for display or a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub entree: Option<MenuItem>,
    pub side: Option<MenuItem>,
    pub accompaniment: Option<MenuItem>,
    pub tax_rate: TaxRate,
    pub totals: OrderTotals,
}

// =============================================================================
// Observation
// =============================================================================

/// A change to an order, delivered after the order has settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderEvent {
    /// A category's selection was replaced (or cleared by a lookup miss).
    SelectionChanged {
        category: Category,
        item: Option<MenuItem>,
        totals: OrderTotals,
        occurred_at: DateTime<Utc>,
    },

    /// Every selection and total returned to its initial value.
    Reset { occurred_at: DateTime<Utc> },
}

/// Receives [`OrderEvent`]s from an [`OrderState`].
pub trait OrderObserver: Send + Sync {
    fn on_change(&self, event: &OrderEvent);
}

impl<F> OrderObserver for F
where
    F: Fn(&OrderEvent) + Send + Sync,
{
    fn on_change(&self, event: &OrderEvent) {
        self(event)
    }
}

/// Handle returned by [`OrderState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// =============================================================================
// Order State
// =============================================================================

/// The order being edited.
pub struct OrderState {
    tax_rate: TaxRate,
    entree: CategorySlot,
    side: CategorySlot,
    accompaniment: CategorySlot,
    subtotal: Money,
    tax: Money,
    total: Money,
    observers: Vec<(SubscriptionId, Arc<dyn OrderObserver>)>,
    next_subscription: u64,
}

impl OrderState {
    /// Creates an empty order taxed at `tax_rate`.
    pub fn new(tax_rate: TaxRate) -> Self {
        OrderState {
            tax_rate,
            entree: CategorySlot::default(),
            side: CategorySlot::default(),
            accompaniment: CategorySlot::default(),
            subtotal: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    pub fn set_entree(&mut self, id: &str, catalog: &Catalog) -> CoreResult<()> {
        self.select(Category::Entree, id, catalog)
    }

    pub fn set_side(&mut self, id: &str, catalog: &Catalog) -> CoreResult<()> {
        self.select(Category::Side, id, catalog)
    }

    pub fn set_accompaniment(&mut self, id: &str, catalog: &Catalog) -> CoreResult<()> {
        self.select(Category::Accompaniment, id, catalog)
    }

    /// Replaces the selection for `category` with the catalog item `id`.
    ///
    /// The outgoing selection's price leaves the subtotal before the incoming
    /// price is added, so the other two categories are untouched.
    ///
    /// ## Errors
    /// [`CoreError::CatalogMiss`] if `id` is not on the menu. The slot is
    /// then empty, its previous price has been removed from the subtotal, and
    /// observers have still been notified.
    pub fn select(&mut self, category: Category, id: &str, catalog: &Catalog) -> CoreResult<()> {
        let id = normalize_item_id(id);

        let outgoing = self.slot_mut(category).release();
        self.subtotal -= outgoing;

        let (incoming, result) = match catalog.require(id) {
            Ok(item) => (Some(item.clone()), Ok(())),
            Err(err) => {
                warn!(%category, id, "menu item not found, leaving category empty");
                (None, Err(err))
            }
        };

        let slot = self.slot_mut(category);
        if let Some(item) = incoming {
            slot.fill(item);
        }
        let price = slot.counted_price;

        debug!(
            %category,
            item = ?slot.selection.as_ref().map(|i| i.name.as_str()),
            outgoing = %outgoing,
            incoming = %price,
            "selection changed"
        );

        self.add_to_subtotal(price);
        debug_assert!(self.check_totals().is_ok());

        self.notify(&OrderEvent::SelectionChanged {
            category,
            item: self.slot(category).selection.clone(),
            totals: self.totals(),
            occurred_at: Utc::now(),
        });

        result
    }

    /// Returns every field to its creation-time value.
    ///
    /// Observers hear a single [`OrderEvent::Reset`] once everything has
    /// settled. Subscriptions and the tax rate are kept.
    pub fn reset(&mut self) {
        self.entree = CategorySlot::default();
        self.side = CategorySlot::default();
        self.accompaniment = CategorySlot::default();
        self.subtotal = Money::zero();
        self.tax = Money::zero();
        self.total = Money::zero();

        info!("order reset");

        self.notify(&OrderEvent::Reset {
            occurred_at: Utc::now(),
        });
    }

    /// Recomputes tax and total from the current subtotal. Idempotent.
    pub fn recompute_tax_and_total(&mut self) {
        self.tax = self.subtotal.calculate_tax(self.tax_rate);
        self.total = self.subtotal + self.tax;
        debug!(tax = %self.tax, total = %self.total, "tax and total recomputed");
    }

    /// Adds `price` to the subtotal and brings tax and total in line.
    fn add_to_subtotal(&mut self, price: Money) {
        self.subtotal += price;
        debug!(subtotal = %self.subtotal, "subtotal updated");
        self.recompute_tax_and_total();
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    pub fn subscribe(&mut self, observer: Arc<dyn OrderObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self, event: &OrderEvent) {
        for (_, observer) in &self.observers {
            observer.on_change(event);
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn entree(&self) -> Option<&MenuItem> {
        self.entree.selection()
    }

    pub fn side(&self) -> Option<&MenuItem> {
        self.side.selection()
    }

    pub fn accompaniment(&self) -> Option<&MenuItem> {
        self.accompaniment.selection()
    }

    pub fn selection(&self, category: Category) -> Option<&MenuItem> {
        self.slot(category).selection()
    }

    pub fn slot(&self, category: Category) -> &CategorySlot {
        match category {
            Category::Entree => &self.entree,
            Category::Side => &self.side,
            Category::Accompaniment => &self.accompaniment,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut CategorySlot {
        match category {
            Category::Entree => &mut self.entree,
            Category::Side => &mut self.side,
            Category::Accompaniment => &mut self.accompaniment,
        }
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn tax(&self) -> Money {
        self.tax
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            entree: self.entree.selection.clone(),
            side: self.side.selection.clone(),
            accompaniment: self.accompaniment.selection.clone(),
            tax_rate: self.tax_rate,
            totals: self.totals(),
        }
    }

    /// No category has a selection.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| !self.slot(*c).is_selected())
    }

    /// Every category has a selection.
    pub fn is_complete(&self) -> bool {
        Category::ALL.iter().all(|c| self.slot(*c).is_selected())
    }

    /// Verifies the derived-total invariants.
    ///
    /// A failure is a bug in this module, never a user error.
    pub fn check_totals(&self) -> CoreResult<()> {
        let counted: Money = Category::ALL
            .iter()
            .map(|c| self.slot(*c).counted_price)
            .sum();
        let selected: Money = Category::ALL
            .iter()
            .filter_map(|c| self.slot(*c).selection.as_ref())
            .map(|item| item.price)
            .sum();

        let consistent = self.subtotal == counted
            && self.subtotal == selected
            && self.tax == self.subtotal.calculate_tax(self.tax_rate)
            && self.total == self.subtotal + self.tax;

        if consistent {
            Ok(())
        } else {
            Err(CoreError::InconsistentTotals {
                subtotal: self.subtotal,
                tax: self.tax,
                total: self.total,
            })
        }
    }
}

impl Default for OrderState {
    fn default() -> Self {
        OrderState::new(TaxRate::default())
    }
}

impl fmt::Debug for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderState")
            .field("tax_rate", &self.tax_rate)
            .field("entree", &self.entree)
            .field("side", &self.side)
            .field("accompaniment", &self.accompaniment)
            .field("subtotal", &self.subtotal)
            .field("tax", &self.tax)
            .field("total", &self.total)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
