//! # tray-core: Pure Order Logic for Lunch Tray
//!
//! This crate holds the ordering screen's business logic as plain values and
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lunch Tray Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Ordering Screen (tray-cli)                      │   │
//! │  │   Entree ──► Side ──► Accompaniment ──► Checkout (submit/cancel)│   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ set_entree / set_side / reset          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tray-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │   order   │  │   │
//! │  │   │ MenuItem  │  │   Money   │  │  Catalog  │  │OrderState │  │   │
//! │  │   │ Category  │  │ format_…  │  │ lunch_menu│  │ OrderEvent│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Category, TaxRate)
//! - [`money`] - Money type with integer arithmetic, currency formatting
//! - [`catalog`] - The read-only menu
//! - [`order`] - The order being edited and its observers
//! - [`error`] - Domain error types
//! - [`validation`] - Menu data validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tray_core::{Catalog, OrderState, DEFAULT_TAX_RATE};
//!
//! let menu = Catalog::lunch_menu();
//! let mut order = OrderState::new(DEFAULT_TAX_RATE);
//!
//! order.set_entree("chili", &menu).unwrap(); // $4.00
//! order.set_side("rice", &menu).unwrap();    // $1.50
//!
//! assert_eq!(order.subtotal().cents(), 550);
//! assert_eq!(order.tax().cents(), 44);
//! assert_eq!(order.total().cents(), 594);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_currency, CurrencyFormat, Money};
pub use order::{OrderEvent, OrderObserver, OrderSnapshot, OrderState, OrderTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every order (8%).
///
/// Fixed for the lifetime of the process; the app may override it once at
/// startup from configuration.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(800);
