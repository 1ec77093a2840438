//! # State Module
//!
//! Application state for the ordering screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   Catalog    │  │ OrderSession │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  menu items  │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │  (read-only) │  │  OrderState  │  │  currency        │              │
//! │  │              │  │  >>          │  │  tax_rate        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Catalog: never mutated after startup                                │
//! │  • OrderSession: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod order;

pub use config::{ConfigError, ConfigState};
pub use order::{LoggingObserver, OrderSession};
