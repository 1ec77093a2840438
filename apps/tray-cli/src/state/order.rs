//! # Order Session State
//!
//! Holds the one order the screen is editing.
//!
//! ## Thread Safety
//! The order is wrapped in `Arc<Mutex<T>>` because:
//! 1. Selecting an item is a multi-step swap (release, resolve, re-add)
//! 2. Only one command may run that swap at a time
//! 3. Observers must never see a half-finished swap
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Session Operations                             │
//! │                                                                         │
//! │  Screen Action            Command                 Order Change          │
//! │  ─────────────            ───────                 ────────────          │
//! │                                                                         │
//! │  Pick entree ────────────► set_entree() ─────────► entree slot swap    │
//! │  Pick side ──────────────► set_side() ───────────► side slot swap      │
//! │  Pick accompaniment ─────► set_accompaniment() ──► accomp. slot swap   │
//! │  Submit ─────────────────► submit_order() ───────► receipt + reset()   │
//! │  Cancel ─────────────────► cancel_order() ───────► reset()             │
//! │  View totals ────────────► get_order() ──────────► (read only)         │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;
use tray_core::{OrderEvent, OrderObserver, OrderState, TaxRate};

/// Logs every order change.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl OrderObserver for LoggingObserver {
    fn on_change(&self, event: &OrderEvent) {
        match event {
            OrderEvent::SelectionChanged {
                category,
                item,
                totals,
                ..
            } => info!(
                %category,
                item = item.as_ref().map(|i| i.name.as_str()).unwrap_or("<none>"),
                subtotal = %totals.subtotal,
                tax = %totals.tax,
                total = %totals.total,
                "order updated"
            ),
            OrderEvent::Reset { .. } => info!("order cleared"),
        }
    }
}

/// Shared handle to the order being edited.
#[derive(Debug, Clone)]
pub struct OrderSession {
    order: Arc<Mutex<OrderState>>,
}

impl OrderSession {
    /// Creates a session with an empty order and a logging observer attached.
    pub fn new(tax_rate: TaxRate) -> Self {
        let mut order = OrderState::new(tax_rate);
        order.subscribe(Arc::new(LoggingObserver));

        OrderSession {
            order: Arc::new(Mutex::new(order)),
        }
    }

    /// Executes a function with read access to the order.
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderState) -> R,
    {
        let order = self.order.lock().unwrap_or_else(PoisonError::into_inner);
        f(&order)
    }

    /// Executes a function with write access to the order.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_order_mut(|order| order.set_side("rice", &catalog))?;
    /// ```
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderState) -> R,
    {
        let mut order = self.order.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tray_core::Catalog;

    #[test]
    fn test_session_starts_empty() {
        let session = OrderSession::new(TaxRate::from_bps(800));
        assert!(session.with_order(|o| o.is_empty()));
        assert_eq!(session.with_order(|o| o.tax_rate().bps()), 800);
    }

    #[test]
    fn test_order_survives_panicking_observer() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let catalog = Catalog::lunch_menu();
        let session = OrderSession::new(TaxRate::from_bps(800));

        let armed = Arc::new(AtomicBool::new(true));
        let trigger = armed.clone();
        session.with_order_mut(|o| {
            o.subscribe(Arc::new(move |_: &OrderEvent| {
                if trigger.swap(false, Ordering::SeqCst) {
                    panic!("observer failed");
                }
            }))
        });

        let worker = {
            let session = session.clone();
            let catalog = catalog.clone();
            thread::spawn(move || {
                let _ = session.with_order_mut(|o| o.set_entree("chili", &catalog));
            })
        };
        assert!(worker.join().is_err());
        assert!(!armed.load(Ordering::SeqCst));

        // the lock is poisoned, but the order had settled before observers ran
        session.with_order(|o| {
            assert!(o.check_totals().is_ok());
            assert_eq!(o.entree().unwrap().name, "Spicy Black Bean Chili");
            assert_eq!(o.subtotal().cents(), 400);
        });

        session
            .with_order_mut(|o| o.set_side("rice", &catalog))
            .unwrap();
        session.with_order(|o| {
            assert!(o.check_totals().is_ok());
            assert_eq!(o.total().cents(), 594);
        });
    }

    #[test]
    fn test_concurrent_commands_are_serialised() {
        let catalog = Arc::new(Catalog::lunch_menu());
        let session = OrderSession::new(TaxRate::from_bps(800));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let session = session.clone();
                let catalog = catalog.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        let id = if i % 2 == 0 { "chili" } else { "pasta" };
                        session
                            .with_order_mut(|o| o.set_entree(id, &catalog))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        session.with_order(|o| {
            assert!(o.check_totals().is_ok());
            let cents = o.subtotal().cents();
            assert!(cents == 400 || cents == 550);
        });
    }
}
