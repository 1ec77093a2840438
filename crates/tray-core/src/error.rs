//! # Error Types
//!
//! Domain-specific error types for tray-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tray-core errors (this file)                                          │
//! │  ├── CoreError        - Order and catalog errors                       │
//! │  └── ValidationError  - Menu data / input validation failures          │
//! │                                                                         │
//! │  tray-cli errors (in app)                                              │
//! │  └── ApiError         - What the screen sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Order and catalog errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested item identifier is not on the menu.
    ///
    /// ## When This Occurs
    /// - Screen sends a stale or mistyped identifier
    /// - Menu file was edited while a screen still shows the old list
    ///
    /// Not fatal: the slot is left empty and the screen may re-prompt.
    #[error("Menu item not found: {0}")]
    CatalogMiss(String),

    /// Tax or total no longer derive from the subtotal. Always a bug.
    #[error("Order totals inconsistent: subtotal {subtotal}, tax {tax}, total {total}")]
    InconsistentTotals {
        subtotal: Money,
        tax: Money,
        total: Money,
    },

    /// Two menu entries share an identifier.
    #[error("Duplicate menu item: {0}")]
    DuplicateItem(String),

    /// Menu data could not be parsed.
    #[error("Invalid menu data: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CatalogMiss("tofu".to_string());
        assert_eq!(err.to_string(), "Menu item not found: tofu");

        let err = CoreError::InconsistentTotals {
            subtotal: Money::from_cents(500),
            tax: Money::from_cents(41),
            total: Money::from_cents(541),
        };
        assert_eq!(
            err.to_string(),
            "Order totals inconsistent: subtotal $5.00, tax $0.41, total $5.41"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
