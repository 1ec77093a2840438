//! # Validation Module
//!
//! Validation of menu data and of identifiers sent by the ordering screen.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Menu load (once, at startup)                                          │
//! │  ├── validate_item_id        every identifier                          │
//! │  ├── validate_item_name      every display name                        │
//! │  └── validate_price          every price (0 ..= MAX_ITEM_PRICE_CENTS)  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Config load                                                            │
//! │  └── validate_tax_rate_bps   fixed for the process lifetime            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Screen command                                                         │
//! │  └── normalize_item_id       trim before catalog lookup                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest identifier accepted in a menu file.
pub const MAX_ITEM_ID_LEN: usize = 50;

/// Longest display name accepted in a menu file.
pub const MAX_ITEM_NAME_LEN: usize = 100;

/// Highest price accepted in a menu file ($1,000,000).
///
/// Three items at this price, taxed at 100%, stay far inside `i64` cents.
pub const MAX_ITEM_PRICE_CENTS: i64 = 100_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item identifier (the catalog key).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use tray_core::validation::validate_item_id;
///
/// assert!(validate_item_id("pasta").is_ok());
/// assert!(validate_item_id("mac_and_cheese").is_ok());
/// assert!(validate_item_id("").is_err());
/// assert!(validate_item_id("two words").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ITEM_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a menu item display name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Trims an identifier received from the screen.
///
/// Lookup misses are reported by the catalog, not here, so any string is
/// accepted.
pub fn normalize_item_id(raw: &str) -> &str {
    raw.trim()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price. Zero is allowed (free water, condiments); the
/// ceiling is [`MAX_ITEM_PRICE_CENTS`].
///
/// ```rust
/// use tray_core::money::Money;
/// use tray_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(550)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_ITEM_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_ITEM_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
