//! # Money Module
//!
//! Provides the `Money` type for menu prices and order totals, plus the
//! currency text formatting the ordering screen applies when it reads totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Swapping an entree with floats:                                        │
//! │    7.00 - 5.50 + 5.50 = 6.999999999999999  ❌ drifts on every swap      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    700 - 550 + 550 = 700                    ✅ swaps are exact          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tray_core::money::Money;
//!
//! let burger = Money::from_cents(500); // $5.00
//! let fries = Money::from_major_minor(2, 0); // $2.00
//! assert_eq!((burger + fries).cents(), 700);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction during a selection swap may pass through
///   intermediate values, so the type never wraps at zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use tray_core::money::Money;
    ///
    /// let price = Money::from_cents(550); // $5.50
    /// assert_eq!(price.cents(), 550);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half a cent up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5 cent).
    ///
    /// ## Example
    /// ```rust
    /// use tray_core::money::Money;
    /// use tray_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(700); // $7.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800)); // 8%
    /// assert_eq!(tax.cents(), 56);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps large subtotals from overflowing before the division
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-style `$x.yy` rendering. Screens should go through
/// [`format_currency`] so the configured symbol and precision apply.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Currency Formatting
// =============================================================================

/// How amounts are rendered as text for the ordering screen.
///
/// Built from the app configuration; the core never stores formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount.
    pub symbol: String,

    /// Minor-unit digits shown (0, 1 or 2 for a cent-based currency).
    pub decimals: u8,

    /// Separator inserted every three major-unit digits.
    pub thousands_separator: Option<char>,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "$".to_string(),
            decimals: 2,
            thousands_separator: Some(','),
        }
    }
}

/// Formats an amount for display.
///
/// When fewer than two decimals are configured the amount is rounded half up
/// to the shown precision.
///
/// ```rust
/// use tray_core::money::{format_currency, CurrencyFormat, Money};
///
/// let text = format_currency(Money::from_cents(123456), &CurrencyFormat::default());
/// assert_eq!(text, "$1,234.56");
/// ```
pub fn format_currency(amount: Money, format: &CurrencyFormat) -> String {
    let decimals = format.decimals.min(2) as u32;
    let divisor = 10_i64.pow(2 - decimals);
    let magnitude = amount.cents().unsigned_abs() as i64;
    let scaled = (magnitude + divisor / 2) / divisor;

    let unit = 10_i64.pow(decimals);
    let major = (scaled / unit).to_string();
    let minor = scaled % unit;

    let major = match format.thousands_separator {
        Some(sep) => group_thousands(&major, sep),
        None => major,
    };

    let sign = if amount.is_negative() && scaled != 0 {
        "-"
    } else {
        ""
    };

    if decimals == 0 {
        format!("{}{}{}", sign, format.symbol, major)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            format.symbol,
            major,
            minor,
            width = decimals as usize
        )
    }
}

fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
