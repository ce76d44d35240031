//! # Price Module
//!
//! Provides the `Price` type for handling catalog prices safely.
//!
//! ## Why Integer Prices?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    Every price is an i64 count of the smallest currency unit.          │
//! │    Totals are exact, comparisons are exact.                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Validated Construction?
//! A catalog price is never negative. `Price::from_cents` rejects negative
//! input at the boundary, so every `Price` in the system is known-valid and
//! menu total calculations can compose without re-checking.
//!
//! ## Usage
//! ```rust
//! use dinepos_core::price::Price;
//!
//! // Create from minor units (the only way in)
//! let price = Price::from_cents(16000).unwrap();
//!
//! // Negative prices are rejected at construction
//! assert!(Price::from_cents(-1).is_err());
//!
//! // Line totals: unit price × quantity
//! let line = price.multiply_quantity(2);
//! assert_eq!(line.cents(), 32000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative monetary amount in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 storage**: Plenty of headroom for any realistic catalog price
/// - **Validated constructor**: A `Price` can never hold a negative value,
///   so the menu pricing invariant only has to compare, never re-validate
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Price Flows
/// ```text
/// Product.price_cents ──► MenuProduct line total ──► Menu total
///                                                        │
///                    Menu.price_cents ── must be ≤ ──────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Price(i64);

impl Price {
    /// Creates a Price from minor currency units.
    ///
    /// Fails with [`ValidationError::Negative`] when `cents < 0`. This is
    /// the single gate through which every price in the system passes.
    ///
    /// ## Example
    /// ```rust
    /// use dinepos_core::price::Price;
    ///
    /// let price = Price::from_cents(16000).unwrap();
    /// assert_eq!(price.cents(), 16000);
    ///
    /// assert!(Price::from_cents(-100).is_err());
    /// ```
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        if cents < 0 {
            return Err(ValidationError::Negative {
                field: "price".to_string(),
                value: cents,
            });
        }
        Ok(Price(cents))
    }

    /// Returns the value in minor currency units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the zero price.
    ///
    /// ## Example
    /// ```rust
    /// use dinepos_core::price::Price;
    ///
    /// let zero = Price::zero();
    /// assert_eq!(zero.cents(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies this price by a quantity, producing a line total.
    ///
    /// Quantities are validated non-negative before they reach this point
    /// (see [`crate::validation::validate_quantity`]), so the result stays
    /// in the non-negative domain. Saturates at `i64::MAX` rather than
    /// overflowing, which keeps extreme catalog prices comparable instead
    /// of panicking.
    ///
    /// ## Example
    /// ```rust
    /// use dinepos_core::price::Price;
    ///
    /// let unit = Price::from_cents(16000).unwrap();
    /// assert_eq!(unit.multiply_quantity(2).cents(), 32000);
    /// assert_eq!(unit.multiply_quantity(0).cents(), 0);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Price(self.0.saturating_mul(qty))
    }

    /// Sums unit-price × quantity pairs into a single total.
    ///
    /// This is the "menu total" from the pricing invariant: the sum of
    /// (product price × quantity) over a menu's product lines, evaluated
    /// against whatever product-price snapshot the caller resolved.
    ///
    /// ## Example
    /// ```rust
    /// use dinepos_core::price::Price;
    ///
    /// let fried = Price::from_cents(16000).unwrap();
    /// let sauce = Price::from_cents(2000).unwrap();
    ///
    /// let total = Price::total_of([(fried, 1), (sauce, 2)]);
    /// assert_eq!(total.cents(), 20000);
    /// ```
    pub fn total_of(lines: impl IntoIterator<Item = (Price, i64)>) -> Price {
        lines
            .into_iter()
            .fold(Price::zero(), |acc, (unit, qty)| acc + unit.multiply_quantity(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the raw minor-unit amount.
///
/// ## Note
/// This is for debugging and logs. Currency formatting is a frontend
/// concern and depends on locale.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default price is zero.
impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

/// Addition of two Price values (total accumulation). Saturates at
/// `i64::MAX`.
impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=). Saturates at `i64::MAX`.
impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_accepts_non_negative() {
        assert_eq!(Price::from_cents(0).unwrap().cents(), 0);
        assert_eq!(Price::from_cents(16000).unwrap().cents(), 16000);
    }

    #[test]
    fn test_from_cents_rejects_negative() {
        let err = Price::from_cents(-1).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Negative { value: -1, .. }
        ));
    }

    #[test]
    fn test_ordering() {
        let low = Price::from_cents(10000).unwrap();
        let high = Price::from_cents(16000).unwrap();
        assert!(low < high);
        assert!(high > low);
        assert!(low <= Price::from_cents(10000).unwrap());
    }

    #[test]
    fn test_arithmetic() {
        let a = Price::from_cents(1000).unwrap();
        let b = Price::from_cents(500).unwrap();

        assert_eq!((a + b).cents(), 1500);

        let mut acc = Price::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit = Price::from_cents(299).unwrap();
        assert_eq!(unit.multiply_quantity(3).cents(), 897);
        // Zero quantity lines contribute nothing to the total
        assert_eq!(unit.multiply_quantity(0).cents(), 0);
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let max = Price::from_cents(i64::MAX).unwrap();

        // An extreme but valid catalog price must not abort the request
        assert_eq!(max.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((max + Price::from_cents(1).unwrap()).cents(), i64::MAX);

        let mut acc = max;
        acc += max;
        assert_eq!(acc.cents(), i64::MAX);

        // Totals over several extreme lines stay pinned at the ceiling
        let total = Price::total_of([(max, 2), (max, 999)]);
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_total_of_lines() {
        let fried = Price::from_cents(16000).unwrap();
        let sauce = Price::from_cents(2000).unwrap();

        let total = Price::total_of([(fried, 1), (sauce, 2)]);
        assert_eq!(total.cents(), 20000);

        assert_eq!(Price::total_of([]).cents(), 0);
    }

    #[test]
    fn test_display_shows_minor_units() {
        assert_eq!(format!("{}", Price::from_cents(16000).unwrap()), "16000");
        assert_eq!(format!("{}", Price::zero()), "0");
    }
}
