//! # Money Module
//!
//! Provides the `Money` type for menu prices and order totals.
//!
//! ## Integer Arithmetic
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every menu price is a whole number of yuan (¥68, ¥48, ...).            │
//! │                                                                         │
//! │  Cart math is therefore pure integer arithmetic:                        │
//! │    subtotal = Σ unit_price × quantity                                   │
//! │    total    = subtotal + service fee                                    │
//! │                                                                         │
//! │  No floats anywhere, so ¥68 × 2 + ¥48 is always exactly ¥184.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use weidao_core::money::Money;
//!
//! let price = Money::from_units(68);
//! let line = price.multiply_quantity(2);
//! let subtotal = line + Money::from_units(48);
//! assert_eq!(subtotal.units(), 184);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays well defined; validation keeps
///   catalog prices non-negative
/// - **Single field tuple struct**: zero-cost wrapper, serializes as a number
/// - **Saturating arithmetic**: results clamp at the `i64` bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use weidao_core::money::Money;
    ///
    /// let price = Money::from_units(88);
    /// assert_eq!(price.units(), 88);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
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

    /// Multiplies a unit price by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use weidao_core::money::Money;
    ///
    /// let unit_price = Money::from_units(36);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 108);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain amount with a yuan sign, for logs and debugging.
///
/// ## Note
/// The kiosk renders prices through its configured currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}¥{}", sign, self.0.unsigned_abs())
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a line quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(68);
        assert_eq!(money.units(), 68);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(189)), "¥189");
        assert_eq!(format!("{}", Money::zero()), "¥0");
        assert_eq!(format!("{}", Money::from_units(-5)), "-¥5");
        assert_eq!(
            format!("{}", Money::from_units(i64::MIN)),
            "-¥9223372036854775808"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(68);
        let b = Money::from_units(48);

        assert_eq!((a + b).units(), 116);
        assert_eq!((a - b).units(), 20);
        assert_eq!((a * 2).units(), 136);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.units(), 116);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_units(68), Money::from_units(68), Money::from_units(48)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.units(), 184);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_units(i64::MAX / 2 + 1);

        assert_eq!(big.multiply_quantity(2).units(), i64::MAX);
        assert_eq!((Money::from_units(i64::MAX) + Money::from_units(5)).units(), i64::MAX);
        assert_eq!((Money::from_units(i64::MIN) - Money::from_units(1)).units(), i64::MIN);

        let mut acc = Money::from_units(i64::MAX - 1);
        acc += Money::from_units(10);
        assert_eq!(acc.units(), i64::MAX);

        let total: Money = [big, big, big].iter().sum();
        assert_eq!(total.units(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_units(58)).unwrap();
        assert_eq!(json, "58");
    }
}
