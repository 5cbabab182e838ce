//! # Money Module
//!
//! Provides the `Money` type for pizza prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (kopiykas, 1/100 UAH)               │
//! │    Catalog prices are whole today, but a 7.50 extra still sums          │
//! │    exactly: 750 + 5000 = 5750 → "57.50"                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::Money;
//!
//! let size = Money::from_major(50);
//! let extra = Money::from_minor(750); // 7.50
//!
//! let total = size + extra;
//! assert_eq!(total.to_string(), "57.50");
//! assert_eq!((size + size).to_string(), "100");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Minor units per major unit (kopiykas per hryvnia).
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction is closed, price deltas can be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **`const fn` constructors**: catalog constants are built at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let price = Money::from_major(75);
    /// assert_eq!(price.minor(), 7500);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Creates a Money value from minor units (kopiykas).
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(11450).major(), 114);
    /// assert_eq!(Money::from_minor(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks if the value has no minor-unit remainder.
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % MINOR_PER_MAJOR == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Whole amounts print as a bare integer (`114`), anything else with two
/// decimals (`114.50`). No currency symbol; callers append their own suffix.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        if self.is_whole() {
            write!(f, "{}{}", sign, self.major().abs())
        } else {
            write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
        }
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
