//! Fixed-point currency amounts.
//!
//! All monetary arithmetic in the storefront core runs over integer minor
//! units (cents) in a single reference currency. Repeated add/update cycles
//! therefore never accumulate binary floating-point drift.

use core::iter::Sum;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A non-negative monetary amount in minor units (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount from minor units (cents).
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Amount from whole currency units (e.g. `Money::from_major(45)` is $45.00).
    pub const fn from_major(units: u64) -> Self {
        Self(units * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Saturating addition. Amounts here are bounded by catalog prices times
    /// small quantities, so saturation is a non-event in practice.
    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Saturating multiplication by a quantity.
    pub const fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(quantity as u64))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    /// Renders as `$12.34` (two decimal places, always).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl ValueObject for Money {}
