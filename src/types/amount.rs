//! Monetary display helpers
//!
//! Balances are stored as exact `Decimal` values but shown to the user the way
//! the front desk has always printed them: trailing zeros trimmed and at least
//! one fractional digit (`150.0`, `100.5`, `0.0`).

use rust_decimal::Decimal;
use std::fmt;

/// A dollar amount formatted for the console
///
/// Wraps a `Decimal` so it can be embedded in messages and error variants
/// without losing precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dollars(pub Decimal);

impl Dollars {
    /// The wrapped amount
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Dollars {
    fn from(amount: Decimal) -> Self {
        Dollars(amount)
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // normalize() also turns -0 into 0
        let value = self.0.normalize();
        if value.scale() == 0 {
            write!(f, "{}.0", value)
        } else {
            write!(f, "{}", value)
        }
    }
}
