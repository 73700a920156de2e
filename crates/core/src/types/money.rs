//! Money amounts as VTEX reports them.
//!
//! VTEX sends every amount as an integer count of minor units (cents of the
//! store currency). That integer is the canonical value here; conversion to
//! major units goes through [`Decimal`] so `4550000` becomes exactly `45500.00`
//! with no binary floating point involved.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of decimal places between minor and major units.
const MINOR_UNIT_SCALE: u32 = 2;

/// An amount in minor currency units (e.g. cents).
///
/// ```
/// use rust_decimal::Decimal;
/// use vtex_orders_core::MinorUnits;
///
/// let total = MinorUnits::new(4_550_000);
/// assert_eq!(total.to_major(), Decimal::from(45_500));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnits(i64);

impl MinorUnits {
    /// Wrap a raw minor-unit amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Raw minor-unit amount.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Amount in major units (minor / 100), exact.
    #[must_use]
    pub fn to_major(self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_SCALE)
    }
}

impl From<i64> for MinorUnits {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}
