//! Decimal money amounts and their two-decimal display form.

use crate::{CoreError, MenuItem, Result as CoreErrorResult};

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

const DISPLAY_SCALE: u32 = 2;

/// An amount of money in the store currency.
///
/// Arithmetic is exact; rounding only happens when the amount is displayed
/// or written into a navigation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Sum of item prices, in cart order. Saturates at [`Decimal::MAX`]
    /// instead of overflowing.
    pub fn total_of<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Self {
        Self(
            items
                .into_iter()
                .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.price)),
        )
    }

    /// Sum of item prices, or `None` if it does not fit in a [`Decimal`].
    pub fn checked_total_of<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Option<Self> {
        items
            .into_iter()
            .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.price))
            .map(Self)
    }

    /// Amount rounded half away from zero to two places.
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Two-decimal string, e.g. `"15.50"`.
    pub fn to_display_string(&self) -> String {
        format!("{:.2}", self.rounded())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

impl FromStr for Money {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Decimal::from_str(s.trim())
            .map(Money)
            .map_err(|_| CoreError::invalid_amount(s))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
