use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Represents a monetary value in the catalog currency.
///
/// This is a wrapper around `rust_decimal::Decimal` so that prices, discounts
/// and totals are exact decimals rather than binary floats. Arithmetic
/// saturates at the `Decimal` bounds instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Price of `quantity` units at this unit price.
    pub fn times(self, quantity: usize) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Clamps negative amounts to zero.
    pub fn floor_at_zero(self) -> Self {
        self.max(Self::ZERO)
    }

    /// Rounds to the nearest cent, halves away from zero (109.495 -> 109.50).
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Price {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_arithmetic() {
        let p1 = Price::new(dec!(10.50));
        let p2 = Price::new(dec!(0.25));
        assert_eq!(p1 + p2, Price::new(dec!(10.75)));
        assert_eq!(p1 - p2, Price::new(dec!(10.25)));
        assert_eq!(p1.times(3), Price::new(dec!(31.50)));
    }

    #[test]
    fn test_round_half_up_on_hundredths() {
        assert_eq!(
            Price::new(dec!(109.495)).round_to_cents(),
            Price::new(dec!(109.50))
        );
        assert_eq!(
            Price::new(dec!(109.494)).round_to_cents(),
            Price::new(dec!(109.49))
        );
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(Price::new(dec!(-3.0)).floor_at_zero(), Price::ZERO);
        assert_eq!(Price::new(dec!(3.0)).floor_at_zero(), Price::new(dec!(3.0)));
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Price::new(dec!(249)).to_string(), "$249.00");
        assert_eq!(Price::new(dec!(2718.95)).to_string(), "$2718.95");
    }

    #[test]
    fn test_arithmetic_saturates_at_bounds() {
        let max = Price::new(Decimal::MAX);
        let min = Price::new(Decimal::MIN);
        assert_eq!(max + max, max);
        assert_eq!(max - min, max);
        assert_eq!(min - max, min);
        assert_eq!(max.times(2), max);

        let mut acc = max;
        acc += Price::new(dec!(1));
        assert_eq!(acc, max);
    }

    #[test]
    fn test_sum() {
        let total: Price = [dec!(1.10), dec!(2.20)].into_iter().map(Price::new).sum();
        assert_eq!(total, Price::new(dec!(3.30)));
    }
}
