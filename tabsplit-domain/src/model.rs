use rust_decimal::{Decimal, RoundingStrategy};
use std::{
    fmt,
    iter::Sum,
    str::FromStr,
    ops::{Add, AddAssign, Div, Neg, Sub, SubAssign},
};

/// Participants are identified by their display name.
pub type ParticipantId<'a> = &'a str;

const CENT_SCALE: u32 = 2;

/// Fixed-point currency amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `Money::new(1234, 2)` is 12.34.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub const fn from_cents(cents: u32) -> Self {
        Self(Decimal::from_parts(cents, 0, 0, false, CENT_SCALE))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Rounds to whole cents, half away from zero.
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        write!(f, "{rounded:.2}")
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Div<usize> for Money {
    type Output = Self;

    fn div(self, rhs: usize) -> Self::Output {
        Self(self.0 / Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'m> Sum<&'m Money> for Money {
    fn sum<I: Iterator<Item = &'m Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A recorded expense. The description is display-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expense<'a> {
    pub description: &'a str,
    pub amount: Money,
    pub payer: ParticipantId<'a>,
}

impl<'a> Expense<'a> {
    pub fn new(description: &'a str, amount: Money, payer: ParticipantId<'a>) -> Self {
        Self {
            description,
            amount,
            payer,
        }
    }
}

/// A single payment instruction from a debtor to a creditor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transaction<'a> {
    pub from: ParticipantId<'a>,
    pub to: ParticipantId<'a>,
    pub amount: Money,
}

/// Net position of one participant: positive is owed money, negative owes money.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantBalance<'a> {
    pub id: ParticipantId<'a>,
    pub paid: Money,
    pub balance: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceSheet<'a> {
    pub total: Money,
    pub share: Money,
    /// In participant-list order.
    pub balances: Vec<ParticipantBalance<'a>>,
}

impl<'a> BalanceSheet<'a> {
    pub fn empty() -> Self {
        Self {
            total: Money::ZERO,
            share: Money::ZERO,
            balances: Vec::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ParticipantBalance<'a>> {
        self.balances.iter().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::half_up(Money::new(12345, 3), Money::new(1235, 2))]
    #[case::half_down_negative(Money::new(-12345, 3), Money::new(-1235, 2))]
    #[case::below_half(Money::new(33333, 3), Money::new(3333, 2))]
    #[case::already_cents(Money::new(5000, 2), Money::from_i64(50))]
    fn round_to_cents_cases(#[case] input: Money, #[case] expected: Money) {
        assert_eq!(input.round_to_cents(), expected);
    }

    #[rstest]
    #[case::whole(Money::from_i64(50), "50.00")]
    #[case::fraction(Money::new(3333333, 5), "33.33")]
    #[case::negative(Money::new(-125, 1), "-12.50")]
    fn display_uses_two_decimals(#[case] input: Money, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[test]
    fn division_by_participant_count_keeps_precision() {
        let share = Money::from_i64(100) / 3;
        let total: Money = [share, share, share].iter().sum();
        assert!((total - Money::from_i64(100)).abs() < Money::new(1, 20));
    }

    #[rstest]
    #[case::integer("42", Money::from_i64(42))]
    #[case::cents(" 12.50 ", Money::new(1250, 2))]
    #[case::negative("-3.1", Money::new(-31, 1))]
    fn parses_amounts(#[case] input: &str, #[case] expected: Money) {
        assert_eq!(input.parse::<Money>().ok(), Some(expected));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        assert!("doce".parse::<Money>().is_err());
    }
}
