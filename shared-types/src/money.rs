use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// An amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

/// Flat fee added to every court booking regardless of duration.
pub const SERVICE_FEE: Money = Money::from_cents(299);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn from_units(units: u64) -> Self {
        Money(units.saturating_mul(100))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn whole_units(self) -> u64 {
        self.0 / 100
    }

    pub const fn times(self, factor: u32) -> Self {
        Money(self.0.saturating_mul(factor as u64))
    }

    /// Formats with an arbitrary currency prefix, e.g. `"PKR "`.
    pub fn format_with(self, prefix: &str) -> String {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        if cents == 0 {
            format!("{}{}", prefix, group_thousands(units))
        } else {
            format!("{}{}.{:02}", prefix, group_thousands(units), cents)
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(Money::from_units(35).to_string(), "$35");
        assert_eq!(Money::from_cents(7299).to_string(), "$72.99");
        assert_eq!(SERVICE_FEE.to_string(), "$2.99");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn groups_thousands_with_custom_prefix() {
        assert_eq!(Money::from_units(3500).format_with("PKR "), "PKR 3,500");
        assert_eq!(Money::from_units(18000).format_with("PKR "), "PKR 18,000");
        assert_eq!(Money::from_units(1_234_567).format_with(""), "1,234,567");
        assert_eq!(Money::from_units(999).format_with(""), "999");
    }

    #[test]
    fn arithmetic_is_exact_in_minor_units() {
        let total = Money::from_units(35).times(2) + SERVICE_FEE;
        assert_eq!(total.cents(), 7299);
        assert_eq!(total.whole_units(), 72);

        let sum: Money = [Money::from_units(28), Money::from_units(35)].into_iter().sum();
        assert_eq!(sum, Money::from_units(63));
    }

    #[test]
    fn serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(299)).unwrap();
        assert_eq!(json, "299");
        let back: Money = serde_json::from_str("3500").unwrap();
        assert_eq!(back, Money::from_units(35));
    }
}
