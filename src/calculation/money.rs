//! Shared monetary helpers for the settlement calculators.
//!
//! Every calculator validates its salary input through [`validate_salary`]
//! and rounds its output through [`round_currency`], so rounding happens at
//! the point each line item is computed, never deferred to a final pass.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds a monetary amount to 2 fractional digits, half away from zero.
///
/// # Example
///
/// ```
/// use rescisao_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("1.005").unwrap();
/// assert_eq!(round_currency(value), Decimal::from_str("1.01").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rejects a non-positive salary with [`EngineError::InvalidSalary`].
///
/// Shared guard for every calculator that takes a salary input.
pub fn validate_salary(salary: Decimal) -> EngineResult<()> {
    if salary <= Decimal::ZERO {
        return Err(EngineError::InvalidSalary { value: salary });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("1.004")), dec("1.00"));
        assert_eq!(round_currency(dec("2.675")), dec("2.68"));
    }

    #[test]
    fn test_round_currency_negative_half_away_from_zero() {
        assert_eq!(round_currency(dec("-1.005")), dec("-1.01"));
        assert_eq!(round_currency(dec("-1.004")), dec("-1.00"));
    }

    #[test]
    fn test_round_currency_preserves_two_place_values() {
        assert_eq!(round_currency(dec("1200.00")), dec("1200.00"));
        assert_eq!(round_currency(dec("0.01")), dec("0.01"));
    }

    #[test]
    fn test_round_currency_repeating_division() {
        // 1000 / 3 = 333.333...
        let value = dec("1000") / dec("3");
        assert_eq!(round_currency(value), dec("333.33"));
    }

    #[test]
    fn test_validate_salary_accepts_positive() {
        assert!(validate_salary(dec("0.01")).is_ok());
        assert!(validate_salary(dec("3000.00")).is_ok());
    }

    #[test]
    fn test_validate_salary_rejects_zero() {
        let err = validate_salary(Decimal::ZERO).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSalary { .. }));
    }

    #[test]
    fn test_validate_salary_rejects_negative() {
        let err = validate_salary(dec("-100.00")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSalary { .. }));
    }
}
