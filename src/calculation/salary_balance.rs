//! Salary-balance calculation functionality.
//!
//! The salary balance ("saldo de salário") pays the days worked in the
//! termination month, under the 30-day month convention.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::error::EngineResult;

use super::money::{round_currency, validate_salary};

/// Calculates the salary owed for days worked in the termination month.
///
/// Uses the regime's month divisor (30 days under CLT) regardless of the
/// actual month length: `(salary / 30) * dayOfMonth(termination)`. The value
/// therefore equals the full salary when the termination falls on day 30.
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_salary_balance;
/// use rescisao_engine::config::SettlementRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let termination = NaiveDate::from_ymd_opt(2026, 9, 18).unwrap();
/// let balance = calculate_salary_balance(Decimal::new(200000, 2), termination, &rules).unwrap();
/// assert_eq!(balance, Decimal::new(120000, 2));
/// ```
pub fn calculate_salary_balance(
    salary: Decimal,
    termination_date: NaiveDate,
    rules: &SettlementRules,
) -> EngineResult<Decimal> {
    validate_salary(salary)?;

    let daily_rate = salary / Decimal::from(rules.month_divisor);
    let days_worked = Decimal::from(termination_date.day());
    Ok(round_currency(daily_rate * days_worked))
}
