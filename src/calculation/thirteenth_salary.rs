//! Proportional 13th-salary calculation functionality.
//!
//! The 13th salary ("décimo terceiro") accrues one twelfth of the salary for
//! each month of the termination year that qualifies under the 15-day rule.
//! The count restarts every calendar year; earlier years are assumed settled.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::error::EngineResult;

use super::money::{round_currency, validate_salary};
use super::month_count::months_by_fifteen_day_rule;

/// The result of the proportional 13th-salary calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirteenthSalaryResult {
    /// Qualifying months of the termination year under the 15-day rule.
    pub months_counted: u32,
    /// The proportional amount, `(salary / 12) * months`.
    pub amount: Decimal,
}

/// Calculates the proportional 13th salary for the termination year.
///
/// Counts 15-day-rule months from the later of the termination year's
/// January 1st and the hire date, through the termination date.
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_thirteenth_salary;
/// use rescisao_engine::config::SettlementRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let result = calculate_thirteenth_salary(
///     Decimal::new(300000, 2),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
///     &rules,
/// )
/// .unwrap();
/// assert_eq!(result.months_counted, 6);
/// assert_eq!(result.amount, Decimal::new(150000, 2));
/// ```
pub fn calculate_thirteenth_salary(
    salary: Decimal,
    hire_date: NaiveDate,
    termination_date: NaiveDate,
    rules: &SettlementRules,
) -> EngineResult<ThirteenthSalaryResult> {
    validate_salary(salary)?;

    let year_start = NaiveDate::from_ymd_opt(termination_date.year(), 1, 1)
        .expect("January 1st exists in every year");
    let accrual_start = year_start.max(hire_date);
    let months_counted =
        months_by_fifteen_day_rule(accrual_start, termination_date, rules.fifteen_day_threshold);

    let amount = round_currency(
        salary / Decimal::from(rules.months_per_year) * Decimal::from(months_counted),
    );

    Ok(ThirteenthSalaryResult {
        months_counted,
        amount,
    })
}
