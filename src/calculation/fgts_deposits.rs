//! FGTS deposit estimation functionality.
//!
//! The employer deposits 8% of the salary into the employee's FGTS account
//! every month. The settlement estimates the accumulated balance from the
//! service time, plus the deposits owed on the settlement components
//! themselves.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::error::EngineResult;

use super::money::{round_currency, validate_salary};
use super::month_count::whole_months_between;

/// Estimates the FGTS deposits accumulated over the employment span.
///
/// `salary * rate * wholeMonths`, with the whole-month difference floored at
/// zero. This approximates the monthly deposits on base salary alone;
/// deposits owed on 13th salary, vacation, and notice pay are computed
/// separately by [`calculate_fgts_additional_deposits`].
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_fgts_base_deposits;
/// use rescisao_engine::config::SettlementRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let deposits = calculate_fgts_base_deposits(
///     Decimal::new(300000, 2),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
///     &rules,
/// )
/// .unwrap();
/// assert_eq!(deposits, Decimal::new(120000, 2));
/// ```
pub fn calculate_fgts_base_deposits(
    salary: Decimal,
    hire_date: NaiveDate,
    termination_date: NaiveDate,
    rules: &SettlementRules,
) -> EngineResult<Decimal> {
    validate_salary(salary)?;

    let months = whole_months_between(hire_date, termination_date).max(0);
    Ok(round_currency(salary * rules.fgts_rate * Decimal::from(months)))
}

/// Calculates the FGTS deposits owed on the settlement components.
///
/// Applies the deposit rate to the sum of the remuneration-like line items
/// (13th salary, proportional vacation, expired vacation, and positive-only
/// notice pay, as assembled by the orchestrator).
pub fn calculate_fgts_additional_deposits(
    remuneration_base: Decimal,
    rules: &SettlementRules,
) -> Decimal {
    round_currency(remuneration_base * rules.fgts_rate)
}
