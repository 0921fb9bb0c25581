//! Proportional vacation-pay calculation functionality.
//!
//! Proportional vacation ("férias proporcionais") accrues one twelfth of the
//! salary for each qualifying month since the last vacation anniversary.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::error::EngineResult;

use super::money::{round_currency, validate_salary};
use super::month_count::months_by_fifteen_day_rule;

/// The result of the proportional vacation-pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationPayResult {
    /// Qualifying months of the current acquisition period.
    pub months_counted: u32,
    /// The proportional amount, `(salary / 12) * months`.
    pub amount: Decimal,
}

/// Calculates the proportional vacation pay for a termination.
///
/// Counts 15-day-rule months over the entire employment span and reduces the
/// count modulo 12. The modulo approximates "months since the last vacation
/// anniversary" without tracking the actual acquisition-period start; fully
/// accrued periods are handled separately through the expired-vacation flag.
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_vacation_pay;
/// use rescisao_engine::config::SettlementRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let result = calculate_vacation_pay(
///     Decimal::new(300000, 2),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
///     &rules,
/// )
/// .unwrap();
/// assert_eq!(result.months_counted, 6);
/// assert_eq!(result.amount, Decimal::new(150000, 2));
/// ```
pub fn calculate_vacation_pay(
    salary: Decimal,
    hire_date: NaiveDate,
    termination_date: NaiveDate,
    rules: &SettlementRules,
) -> EngineResult<VacationPayResult> {
    validate_salary(salary)?;

    let total_months =
        months_by_fifteen_day_rule(hire_date, termination_date, rules.fifteen_day_threshold);
    let months_counted = total_months % rules.months_per_year;

    let amount = round_currency(
        salary / Decimal::from(rules.months_per_year) * Decimal::from(months_counted),
    );

    Ok(VacationPayResult {
        months_counted,
        amount,
    })
}
