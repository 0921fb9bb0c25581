//! Expired-vacation calculation functionality.
//!
//! An expired vacation ("férias vencidas") is a fully accrued but untaken
//! vacation period, owed in full plus its one-third bonus.

use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::error::EngineResult;

use super::money::{round_currency, validate_salary};

/// Calculates the pay for an expired vacation period.
///
/// Binary by design: when the flag is set the employee is owed one full
/// salary plus its one-third bonus; otherwise nothing. There is no partial
/// accrual logic here, that is the proportional calculator's job.
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_expired_vacation;
/// use rescisao_engine::config::SettlementRules;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let pay = calculate_expired_vacation(Decimal::new(150000, 2), true, &rules).unwrap();
/// assert_eq!(pay, Decimal::new(200000, 2));
/// ```
pub fn calculate_expired_vacation(
    salary: Decimal,
    has_expired_vacation: bool,
    rules: &SettlementRules,
) -> EngineResult<Decimal> {
    validate_salary(salary)?;

    if !has_expired_vacation {
        return Ok(Decimal::ZERO);
    }

    let bonus = salary / Decimal::from(rules.vacation_bonus_divisor);
    Ok(round_currency(salary + bonus))
}
