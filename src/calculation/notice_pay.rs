//! Notice-pay calculation functionality.
//!
//! The notice period ("aviso prévio") is 30 days plus 3 days per completed
//! year of service, capped at 90 days total. Whether it turns into a payment,
//! a deduction, or nothing depends on the termination reason and on how the
//! notice was handled.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::error::EngineResult;
use crate::models::{NoticeType, TerminationReason};

use super::money::{round_currency, validate_salary};
use super::month_count::whole_months_between;

/// The result of the notice-pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticePayResult {
    /// The length of the notice period in days, after the cap.
    pub notice_days: u32,
    /// The monetary value. Positive when the employer owes the notice,
    /// negative when the employee owes it, zero otherwise.
    pub amount: Decimal,
}

/// Calculates the notice pay for a termination.
///
/// The notice period is `base + 3 * completedYears` days, where completed
/// years come from the whole-month difference divided by 12 and floored, and
/// the total is capped at 90 days. Its monetary value is
/// `(salary / 30) * days`.
///
/// Sign convention:
/// - dismissal without cause with notice paid in lieu → positive payment;
/// - resignation with notice not given → the same magnitude, negated, as a
///   deduction the employee owes for failing to serve the notice;
/// - worked notice, or any other reason/notice combination → zero.
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_notice_pay;
/// use rescisao_engine::config::SettlementRules;
/// use rescisao_engine::models::{NoticeType, TerminationReason};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let result = calculate_notice_pay(
///     Decimal::new(300000, 2),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
///     TerminationReason::DismissalWithoutCause,
///     NoticeType::PaidInLieu,
///     &rules,
/// )
/// .unwrap();
/// assert_eq!(result.notice_days, 30);
/// assert_eq!(result.amount, Decimal::new(300000, 2));
/// ```
pub fn calculate_notice_pay(
    salary: Decimal,
    hire_date: NaiveDate,
    termination_date: NaiveDate,
    reason: TerminationReason,
    notice_type: NoticeType,
    rules: &SettlementRules,
) -> EngineResult<NoticePayResult> {
    validate_salary(salary)?;

    let service_months = whole_months_between(hire_date, termination_date).max(0) as u32;
    let completed_years = service_months / rules.months_per_year;
    let notice_days = (rules.notice_base_days + completed_years * rules.notice_days_per_year)
        .min(rules.notice_days_cap);

    let value = round_currency(
        salary / Decimal::from(rules.month_divisor) * Decimal::from(notice_days),
    );

    let amount = match (reason, notice_type) {
        (TerminationReason::DismissalWithoutCause, NoticeType::PaidInLieu) => value,
        (TerminationReason::Resignation, NoticeType::NotGiven) => -value,
        _ => Decimal::ZERO,
    };

    Ok(NoticePayResult {
        notice_days,
        amount,
    })
}
