//! Settlement orchestration.
//!
//! This module composes the component calculators into the full severance
//! settlement: it validates the request, runs every calculator in the fixed
//! pipeline order, derives the FGTS aggregates, and assembles the itemized
//! result with its ordered breakdown.

use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{SettlementComponent, SettlementLine, SettlementResult, TerminationRequest};

use super::expired_vacation::calculate_expired_vacation;
use super::fgts_deposits::{calculate_fgts_additional_deposits, calculate_fgts_base_deposits};
use super::fgts_penalty::calculate_fgts_penalty;
use super::money::{round_currency, validate_salary};
use super::notice_pay::calculate_notice_pay;
use super::salary_balance::calculate_salary_balance;
use super::thirteenth_salary::calculate_thirteenth_salary;
use super::vacation_bonus::calculate_vacation_bonus;
use super::vacation_pay::calculate_vacation_pay;

/// Calculates the complete severance settlement for one termination.
///
/// Fails fast with an invalid-input error when the salary is not strictly
/// positive or the termination date precedes the hire date; no partial result
/// is ever produced. Otherwise runs the fixed pipeline, recording one
/// breakdown line per step in computation order:
///
/// salary balance → notice pay → 13th salary → vacation pay → one-third
/// bonus → expired vacation → FGTS base deposits → penalty-on-base (audit
/// only) → FGTS additional deposits → FGTS total deposits → FGTS penalty →
/// gross total.
///
/// The gross total sums the take-home components plus the final FGTS penalty;
/// the FGTS deposits themselves are reported but excluded, since they are
/// paid into the employee's fund account rather than handed over directly.
/// Every line is rounded to 2 decimal places as it is computed, so
/// intermediate roundings compound the way conventional line-item accounting
/// does.
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_settlement;
/// use rescisao_engine::config::SettlementRules;
/// use rescisao_engine::models::{NoticeType, TerminationReason, TerminationRequest};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = TerminationRequest {
///     monthly_salary: Decimal::new(300000, 2),
///     hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
///     reason: TerminationReason::DismissalWithoutCause,
///     notice_type: NoticeType::PaidInLieu,
///     has_expired_vacation: false,
///     unexcused_absence_days: None,
/// };
///
/// let result = calculate_settlement(&request, &SettlementRules::default()).unwrap();
/// assert_eq!(result.notice_pay, Decimal::new(300000, 2));
/// assert_eq!(result.breakdown.len(), 12);
/// ```
pub fn calculate_settlement(
    request: &TerminationRequest,
    rules: &SettlementRules,
) -> EngineResult<SettlementResult> {
    validate_salary(request.monthly_salary)?;
    if request.termination_date < request.hire_date {
        return Err(EngineError::InvalidPeriod {
            hire_date: request.hire_date,
            termination_date: request.termination_date,
        });
    }

    let salary = request.monthly_salary;
    let mut breakdown: Vec<SettlementLine> = Vec::with_capacity(12);
    let mut record = |component: SettlementComponent, amount: Decimal| {
        breakdown.push(SettlementLine { component, amount });
    };

    let salary_balance = calculate_salary_balance(salary, request.termination_date, rules)?;
    record(SettlementComponent::SalaryBalance, salary_balance);

    let notice = calculate_notice_pay(
        salary,
        request.hire_date,
        request.termination_date,
        request.reason,
        request.notice_type,
        rules,
    )?;
    record(SettlementComponent::NoticePay, notice.amount);

    let thirteenth =
        calculate_thirteenth_salary(salary, request.hire_date, request.termination_date, rules)?;
    record(SettlementComponent::ThirteenthSalary, thirteenth.amount);

    let vacation =
        calculate_vacation_pay(salary, request.hire_date, request.termination_date, rules)?;
    record(SettlementComponent::VacationPay, vacation.amount);

    let vacation_bonus = calculate_vacation_bonus(vacation.amount, rules);
    record(SettlementComponent::VacationBonus, vacation_bonus);

    let expired_vacation =
        calculate_expired_vacation(salary, request.has_expired_vacation, rules)?;
    record(SettlementComponent::ExpiredVacation, expired_vacation);

    let base_deposits =
        calculate_fgts_base_deposits(salary, request.hire_date, request.termination_date, rules)?;
    record(SettlementComponent::FgtsBaseDeposits, base_deposits);

    // Recorded for audit; superseded by the penalty on the total deposits
    let penalty_on_base = calculate_fgts_penalty(base_deposits, request.reason, rules);
    record(SettlementComponent::FgtsPenaltyOnBase, penalty_on_base);

    // Deposits are owed on the settlement remuneration too; a negative notice
    // value is an employee debt and attracts no deposit
    let deposit_base = thirteenth.amount
        + vacation.amount
        + expired_vacation
        + notice.amount.max(Decimal::ZERO);
    let additional_deposits = calculate_fgts_additional_deposits(deposit_base, rules);
    record(SettlementComponent::FgtsAdditionalDeposits, additional_deposits);

    let total_deposits = round_currency(base_deposits + additional_deposits);
    record(SettlementComponent::FgtsTotalDeposits, total_deposits);

    let fgts_penalty = calculate_fgts_penalty(total_deposits, request.reason, rules);
    record(SettlementComponent::FgtsPenalty, fgts_penalty);

    let gross_total = round_currency(
        salary_balance
            + notice.amount
            + thirteenth.amount
            + vacation.amount
            + vacation_bonus
            + expired_vacation
            + fgts_penalty,
    );
    record(SettlementComponent::GrossTotal, gross_total);

    Ok(SettlementResult {
        salary_balance,
        notice_pay: notice.amount,
        thirteenth_salary: thirteenth.amount,
        vacation_pay: vacation.amount,
        vacation_bonus,
        expired_vacation,
        fgts_total_deposits: total_deposits,
        fgts_penalty,
        gross_total,
        breakdown,
    })
}
