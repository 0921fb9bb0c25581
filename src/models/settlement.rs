//! Settlement result models for the Severance Settlement Engine.
//!
//! This module contains the [`SettlementResult`] type and its associated
//! structures that capture every line item computed during a severance
//! calculation, including the two FGTS audit items that have no named field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies one computed line item of a severance settlement.
///
/// The variants follow the fixed order of the calculation pipeline.
///
/// # Example
///
/// ```
/// use rescisao_engine::models::SettlementComponent;
///
/// let component = SettlementComponent::SalaryBalance;
/// assert_eq!(format!("{:?}", component), "SalaryBalance");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementComponent {
    /// Salary owed for days worked in the termination month.
    SalaryBalance,
    /// Notice pay (positive) or notice deduction owed by the employee (negative).
    NoticePay,
    /// Proportional 13th salary for the termination year.
    ThirteenthSalary,
    /// Proportional vacation pay.
    VacationPay,
    /// Constitutional one-third bonus on the proportional vacation pay.
    VacationBonus,
    /// Expired vacation owed in full plus its one-third bonus.
    ExpiredVacation,
    /// FGTS deposits estimated over the base salary alone (audit only).
    FgtsBaseDeposits,
    /// FGTS penalty computed on the base deposits alone (audit only, superseded).
    FgtsPenaltyOnBase,
    /// FGTS deposits owed on the settlement components themselves.
    FgtsAdditionalDeposits,
    /// Total FGTS deposits (base plus additional).
    FgtsTotalDeposits,
    /// FGTS penalty on the total deposits, the value actually owed.
    FgtsPenalty,
    /// The gross settlement total.
    GrossTotal,
}

impl std::fmt::Display for SettlementComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SettlementComponent::SalaryBalance => "salary_balance",
            SettlementComponent::NoticePay => "notice_pay",
            SettlementComponent::ThirteenthSalary => "thirteenth_salary",
            SettlementComponent::VacationPay => "vacation_pay",
            SettlementComponent::VacationBonus => "vacation_bonus",
            SettlementComponent::ExpiredVacation => "expired_vacation",
            SettlementComponent::FgtsBaseDeposits => "fgts_base_deposits",
            SettlementComponent::FgtsPenaltyOnBase => "fgts_penalty_on_base",
            SettlementComponent::FgtsAdditionalDeposits => "fgts_additional_deposits",
            SettlementComponent::FgtsTotalDeposits => "fgts_total_deposits",
            SettlementComponent::FgtsPenalty => "fgts_penalty",
            SettlementComponent::GrossTotal => "gross_total",
        };
        write!(f, "{}", label)
    }
}

/// A single line item in the settlement breakdown.
///
/// The breakdown is recorded in computation order, so it doubles as the
/// audit log of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    /// Which component this line records.
    pub component: SettlementComponent,
    /// The monetary value, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// The complete result of a severance settlement calculation.
///
/// Nine components are exposed as named fields; the `breakdown` additionally
/// carries the three intermediate FGTS aggregates retained for audit.
/// FGTS deposits appear in the result but are not part of `gross_total`:
/// deposits are paid into the employee's fund account, only the penalty on
/// them is part of the take-home settlement.
///
/// # Example
///
/// ```
/// use rescisao_engine::models::{SettlementComponent, SettlementResult};
/// use rust_decimal::Decimal;
///
/// let result = SettlementResult {
///     salary_balance: Decimal::new(120000, 2),
///     notice_pay: Decimal::ZERO,
///     thirteenth_salary: Decimal::ZERO,
///     vacation_pay: Decimal::ZERO,
///     vacation_bonus: Decimal::ZERO,
///     expired_vacation: Decimal::ZERO,
///     fgts_total_deposits: Decimal::ZERO,
///     fgts_penalty: Decimal::ZERO,
///     gross_total: Decimal::new(120000, 2),
///     breakdown: vec![],
/// };
/// assert_eq!(result.amount(SettlementComponent::SalaryBalance), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Salary owed for days worked in the termination month.
    pub salary_balance: Decimal,
    /// Notice pay; negative when the employee owes the notice period.
    pub notice_pay: Decimal,
    /// Proportional 13th salary for the termination year.
    pub thirteenth_salary: Decimal,
    /// Proportional vacation pay.
    pub vacation_pay: Decimal,
    /// One-third bonus on the proportional vacation pay.
    pub vacation_bonus: Decimal,
    /// Expired vacation pay including its one-third bonus.
    pub expired_vacation: Decimal,
    /// Total FGTS deposits (informational, not part of the gross total).
    pub fgts_total_deposits: Decimal,
    /// FGTS penalty owed on dismissal without cause.
    pub fgts_penalty: Decimal,
    /// The gross settlement total.
    pub gross_total: Decimal,
    /// Every computed line item, in computation order.
    pub breakdown: Vec<SettlementLine>,
}

impl SettlementResult {
    /// Looks up a component's value in the breakdown.
    ///
    /// Returns `None` if the component was not recorded.
    pub fn amount(&self, component: SettlementComponent) -> Option<Decimal> {
        self.breakdown
            .iter()
            .find(|line| line.component == component)
            .map(|line| line.amount)
    }
}
