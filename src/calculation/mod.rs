//! Calculation logic for the Severance Settlement Engine.
//!
//! This module contains the calendar-arithmetic primitives (whole-month
//! difference, the 15-day proportionality rule, anniversary month counting),
//! the shared rounding and salary-guard helpers, the eight component
//! calculators (salary balance, notice pay, 13th salary, proportional
//! vacation, one-third bonus, expired vacation, FGTS deposits, FGTS penalty),
//! and the orchestrator that composes them into one itemized settlement.

mod expired_vacation;
mod fgts_deposits;
mod fgts_penalty;
mod money;
mod month_count;
mod notice_pay;
mod salary_balance;
mod settlement;
mod thirteenth_salary;
mod vacation_bonus;
mod vacation_pay;

pub use expired_vacation::calculate_expired_vacation;
pub use fgts_deposits::{calculate_fgts_additional_deposits, calculate_fgts_base_deposits};
pub use fgts_penalty::calculate_fgts_penalty;
pub use money::{round_currency, validate_salary};
pub use month_count::{
    anniversary_months_between, months_by_fifteen_day_rule, whole_months_between,
};
pub use notice_pay::{NoticePayResult, calculate_notice_pay};
pub use salary_balance::calculate_salary_balance;
pub use settlement::calculate_settlement;
pub use thirteenth_salary::{ThirteenthSalaryResult, calculate_thirteenth_salary};
pub use vacation_bonus::calculate_vacation_bonus;
pub use vacation_pay::{VacationPayResult, calculate_vacation_pay};
