//! Request types for the Severance Settlement Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Dates travel as ISO-8601 `YYYY-MM-DD` strings; unknown reason or
//! notice values and malformed dates are rejected during deserialization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NoticeType, TerminationReason, TerminationRequest};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The monthly base salary.
    pub monthly_salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date the contract ended.
    pub termination_date: NaiveDate,
    /// The legal reason for the termination.
    pub reason: TerminationReason,
    /// How the notice period was handled.
    pub notice_type: NoticeType,
    /// Whether a fully accrued but untaken vacation period exists.
    #[serde(default)]
    pub has_expired_vacation: bool,
    /// Unexcused absence days; accepted but not consumed by any calculator.
    #[serde(default)]
    pub unexcused_absence_days: Option<u32>,
}

impl From<SettlementRequest> for TerminationRequest {
    fn from(req: SettlementRequest) -> Self {
        TerminationRequest {
            monthly_salary: req.monthly_salary,
            hire_date: req.hire_date,
            termination_date: req.termination_date,
            reason: req.reason,
            notice_type: req.notice_type,
            has_expired_vacation: req.has_expired_vacation,
            unexcused_absence_days: req.unexcused_absence_days,
        }
    }
}
