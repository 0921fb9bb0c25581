//! Termination request model and related types.
//!
//! This module defines the TerminationRequest struct together with the
//! TerminationReason and NoticeType enums describing how an employment
//! contract ended.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the legal reason an employment contract was terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Employer-initiated dismissal without cause (triggers the FGTS penalty).
    DismissalWithoutCause,
    /// Employee-initiated resignation.
    Resignation,
    /// Employer-initiated dismissal for cause.
    DismissalWithCause,
    /// Termination by mutual agreement between the parties.
    MutualAgreement,
}

/// Represents how the notice period ("aviso prévio") was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeType {
    /// The notice period was worked through to its end.
    Worked,
    /// The employer paid the notice period in lieu of work.
    PaidInLieu,
    /// No notice was given or served.
    NotGiven,
}

/// A request to calculate the severance settlement for one termination.
///
/// Dates are plain calendar dates; on the wire they are ISO-8601
/// `YYYY-MM-DD` strings and no other format is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationRequest {
    /// The monthly base salary. Must be strictly positive.
    pub monthly_salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date the contract ended. Must not precede the hire date.
    pub termination_date: NaiveDate,
    /// The legal reason for the termination.
    pub reason: TerminationReason,
    /// How the notice period was handled.
    pub notice_type: NoticeType,
    /// Whether a fully accrued but untaken vacation period exists.
    #[serde(default)]
    pub has_expired_vacation: bool,
    /// Unexcused absence days during the acquisition period. Accepted for
    /// forward compatibility; no calculator currently consumes it.
    #[serde(default)]
    pub unexcused_absence_days: Option<u32>,
}

impl TerminationRequest {
    /// Returns true if the dismissal was employer-initiated without cause.
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert!(request.is_dismissal_without_cause());
    /// ```
    pub fn is_dismissal_without_cause(&self) -> bool {
        self.reason == TerminationReason::DismissalWithoutCause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_request(reason: TerminationReason) -> TerminationRequest {
        TerminationRequest {
            monthly_salary: Decimal::new(250000, 2),
            hire_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            termination_date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
            reason,
            notice_type: NoticeType::Worked,
            has_expired_vacation: false,
            unexcused_absence_days: None,
        }
    }

    #[test]
    fn test_deserialize_dismissal_request() {
        let json = r#"{
            "monthly_salary": "3000.00",
            "hire_date": "2023-01-01",
            "termination_date": "2023-06-20",
            "reason": "dismissal_without_cause",
            "notice_type": "paid_in_lieu"
        }"#;

        let request: TerminationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.monthly_salary, Decimal::new(300000, 2));
        assert_eq!(request.reason, TerminationReason::DismissalWithoutCause);
        assert_eq!(request.notice_type, NoticeType::PaidInLieu);
        assert!(!request.has_expired_vacation);
        assert_eq!(request.unexcused_absence_days, None);
    }

    #[test]
    fn test_deserialize_resignation_with_optional_fields() {
        let json = r#"{
            "monthly_salary": "2000.00",
            "hire_date": "2024-08-13",
            "termination_date": "2026-09-18",
            "reason": "resignation",
            "notice_type": "not_given",
            "has_expired_vacation": true,
            "unexcused_absence_days": 4
        }"#;

        let request: TerminationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.reason, TerminationReason::Resignation);
        assert_eq!(request.notice_type, NoticeType::NotGiven);
        assert!(request.has_expired_vacation);
        assert_eq!(request.unexcused_absence_days, Some(4));
    }

    #[test]
    fn test_deserialize_rejects_unknown_reason() {
        let json = r#"{
            "monthly_salary": "2000.00",
            "hire_date": "2024-08-13",
            "termination_date": "2026-09-18",
            "reason": "abandonment",
            "notice_type": "worked"
        }"#;

        let result: Result<TerminationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_date_with_time_component() {
        let json = r#"{
            "monthly_salary": "2000.00",
            "hire_date": "2024-08-13T12:00:00Z",
            "termination_date": "2026-09-18",
            "reason": "resignation",
            "notice_type": "worked"
        }"#;

        let result: Result<TerminationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_request_round_trip() {
        let request = create_test_request(TerminationReason::MutualAgreement);
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: TerminationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }

    #[test]
    fn test_is_dismissal_without_cause() {
        assert!(
            create_test_request(TerminationReason::DismissalWithoutCause)
                .is_dismissal_without_cause()
        );
        assert!(!create_test_request(TerminationReason::Resignation).is_dismissal_without_cause());
        assert!(
            !create_test_request(TerminationReason::DismissalWithCause)
                .is_dismissal_without_cause()
        );
        assert!(
            !create_test_request(TerminationReason::MutualAgreement).is_dismissal_without_cause()
        );
    }

    #[test]
    fn test_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&TerminationReason::DismissalWithoutCause).unwrap(),
            "\"dismissal_without_cause\""
        );
        assert_eq!(
            serde_json::to_string(&TerminationReason::Resignation).unwrap(),
            "\"resignation\""
        );
        assert_eq!(
            serde_json::to_string(&TerminationReason::DismissalWithCause).unwrap(),
            "\"dismissal_with_cause\""
        );
        assert_eq!(
            serde_json::to_string(&TerminationReason::MutualAgreement).unwrap(),
            "\"mutual_agreement\""
        );
    }

    #[test]
    fn test_notice_type_serialization() {
        assert_eq!(
            serde_json::to_string(&NoticeType::Worked).unwrap(),
            "\"worked\""
        );
        assert_eq!(
            serde_json::to_string(&NoticeType::PaidInLieu).unwrap(),
            "\"paid_in_lieu\""
        );
        assert_eq!(
            serde_json::to_string(&NoticeType::NotGiven).unwrap(),
            "\"not_given\""
        );
    }
}
