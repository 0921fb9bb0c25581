//! Configuration types for the severance rule regime.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the labor-law regime the rules belong to.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeMetadata {
    /// A short code identifying the regime (e.g., "clt").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The version or effective revision of the regime.
    pub version: String,
    /// URL to the official legal text.
    pub source_url: String,
}

/// The rule constants that drive every settlement calculator.
///
/// Modeled as an injectable structure rather than hard-coded constants so a
/// future rule-regime change never touches calculator logic. The `Default`
/// implementation carries the current CLT values.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementRules {
    /// The day-count convention for one month of salary (30 under CLT,
    /// regardless of actual month length).
    pub month_divisor: u32,
    /// Months in a proportional year (12).
    pub months_per_year: u32,
    /// Minimum days worked within a civil month for it to count as a full
    /// proportional unit (15 under CLT).
    pub fifteen_day_threshold: i64,
    /// Base notice period in days (30).
    pub notice_base_days: u32,
    /// Extra notice days per completed year of service (3).
    pub notice_days_per_year: u32,
    /// Cap on the total notice period in days (90).
    pub notice_days_cap: u32,
    /// Monthly FGTS deposit rate (0.08).
    pub fgts_rate: Decimal,
    /// FGTS penalty rate on dismissal without cause (0.40).
    pub fgts_penalty_rate: Decimal,
    /// Divisor for the constitutional vacation bonus (3, i.e. one third).
    pub vacation_bonus_divisor: u32,
}

impl Default for SettlementRules {
    fn default() -> Self {
        Self {
            month_divisor: 30,
            months_per_year: 12,
            fifteen_day_threshold: 15,
            notice_base_days: 30,
            notice_days_per_year: 3,
            notice_days_cap: 90,
            fgts_rate: Decimal::new(8, 2),
            fgts_penalty_rate: Decimal::new(40, 2),
            vacation_bonus_divisor: 3,
        }
    }
}

/// The complete regime configuration loaded from a YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeConfig {
    /// Regime metadata.
    pub regime: RegimeMetadata,
    /// The rule constants for this regime.
    pub rules: SettlementRules,
}
