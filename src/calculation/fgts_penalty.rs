//! FGTS penalty calculation functionality.
//!
//! On dismissal without cause the employer owes a penalty of 40% of the FGTS
//! deposits, paid to the employee as part of the settlement.

use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::models::TerminationReason;

use super::money::round_currency;

/// Calculates the FGTS penalty on a deposit total.
///
/// Nonzero only when the reason is dismissal without cause; every other
/// reason pays no penalty.
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_fgts_penalty;
/// use rescisao_engine::config::SettlementRules;
/// use rescisao_engine::models::TerminationReason;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let penalty = calculate_fgts_penalty(
///     Decimal::new(168000, 2),
///     TerminationReason::DismissalWithoutCause,
///     &rules,
/// );
/// assert_eq!(penalty, Decimal::new(67200, 2));
/// ```
pub fn calculate_fgts_penalty(
    deposits: Decimal,
    reason: TerminationReason,
    rules: &SettlementRules,
) -> Decimal {
    if reason != TerminationReason::DismissalWithoutCause {
        return Decimal::ZERO;
    }
    round_currency(deposits * rules.fgts_penalty_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_penalty_on_dismissal_without_cause() {
        let rules = SettlementRules::default();
        assert_eq!(
            calculate_fgts_penalty(dec("1680.00"), TerminationReason::DismissalWithoutCause, &rules),
            dec("672.00")
        );
    }

    #[test]
    fn test_no_penalty_for_other_reasons() {
        let rules = SettlementRules::default();
        for reason in [
            TerminationReason::Resignation,
            TerminationReason::DismissalWithCause,
            TerminationReason::MutualAgreement,
        ] {
            assert_eq!(
                calculate_fgts_penalty(dec("1680.00"), reason, &rules),
                Decimal::ZERO,
                "{:?} must not pay a penalty",
                reason
            );
        }
    }

    #[test]
    fn test_penalty_rounds_to_two_places() {
        let rules = SettlementRules::default();
        // 40% of 1234.56 = 493.824
        assert_eq!(
            calculate_fgts_penalty(dec("1234.56"), TerminationReason::DismissalWithoutCause, &rules),
            dec("493.82")
        );
    }

    #[test]
    fn test_penalty_on_zero_deposits_is_zero() {
        let rules = SettlementRules::default();
        assert_eq!(
            calculate_fgts_penalty(Decimal::ZERO, TerminationReason::DismissalWithoutCause, &rules),
            Decimal::ZERO
        );
    }
}
