//! One-third vacation-bonus calculation functionality.
//!
//! The constitutional bonus ("terço constitucional") adds one third on top of
//! vacation pay.

use rust_decimal::Decimal;

use crate::config::SettlementRules;

use super::money::round_currency;

/// Calculates the one-third bonus on an already-rounded vacation amount.
///
/// Purely derived: takes the proportional vacation pay as computed (not raw
/// dates), divides by the regime's bonus divisor, and rounds.
///
/// # Examples
///
/// ```
/// use rescisao_engine::calculation::calculate_vacation_bonus;
/// use rescisao_engine::config::SettlementRules;
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::default();
/// let bonus = calculate_vacation_bonus(Decimal::new(150000, 2), &rules);
/// assert_eq!(bonus, Decimal::new(50000, 2));
/// ```
pub fn calculate_vacation_bonus(vacation_pay: Decimal, rules: &SettlementRules) -> Decimal {
    round_currency(vacation_pay / Decimal::from(rules.vacation_bonus_divisor))
}
