//! Commission amount derivation

use crate::domain::CommissionType;

/// Payable amount for a commission.
///
/// `Percentage` multiplies the base value by a fraction (5% is `0.05`), with no
/// scaling and no rounding. `Fixed` returns the amount as-is and ignores the base.
pub fn calculate(commission_type: CommissionType, rate_or_amount: f64, base_value: f64) -> f64 {
    match commission_type {
        CommissionType::Fixed => rate_or_amount,
        CommissionType::Percentage => base_value * rate_or_amount,
    }
}
