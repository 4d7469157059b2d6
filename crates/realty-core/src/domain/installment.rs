// ============================================================================
// Realty Core - Installment Entity
// File: crates/realty-core/src/domain/installment.rs
// Description: A single scheduled payment within an installment plan
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{non_negative_amount, positive_amount};
use super::{Entity, EntityKind};
use realty_shared::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl InstallmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallmentStatus::Pending => "pending",
            InstallmentStatus::Paid => "paid",
            InstallmentStatus::Overdue => "overdue",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InstallmentStatus::Pending),
            "paid" => Some(InstallmentStatus::Paid),
            "overdue" => Some(InstallmentStatus::Overdue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Installment {
    #[validate(range(min = 1, message = "plan_id is required"))]
    pub plan_id: RecordId,

    /// Position within the plan, starting at 1.
    #[validate(range(min = 1, message = "sequence_number must be positive"))]
    pub sequence_number: i32,

    pub due_date: NaiveDate,

    #[validate(custom(function = "positive_amount", message = "amount_due must be positive"))]
    pub amount_due: f64,

    #[validate(custom(function = "non_negative_amount", message = "amount_paid must not be negative"))]
    pub amount_paid: f64,

    #[serde(default)]
    pub status: InstallmentStatus,

    #[validate(custom(function = "non_negative_amount", message = "late_fee must not be negative"))]
    pub late_fee: f64,

    pub paid_date: Option<NaiveDate>,
}

impl Entity for Installment {
    const KIND: EntityKind = EntityKind::Installment;
}
