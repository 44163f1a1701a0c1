use crate::identifier::Identifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A due date this close (in days) or closer triggers a notice.
pub const DUE_NOTICE_WINDOW_DAYS: i64 = 7;

/// Outcome of the dues evaluation for a member.
///
/// Serialized as `{"show", "status", "days", "isOverdue", "proof_id"}`,
/// where `days` and `isOverdue` only appear for [`DuesStatus::Due`]
/// and `proof_id` only for [`DuesStatus::Pending`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(into = "DuesStatusRepr", try_from = "DuesStatusRepr")]
pub enum DuesStatus {
    /// Nothing to pay right now, or nothing we can tell.
    Paid,
    /// A proof for the current month is waiting for review.
    Pending { proof_id: Identifier },
    /// `days` until the rolling due date, negative once overdue.
    Due { days: i64 },
}

impl DuesStatus {
    pub fn show(&self) -> bool {
        match self {
            DuesStatus::Paid => false,
            DuesStatus::Pending { .. } => true,
            DuesStatus::Due { days } => *days <= DUE_NOTICE_WINDOW_DAYS,
        }
    }

    pub fn is_overdue(&self) -> Option<bool> {
        match self {
            DuesStatus::Due { days } => Some(*days < 0),
            _ => None,
        }
    }

    fn kind(&self) -> StatusKind {
        match self {
            DuesStatus::Paid => StatusKind::Paid,
            DuesStatus::Pending { .. } => StatusKind::Pending,
            DuesStatus::Due { .. } => StatusKind::Due,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum StatusKind {
    Paid,
    Pending,
    Due,
}

#[derive(Debug, Serialize, Deserialize)]
struct DuesStatusRepr {
    #[serde(default)]
    show: bool,
    status: StatusKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    days: Option<i64>,
    #[serde(default, rename = "isOverdue", skip_serializing_if = "Option::is_none")]
    is_overdue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    proof_id: Option<Identifier>,
}

impl From<DuesStatus> for DuesStatusRepr {
    fn from(status: DuesStatus) -> Self {
        let show = status.show();
        let kind = status.kind();
        let is_overdue = status.is_overdue();
        let (days, proof_id) = match status {
            DuesStatus::Paid => (None, None),
            DuesStatus::Pending { proof_id } => (None, Some(proof_id)),
            DuesStatus::Due { days } => (Some(days), None),
        };

        Self {
            show,
            status: kind,
            days,
            is_overdue,
            proof_id,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DuesStatusError {
    #[error("A due status must carry its number of days.")]
    MissingDays,
    #[error("A pending status must carry the id of the pending proof.")]
    MissingProofId,
}

impl TryFrom<DuesStatusRepr> for DuesStatus {
    type Error = DuesStatusError;

    /// `show` and `isOverdue` are derived values: they are ignored.
    fn try_from(repr: DuesStatusRepr) -> Result<Self, Self::Error> {
        match repr.status {
            StatusKind::Paid => Ok(DuesStatus::Paid),
            StatusKind::Pending => repr
                .proof_id
                .map(|proof_id| DuesStatus::Pending { proof_id })
                .ok_or(DuesStatusError::MissingProofId),
            StatusKind::Due => repr
                .days
                .map(|days| DuesStatus::Due { days })
                .ok_or(DuesStatusError::MissingDays),
        }
    }
}
