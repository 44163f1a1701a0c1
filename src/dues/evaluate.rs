use crate::dues::due_date::{days_until, next_due_date};
use crate::dues::history::find_current_month_proof;
use chrono::NaiveDate;
use dto::dues_status::{DUE_NOTICE_WINDOW_DAYS, DuesStatus};
use dto::payment_proof::{PaymentProof, ProofStatus};

/// Compute whether a member should be warned about their dues, and how.
///
/// Rules are applied in order, the first one matching wins:
/// 1. no registration date: nothing is known to be owed, so `Paid`;
/// 2. a proof for the current month is pending review: `Pending`;
/// 3. a proof for the current month has been approved: `Paid`;
/// 4. otherwise, the next due date is one month after the last approved payment
///    (or after registration if none) and a `Due` status is returned
///    when it is at most [`DUE_NOTICE_WINDOW_DAYS`] days away, or already past.
///
/// Rejected proofs are never taken into account.
pub fn evaluate(
    registration_date: Option<&NaiveDate>,
    last_paid_date: Option<&NaiveDate>,
    payment_history: &[PaymentProof],
    today: &NaiveDate,
) -> DuesStatus {
    let Some(registration_date) = registration_date else {
        return DuesStatus::Paid;
    };

    if let Some(proof) = find_current_month_proof(payment_history, today, ProofStatus::Pending) {
        return DuesStatus::Pending {
            proof_id: proof.id().clone(),
        };
    }

    if find_current_month_proof(payment_history, today, ProofStatus::Approved).is_some() {
        return DuesStatus::Paid;
    }

    let base_date = last_paid_date.unwrap_or(registration_date);
    // Out of range: the due date is unknown, no notice rather than a wrong one.
    let Some(due_date) = next_due_date(base_date) else {
        return DuesStatus::Paid;
    };

    let days = days_until(today, &due_date);
    if days <= DUE_NOTICE_WINDOW_DAYS {
        DuesStatus::Due { days }
    } else {
        DuesStatus::Paid
    }
}
