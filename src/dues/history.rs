use chrono::NaiveDate;
use dto::payment_proof::{PaymentProof, ProofStatus};
use log::warn;
use serde_json::Value;

/// Decode raw history entries coming from the backend.
/// Malformed entries are ignored: a missing month, year or status, an unknown status
/// or an impossible month would never match anything anyway.
pub fn decode_payment_history(entries: Vec<Value>) -> Vec<PaymentProof> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<PaymentProof>(entry.clone()) {
            Ok(proof) if proof.has_valid_month() => Some(proof),
            Ok(proof) => {
                warn!("Payment proof month is out of range. Ignoring. [proof: {proof:?}]");
                None
            }
            Err(error) => {
                warn!("Malformed payment proof. Ignoring. [entry: {entry}, error: {error}]");
                None
            }
        })
        .collect()
}

/// Date of the most recent approved payment, based on when its proof was uploaded.
/// Proofs without upload time are left out.
pub fn latest_approved(payment_history: &[PaymentProof]) -> Option<NaiveDate> {
    payment_history
        .iter()
        .filter(|proof| *proof.status() == ProofStatus::Approved)
        .filter_map(|proof| *proof.uploaded_at())
        .max()
        .map(|uploaded_at| uploaded_at.date())
}

/// First proof in history covering the month of `today` with the given status.
pub fn find_current_month_proof<'a>(
    payment_history: &'a [PaymentProof],
    today: &NaiveDate,
    status: ProofStatus,
) -> Option<&'a PaymentProof> {
    payment_history
        .iter()
        .find(|proof| *proof.status() == status && proof.is_for_month_of(today))
}
