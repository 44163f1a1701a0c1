use crate::dates::parse_timestamp;
use crate::identifier::Identifier;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ProofStatus {
    Pending,
    Approved,
    Rejected,
}

/// A payment proof uploaded by a member for a given month.
/// The id, month, year and status are required: an entry missing one of them can't be deserialized.
/// The upload time is optional, a missing or unreadable one is left empty.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct PaymentProof {
    id: Identifier,
    payment_month: u32,
    payment_year: i32,
    status: ProofStatus,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    uploaded_at: Option<NaiveDateTime>,
}

impl PaymentProof {
    pub fn new(
        id: Identifier,
        payment_month: u32,
        payment_year: i32,
        status: ProofStatus,
        uploaded_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            payment_month,
            payment_year,
            status,
            uploaded_at: Some(uploaded_at),
        }
    }

    /// Whether this proof covers the month `date` belongs to.
    pub fn is_for_month_of(&self, date: &NaiveDate) -> bool {
        self.payment_month == date.month() && self.payment_year == date.year()
    }

    pub fn has_valid_month(&self) -> bool {
        (1..=12).contains(&self.payment_month)
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    impl PaymentProof {
        /// Build a proof uploaded on the first day of its month, at noon.
        pub fn new_test(id: i64, payment_month: u32, payment_year: i32, status: ProofStatus) -> Self {
            let uploaded_at = NaiveDate::from_ymd_opt(payment_year, payment_month, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            Self::new(
                Identifier::Number(id),
                payment_month,
                payment_year,
                status,
                uploaded_at,
            )
        }
    }

    pub const PAYMENT_PROOF_AS_JSON: &str = r#"{"id":12,"payment_month":3,"payment_year":2024,"status":"approved","uploaded_at":"2024-03-02T09:30:00Z"}"#;

    pub fn get_expected_payment_proof() -> PaymentProof {
        PaymentProof::new(
            Identifier::Number(12),
            3,
            2024,
            ProofStatus::Approved,
            NaiveDate::from_ymd_opt(2024, 3, 2)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn should_deserialize_payment_proof() {
        let result: PaymentProof = serde_json::from_str(PAYMENT_PROOF_AS_JSON).unwrap();
        assert_eq!(get_expected_payment_proof(), result);
    }

    #[parameterized(
        json = {
            r#"{"id":12,"payment_year":2024,"status":"approved","uploaded_at":"2024-03-02T09:30:00Z"}"#,
            r#"{"id":12,"payment_month":3,"payment_year":2024,"uploaded_at":"2024-03-02T09:30:00Z"}"#,
            r#"{"id":12,"payment_month":3,"payment_year":2024,"status":"lost","uploaded_at":"2024-03-02T09:30:00Z"}"#,
            r#"{"payment_month":3,"payment_year":2024,"status":"approved","uploaded_at":"2024-03-02T09:30:00Z"}"#,
        }
    )]
    fn should_fail_to_deserialize_malformed_payment_proof(json: &str) {
        let result = serde_json::from_str::<PaymentProof>(json);
        assert!(result.is_err(), "Malformed proof should be rejected [json: {json}]");
    }

    #[parameterized(
        json = {
            r#"{"id":8,"payment_month":2,"payment_year":2024,"status":"pending"}"#,
            r#"{"id":8,"payment_month":2,"payment_year":2024,"status":"pending","uploaded_at":null}"#,
            r#"{"id":8,"payment_month":2,"payment_year":2024,"status":"pending","uploaded_at":"yesterday"}"#,
            r#"{"id":8,"payment_month":2,"payment_year":2024,"status":"pending","uploaded_at":1708243200}"#,
        }
    )]
    fn should_deserialize_payment_proof_without_readable_upload_time(json: &str) {
        let result: PaymentProof = serde_json::from_str(json).unwrap();

        assert_eq!(&None, result.uploaded_at());
        assert_eq!(&ProofStatus::Pending, result.status());
        assert!(result.is_for_month_of(&NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()));
    }

    #[test]
    fn should_deserialize_payment_proof_uploaded_with_basic_offset() {
        let json = r#"{"id":8,"payment_month":2,"payment_year":2024,"status":"pending","uploaded_at":"2024-02-18T09:00:00+0700"}"#;

        let result: PaymentProof = serde_json::from_str(json).unwrap();

        assert_eq!(
            &NaiveDate::from_ymd_opt(2024, 2, 18).unwrap().and_hms_opt(9, 0, 0),
            result.uploaded_at()
        );
    }

    #[parameterized(
        date = {(2024, 3, 1), (2024, 3, 31), (2024, 4, 1), (2023, 3, 15)},
        expected_result = {true, true, false, false}
    )]
    fn should_check_proof_month(date: (i32, u32, u32), expected_result: bool) {
        let (year, month, day) = date;
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let proof = PaymentProof::new_test(1, 3, 2024, ProofStatus::Pending);

        assert_eq!(expected_result, proof.is_for_month_of(&date));
    }

    #[test]
    fn should_detect_invalid_month() {
        let mut proof = get_expected_payment_proof();
        assert!(proof.has_valid_month());

        proof.payment_month = 13;
        assert!(!proof.has_valid_month());
    }
}
