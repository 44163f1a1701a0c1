use crate::identifier::Identifier;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A member as returned by the school backend.
/// Dates are kept raw: the backend doesn't guarantee their format.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MemberRecord {
    id: Identifier,
    #[serde(default)]
    registration_date: Option<String>,
    #[serde(default)]
    last_paid_date: Option<String>,
}

impl MemberRecord {
    pub fn new(
        id: Identifier,
        registration_date: Option<String>,
        last_paid_date: Option<String>,
    ) -> Self {
        Self {
            id,
            registration_date,
            last_paid_date,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const MEMBER_ID: i64 = 42;
    pub const MEMBER_AS_JSON: &str =
        r#"{"id":42,"first_name":"Jon","registration_date":"2024-01-15","last_paid_date":null}"#;

    pub fn get_expected_member() -> MemberRecord {
        MemberRecord::new(
            Identifier::Number(MEMBER_ID),
            Some("2024-01-15".to_owned()),
            None,
        )
    }

    #[test]
    fn should_deserialize_member_and_ignore_unknown_fields() {
        let result: MemberRecord = serde_json::from_str(MEMBER_AS_JSON).unwrap();
        assert_eq!(get_expected_member(), result);
    }

    #[test]
    fn should_deserialize_member_without_dates() {
        let result: MemberRecord = serde_json::from_str(r#"{"id":"m-7"}"#).unwrap();
        assert_eq!(MemberRecord::new(Identifier::from("m-7"), None, None), result);
    }
}
