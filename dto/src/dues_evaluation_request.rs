use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Data already fetched by the caller, to be evaluated as is.
/// History entries are kept raw so that a malformed one can be dropped
/// without rejecting the whole request.
#[derive(Debug, Serialize, Deserialize, Getters, Default, PartialEq, Clone)]
pub struct DuesEvaluationRequest {
    #[serde(default)]
    registration_date: Option<String>,
    #[serde(default)]
    last_paid_date: Option<String>,
    #[serde(default)]
    payment_history: Option<Vec<Value>>,
    #[serde(default)]
    today: Option<String>,
}

impl DuesEvaluationRequest {
    pub fn new(
        registration_date: Option<String>,
        last_paid_date: Option<String>,
        payment_history: Option<Vec<Value>>,
        today: Option<String>,
    ) -> Self {
        Self {
            registration_date,
            last_paid_date,
            payment_history,
            today,
        }
    }
}
