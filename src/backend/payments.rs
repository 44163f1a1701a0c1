use crate::backend::configuration::BackendConfiguration;
use crate::backend::error::Result;
use crate::backend::get_json;
use crate::dues::history::decode_payment_history;
use dto::payment_proof::PaymentProof;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// The backend either sends the list as is, or wrapped within a `data` field.
/// The `data` field is required: any other object isn't a payment history.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaymentHistoryResponse {
    List(Vec<Value>),
    Wrapped {
        #[serde(deserialize_with = "Option::deserialize")]
        data: Option<Vec<Value>>,
    },
}

impl PaymentHistoryResponse {
    fn into_entries(self) -> Vec<Value> {
        match self {
            PaymentHistoryResponse::List(entries) => entries,
            PaymentHistoryResponse::Wrapped { data } => data.unwrap_or_default(),
        }
    }
}

/// Retrieve every payment proof uploaded by a member.
/// Malformed proofs are left out.
pub async fn retrieve_payment_history(
    client: &Client,
    configuration: &BackendConfiguration,
    member_id: &str,
) -> Result<Vec<PaymentProof>> {
    let response: Option<PaymentHistoryResponse> =
        get_json(client, configuration.payment_history_url(member_id)?).await?;
    let entries = response
        .map(PaymentHistoryResponse::into_entries)
        .unwrap_or_default();

    Ok(decode_payment_history(entries))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::backend::error::BackendError::{MalformedResponse, MemberNotFound, UnexpectedStatus};
    use crate::tools::web::build_client;
    use dto::payment_proof::tests::{PAYMENT_PROOF_AS_JSON, get_expected_payment_proof};
    use parameterized::{ide, parameterized};
    use rocket::tokio::runtime::Runtime;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    ide!();

    pub async fn setup_payment_history_retrieval(mock_server: &MockServer, member_id: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/members/{member_id}/payments")))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(mock_server)
            .await;
    }

    #[parameterized(
        body = {
            format!("[{PAYMENT_PROOF_AS_JSON}]"),
            format!(r#"{{"data": [{PAYMENT_PROOF_AS_JSON}]}}"#),
            format!(r#"[{PAYMENT_PROOF_AS_JSON}, {{"id": 13, "status": "pending"}}]"#),
        }
    )]
    fn should_retrieve_payment_history(body: String) {
        async fn test(body: String) {
            let mock_server = MockServer::start().await;
            setup_payment_history_retrieval(&mock_server, "42", &body).await;

            let client = build_client().unwrap();
            let configuration = BackendConfiguration::new(mock_server.uri());
            let result = retrieve_payment_history(&client, &configuration, "42")
                .await
                .unwrap();

            assert_eq!(vec![get_expected_payment_proof()], result);
        }
        Runtime::new().unwrap().block_on(test(body));
    }

    #[parameterized(body = {"[]".to_owned(), "null".to_owned(), r#"{"data": null}"#.to_owned()})]
    fn should_retrieve_empty_payment_history(body: String) {
        async fn test(body: String) {
            let mock_server = MockServer::start().await;
            setup_payment_history_retrieval(&mock_server, "42", &body).await;

            let client = build_client().unwrap();
            let configuration = BackendConfiguration::new(mock_server.uri());
            let result = retrieve_payment_history(&client, &configuration, "42")
                .await
                .unwrap();

            assert!(result.is_empty(), "History should be empty [result: {result:?}]");
        }
        Runtime::new().unwrap().block_on(test(body));
    }

    #[parameterized(
        body = {
            "{}".to_owned(),
            r#"{"message": "Payments are being migrated"}"#.to_owned(),
            r#"{"id": 1, "registration_date": "2018-01-15"}"#.to_owned(),
            r#""none""#.to_owned(),
        }
    )]
    fn should_fail_to_retrieve_payment_history_when_body_isnt_a_history(body: String) {
        async fn test(body: String) {
            let mock_server = MockServer::start().await;
            setup_payment_history_retrieval(&mock_server, "42", &body).await;

            let client = build_client().unwrap();
            let configuration = BackendConfiguration::new(mock_server.uri());
            let result = retrieve_payment_history(&client, &configuration, "42")
                .await
                .unwrap_err();

            assert_eq!(MalformedResponse, result);
        }
        Runtime::new().unwrap().block_on(test(body));
    }

    #[async_test]
    async fn should_fail_to_retrieve_payment_history_of_unknown_member() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/404/payments"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = build_client().unwrap();
        let configuration = BackendConfiguration::new(mock_server.uri());
        let result = retrieve_payment_history(&client, &configuration, "404")
            .await
            .unwrap_err();

        assert_eq!(MemberNotFound, result);
    }

    #[async_test]
    async fn should_fail_to_retrieve_payment_history_when_backend_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/42/payments"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = build_client().unwrap();
        let configuration = BackendConfiguration::new(mock_server.uri());
        let result = retrieve_payment_history(&client, &configuration, "42")
            .await
            .unwrap_err();

        assert_eq!(UnexpectedStatus(500), result);
    }
}
