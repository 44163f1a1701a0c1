use chrono::{Datelike, Months, NaiveDate, Utc};
use log::info;
use serde_json::{Value, json};
use std::sync::OnceLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub static BACKEND_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();

/// Start a mock backend knowing a few members, one for each kind of notice:
/// - 1: registered long ago, paid this month;
/// - 2: proof pending review for this month;
/// - 3: registered a month ago, so due today.
///   At the end of a month longer than the previous one, no date a month ago leads to today:
///   the member is then a few days overdue;
/// - 4: overdue.
pub async fn init_demo() {
    let mock_server = MockServer::start().await;
    BACKEND_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());

    for (member, payments) in demo_members(Utc::now().date_naive()) {
        mock_member(&mock_server, member, payments).await;
    }

    info!("Demo backend started [url: {}]", mock_server.uri());
    // The mock backend has to live as long as the app.
    Box::leak(Box::new(mock_server));
}

fn demo_members(today: NaiveDate) -> Vec<(Value, Value)> {
    let month_ago = |days_before: u64| {
        today
            .checked_sub_months(Months::new(1))
            .and_then(|date| date.checked_sub_days(chrono::Days::new(days_before)))
            .unwrap_or(today)
            .to_string()
    };
    let current_month_proof = |id: u32, status: &str| {
        json!({
            "id": id,
            "payment_month": today.month(),
            "payment_year": today.year(),
            "status": status,
            "uploaded_at": format!("{today}T09:00:00"),
        })
    };

    vec![
        (
            json!({"id": 1, "registration_date": "2023-09-01"}),
            json!([current_month_proof(10, "approved")]),
        ),
        (
            json!({"id": 2, "registration_date": "2023-09-01"}),
            json!([current_month_proof(20, "rejected"), current_month_proof(21, "pending")]),
        ),
        (
            json!({"id": 3, "registration_date": month_ago(0), "last_paid_date": null}),
            json!([]),
        ),
        (
            json!({"id": 4, "registration_date": "2023-09-01", "last_paid_date": month_ago(10)}),
            json!({"data": []}),
        ),
    ]
}

async fn mock_member(mock_server: &MockServer, member: Value, payments: Value) {
    let id = &member["id"];
    Mock::given(method("GET"))
        .and(path(format!("/members/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&member))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/members/{id}/payments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payments))
        .mount(mock_server)
        .await;
}
