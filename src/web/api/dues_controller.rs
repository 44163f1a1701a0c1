use crate::backend::configuration::BackendConfiguration;
use crate::backend::members::retrieve_member;
use crate::backend::payments::retrieve_payment_history;
use crate::dues::context::{evaluate_member, evaluate_raw};
use crate::dues::history::decode_payment_history;
use crate::dues::{parse_today, today};
use crate::error::Result;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use chrono::NaiveDate;
use dto::dues_evaluation_request::DuesEvaluationRequest;
use dto::dues_report::DuesReport;
use log::debug;
use reqwest::Client;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{Json, json};

/// Evaluate the dues of a member known by the backend, as of today.
/// Return the status and the notice to display as JSON-encoded string.
#[get("/members/<member_id>/dues")]
pub async fn member_dues(
    configuration: &State<BackendConfiguration>,
    member_id: &str,
) -> std::result::Result<String, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    let report = retrieve_member_dues(&client, configuration, member_id, &today()).await?;

    Ok(json!(report).to_string())
}

/// Evaluate dues from data the caller already has.
/// Malformed history entries are ignored, a missing `today` means today.
#[post("/dues/evaluate", format = "application/json", data = "<request>")]
pub async fn evaluate_dues(
    request: Json<DuesEvaluationRequest>,
) -> std::result::Result<String, Status> {
    let report = evaluate_request(request.into_inner())?;

    Ok(json!(report).to_string())
}

async fn retrieve_member_dues(
    client: &Client,
    configuration: &BackendConfiguration,
    member_id: &str,
    today: &NaiveDate,
) -> Result<DuesReport> {
    let member = retrieve_member(client, configuration, member_id).await?;
    let payment_history = retrieve_payment_history(client, configuration, member_id).await?;
    debug!(
        "Evaluating member dues [member: {member:?}, proofs: {}]",
        payment_history.len()
    );

    Ok(DuesReport::from(evaluate_member(&member, payment_history, today)))
}

fn evaluate_request(request: DuesEvaluationRequest) -> Result<DuesReport> {
    let today = parse_today(request.today().as_deref())?;
    let payment_history =
        decode_payment_history(request.payment_history().clone().unwrap_or_default());
    let status = evaluate_raw(
        request.registration_date().as_deref(),
        request.last_paid_date().as_deref(),
        payment_history,
        &today,
    );

    Ok(DuesReport::from(status))
}
