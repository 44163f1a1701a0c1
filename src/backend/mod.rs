use crate::backend::error::BackendError::{
    ConnectionFailed, MalformedResponse, MemberNotFound, UnexpectedStatus,
};
use crate::backend::error::Result;
use crate::tools::log_message_and_return;
use log::{debug, error};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

pub(crate) mod configuration;
pub(crate) mod error;
pub(crate) mod members;
pub(crate) mod payments;

/// GET a JSON document from the backend.
/// A 404 means the member doesn't exist, any other non-success status is unexpected.
async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T> {
    debug!("Requesting backend [url: {url}]");
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(log_message_and_return("Can't reach backend", ConnectionFailed))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        debug!("Backend doesn't know this member [url: {url}]");
        return Err(MemberNotFound);
    }
    if !status.is_success() {
        error!("Backend answered with an unexpected status [url: {url}, status: {status}]");
        return Err(UnexpectedStatus(status.as_u16()));
    }

    response.json::<T>().await.map_err(log_message_and_return(
        "Can't read backend response",
        MalformedResponse,
    ))
}
