use crate::backend::error::BackendError::CantCreateClient;
use crate::backend::error::Result;
use crate::tools::log_message_and_return;
use reqwest::Client;
use std::time::Duration;

const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client() -> Result<Client> {
    reqwest::ClientBuilder::new()
        .timeout(BACKEND_TIMEOUT)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}
