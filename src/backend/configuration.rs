use crate::backend::error::BackendError::{InvalidBackendUrl, InvalidMemberId};
use crate::backend::error::Result;
use crate::tools::env_args::retrieve_non_empty_arg_value;
use derive_getters::Getters;
use reqwest::Url;

const BACKEND_URL_ARG: &str = "--backend-url";
#[cfg(not(feature = "demo"))]
const DEFAULT_BACKEND_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Getters, PartialEq, Clone)]
pub struct BackendConfiguration {
    base_url: String,
}

impl BackendConfiguration {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Build the configuration from the app args.
    pub fn from_args() -> Self {
        Self::new(retrieve_non_empty_arg_value(BACKEND_URL_ARG).unwrap_or_else(default_backend_url))
    }

    pub fn member_url(&self, member_id: &str) -> Result<Url> {
        self.build_url(&["members", check_member_id(member_id)?])
    }

    pub fn payment_history_url(&self, member_id: &str) -> Result<Url> {
        self.build_url(&["members", check_member_id(member_id)?, "payments"])
    }

    /// Append path segments to the base URL, each of them percent-encoded.
    fn build_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|_| InvalidBackendUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|_| InvalidBackendUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// A member id has to stay a single path segment once encoded.
fn check_member_id(member_id: &str) -> Result<&str> {
    match member_id {
        "" | "." | ".." => Err(InvalidMemberId(member_id.to_owned())),
        _ => Ok(member_id),
    }
}

#[cfg(not(feature = "demo"))]
fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_owned()
}

#[cfg(feature = "demo")]
fn default_backend_url() -> String {
    crate::demo_mock_server::BACKEND_MOCK_SERVER_URI
        .get()
        .cloned()
        .unwrap_or_default()
}
