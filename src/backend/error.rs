use thiserror::Error;

pub type Result<T, E = BackendError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum BackendError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("The connection to the backend failed.")]
    ConnectionFailed,
    #[error("The requested member doesn't exist on the backend.")]
    MemberNotFound,
    #[error("The member id can't be used within a backend URL [member_id: {0}]")]
    InvalidMemberId(String),
    #[error("The backend URL can't be read [url: {0}]")]
    InvalidBackendUrl(String),
    #[error("The backend answered with an unexpected status [status: {0}]")]
    UnexpectedStatus(u16),
    #[error("The backend response can't be read.")]
    MalformedResponse,
}
