use crate::backend::error::BackendError;
use crate::dues::error::DuesError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("An error has occurred while requesting the backend.")]
    Backend(#[from] BackendError),
    #[error("Dues can't be evaluated.")]
    Dues(#[from] DuesError),
}
