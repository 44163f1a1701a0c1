use thiserror::Error;

pub type Result<T, E = DuesError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum DuesError {
    #[error("The reference date can't be read [value: {0}]")]
    InvalidToday(String),
}

/// Raw member data can't be turned into an evaluation context.
/// Never sent to callers: the notice is suppressed instead.
#[derive(Debug, Error, PartialEq)]
pub enum ContextError {
    #[error("The last payment date can't be read, the due date is unknown [value: {0}]")]
    InvalidLastPaidDate(String),
}
