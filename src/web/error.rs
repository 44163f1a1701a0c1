use crate::backend::error::BackendError;
use crate::dues::error::DuesError;
use crate::error::ApplicationError;
use rocket::http::Status;

impl From<ApplicationError> for Status {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Backend(BackendError::MemberNotFound)
            | ApplicationError::Backend(BackendError::InvalidMemberId(_)) => Status::NotFound,
            ApplicationError::Backend(BackendError::CantCreateClient)
            | ApplicationError::Backend(BackendError::InvalidBackendUrl(_)) => {
                Status::InternalServerError
            }
            ApplicationError::Backend(_) => Status::BadGateway,
            ApplicationError::Dues(DuesError::InvalidToday(_)) => Status::BadRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        error = {
            ApplicationError::Backend(BackendError::MemberNotFound),
            ApplicationError::Backend(BackendError::InvalidMemberId("..".to_owned())),
            ApplicationError::Backend(BackendError::CantCreateClient),
            ApplicationError::Backend(BackendError::InvalidBackendUrl("api".to_owned())),
            ApplicationError::Backend(BackendError::ConnectionFailed),
            ApplicationError::Backend(BackendError::UnexpectedStatus(500)),
            ApplicationError::Backend(BackendError::MalformedResponse),
            ApplicationError::Dues(DuesError::InvalidToday("tomorrow".to_owned())),
        },
        expected_result = {
            Status::NotFound,
            Status::NotFound,
            Status::InternalServerError,
            Status::InternalServerError,
            Status::BadGateway,
            Status::BadGateway,
            Status::BadGateway,
            Status::BadRequest,
        }
    )]
    fn should_convert_error_to_status(error: ApplicationError, expected_result: Status) {
        assert_eq!(expected_result, Status::from(error));
    }
}
