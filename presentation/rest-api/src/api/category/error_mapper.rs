use poem::http::StatusCode;

use business::domain::category::errors::CategoryError;

use crate::api::envelope::{Failure, IntoFailure};

impl IntoFailure for CategoryError {
    fn into_failure(self, not_found: &str, on_error: &str) -> Failure {
        match self {
            CategoryError::NameEmpty => {
                Failure::bad_request("Category name must not be empty")
            }
            CategoryError::NotFound => Failure::new(StatusCode::NOT_FOUND, not_found),
            CategoryError::Duplicated => {
                Failure::new(StatusCode::CONFLICT, "A category with that name already exists")
            }
            CategoryError::Repository(_) => {
                Failure::new(StatusCode::INTERNAL_SERVER_ERROR, on_error)
            }
        }
    }
}
