use poem::http::StatusCode;

use business::domain::product::errors::ProductError;

use crate::api::envelope::{Failure, IntoFailure};

impl IntoFailure for ProductError {
    fn into_failure(self, not_found: &str, on_error: &str) -> Failure {
        match self {
            ProductError::NameEmpty => Failure::bad_request("Product name must not be empty"),
            ProductError::NegativePrice => {
                Failure::bad_request("Product price must be a non-negative number")
            }
            ProductError::NegativeQuantity => {
                Failure::bad_request("Product quantity must not be negative")
            }
            ProductError::NotFound => Failure::new(StatusCode::NOT_FOUND, not_found),
            ProductError::CategoryNotFound => Failure::new(
                StatusCode::NOT_FOUND,
                "Category associated with the product not found",
            ),
            ProductError::Photo(_) | ProductError::Repository(_) => {
                Failure::new(StatusCode::INTERNAL_SERVER_ERROR, on_error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::product::services::PhotoError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        for err in [
            ProductError::NameEmpty,
            ProductError::NegativePrice,
            ProductError::NegativeQuantity,
        ] {
            assert_eq!(err.into_failure("", "").status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn should_describe_missing_category_independently_of_operation() {
        let failure = ProductError::CategoryNotFound.into_failure("Product not found", "Error");
        assert_eq!(failure.status, StatusCode::NOT_FOUND);
        assert_eq!(
            failure.description,
            "Category associated with the product not found"
        );
    }

    #[test]
    fn should_map_store_and_codec_failures_to_server_error() {
        let store = ProductError::Repository(RepositoryError::DatabaseError)
            .into_failure("", "Error searching product");
        let codec = ProductError::Photo(PhotoError::Decompression)
            .into_failure("", "Error searching product");

        assert_eq!(store.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(codec, store);
    }
}
