#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.not_found")]
    NotFound,
    #[error("category.duplicated")]
    Duplicated,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl CategoryError {
    /// Lifts a repository failure, keeping the conflict and not-found cases
    /// distinguishable for the caller.
    pub fn from_repository(error: crate::domain::errors::RepositoryError) -> Self {
        use crate::domain::errors::RepositoryError;

        match error {
            RepositoryError::NotFound => CategoryError::NotFound,
            RepositoryError::Duplicated => CategoryError::Duplicated,
            other => CategoryError::Repository(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;

    #[test]
    fn should_display_the_wrapped_cause() {
        assert_eq!(
            CategoryError::Repository(RepositoryError::DatabaseError).to_string(),
            "repository.database_error"
        );
    }

    #[test]
    fn should_lift_conflict_and_missing_rows() {
        assert!(matches!(
            CategoryError::from_repository(RepositoryError::Duplicated),
            CategoryError::Duplicated
        ));
        assert!(matches!(
            CategoryError::from_repository(RepositoryError::NotFound),
            CategoryError::NotFound
        ));
    }
}
