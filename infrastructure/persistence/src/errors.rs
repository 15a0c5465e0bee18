use business::domain::errors::RepositoryError;

/// Maps a driver error onto the domain's repository taxonomy.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    if let Some(db_error) = error.as_database_error()
        && db_error.is_unique_violation()
    {
        return RepositoryError::duplicated();
    }

    tracing::error!(target: "persistence", error = %error, "database operation failed");
    RepositoryError::database_error()
}
