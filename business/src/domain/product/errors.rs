use super::services::PhotoError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.negative_quantity")]
    NegativeQuantity,
    #[error("product.not_found")]
    NotFound,
    #[error("product.category_not_found")]
    CategoryNotFound,
    #[error(transparent)]
    Photo(#[from] PhotoError),
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
