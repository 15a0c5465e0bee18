use std::sync::Arc;

use async_trait::async_trait;

use super::photo::restore_photo;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::PhotoCodec;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub codec: Arc<dyn PhotoCodec>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .find_by_id(params.id)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to load product {}: {}", params.id, e));
                ProductError::Repository(e)
            })?
            .ok_or_else(|| {
                self.logger
                    .warn(&format!("Product not found: {}", params.id));
                ProductError::NotFound
            })?;

        restore_photo(self.codec.as_ref(), product).map_err(|e| {
            self.logger.error(&format!(
                "Failed to decode photo of product {}: {}",
                params.id, e
            ));
            ProductError::Photo(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{
        MockCodec, MockProductRepo, marker_codec, mock_logger, stored_product,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::services::PhotoError;

    #[tokio::test]
    async fn should_return_product_with_decoded_photo() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_product(id, "Widget", 1, b"jpeg-bytes"))));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            codec: marker_codec(),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: 5 })
            .await
            .unwrap();
        assert_eq!(product.id, 5);
        assert_eq!(product.photo, b"jpeg-bytes".to_vec());
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_absent() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        let mut mock_codec = MockCodec::new();
        mock_codec.expect_decompress().never();

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            codec: Arc::new(mock_codec),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 5 }).await;
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_fail_when_photo_cannot_be_decoded() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_product(id, "Widget", 1, b"jpeg-bytes"))));
        let mut mock_codec = MockCodec::new();
        mock_codec
            .expect_decompress()
            .returning(|_| Err(PhotoError::Decompression));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            codec: Arc::new(mock_codec),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 5 }).await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Photo(PhotoError::Decompression)
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            codec: marker_codec(),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 5 }).await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
