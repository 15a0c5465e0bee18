use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, validate_fields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::PhotoCodec;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub codec: Arc<dyn PhotoCodec>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        validate_fields(&params.name, params.price, params.quantity)?;

        let category = self
            .category_repository
            .find_by_id(params.category_id)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to resolve category {}: {}",
                    params.category_id, e
                ));
                ProductError::Repository(e)
            })?
            .ok_or_else(|| {
                self.logger.warn(&format!(
                    "Category {} not found for product {}",
                    params.category_id, params.id
                ));
                ProductError::CategoryNotFound
            })?;

        let existing = self
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

        let raw_photo = params.photo;
        let photo = self.codec.compress(&raw_photo).map_err(|e| {
            self.logger.error(&format!(
                "Failed to encode photo of product {}: {}",
                params.id, e
            ));
            ProductError::Photo(e)
        })?;
        // The resolved category is attached, never an id echoed from the request.
        let updated = existing.overwrite(NewProductProps {
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            photo,
            category,
        })?;

        let saved = self
            .repository
            .update(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => {
                    self.logger.error(&format!(
                        "Failed to update product {}: {}",
                        params.id, other
                    ));
                    ProductError::Repository(other)
                }
            })?;

        self.logger
            .info(&format!("Product updated: {}", saved.id));
        Ok(saved.with_photo(raw_photo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{
        MockCategoryRepo, MockLog, MockProductRepo, category, marker_codec, mock_logger, stored,
        stored_product,
    };

    fn params() -> UpdateProductParams {
        UpdateProductParams {
            id: 5,
            category_id: 2,
            name: "Updated Widget".to_string(),
            price: 19.5,
            quantity: 42,
            photo: b"new-photo".to_vec(),
        }
    }

    fn categories_resolving() -> MockCategoryRepo {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_find_by_id()
            .returning(|id| Ok(Some(category(id, "Garden"))));
        mock_categories
    }

    #[tokio::test]
    async fn should_overwrite_all_mutable_fields() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_product(id, "Widget", 1, b"old-photo"))));
        mock_repo
            .expect_update()
            .withf(|p| {
                p.id == 5
                    && p.name == "Updated Widget"
                    && p.price == 19.5
                    && p.quantity == 42
                    && p.photo == stored(b"new-photo")
                    && p.category == category(2, "Garden")
            })
            .times(1)
            .returning(|p| Ok(p.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories_resolving()),
            codec: marker_codec(),
            logger: mock_logger(),
        };

        let product = use_case.execute(params()).await.unwrap();
        assert_eq!(product.id, 5);
        assert_eq!(product.name, "Updated Widget");
        assert_eq!(product.price, 19.5);
        assert_eq!(product.quantity, 42);
        assert_eq!(product.photo, b"new-photo".to_vec());
        assert_eq!(product.category.id, 2);
    }

    #[tokio::test]
    async fn should_return_category_not_found_before_looking_up_product() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories.expect_find_by_id().returning(|_| Ok(None));
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(mock_categories),
            codec: marker_codec(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;
        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_absent() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories_resolving()),
            codec: marker_codec(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_report_store_failure_instead_of_succeeding() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_product(id, "Widget", 1, b"old-photo"))));
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories_resolving()),
            codec: marker_codec(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_reject_negative_price_without_saving() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_product(id, "Widget", 1, b"old-photo"))));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories_resolving()),
            codec: marker_codec(),
            logger: mock_logger(),
        };

        let mut invalid = params();
        invalid.price = -1.0;
        let result = use_case.execute(invalid).await;
        assert!(matches!(result.unwrap_err(), ProductError::NegativePrice));
    }

    #[tokio::test]
    async fn should_validate_fields_before_any_lookup() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories.expect_find_by_id().never();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(mock_categories),
            codec: marker_codec(),
            logger: mock_logger(),
        };

        let mut invalid = params();
        invalid.name = "  ".to_string();
        invalid.category_id = 999;
        let result = use_case.execute(invalid).await;
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_log_error_when_product_lookup_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));
        mock_repo.expect_update().never();
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_error().times(1).returning(|_| ());

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories_resolving()),
            codec: marker_codec(),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(params()).await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
