use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product, validate_fields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::PhotoCodec;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub codec: Arc<dyn PhotoCodec>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product: {} in category {}",
            params.name, params.category_id
        ));

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
                    "Category {} not found for new product",
                    params.category_id
                ));
                ProductError::CategoryNotFound
            })?;

        let raw_photo = params.photo;
        let photo = self.codec.compress(&raw_photo).map_err(|e| {
            self.logger
                .error(&format!("Failed to encode product photo: {}", e));
            ProductError::Photo(e)
        })?;
        let product = NewProduct::new(NewProductProps {
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            photo,
            category,
        })?;

        let saved = self.repository.save(&product).await.map_err(|e| {
            self.logger.error(&format!("Failed to save product: {}", e));
            ProductError::Repository(e)
        })?;

        self.logger
            .info(&format!("Product created with id: {}", saved.id));
        Ok(saved.with_photo(raw_photo))
    }
}
