use std::sync::Arc;

use async_trait::async_trait;

use super::photo::restore_photos;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::PhotoCodec;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub codec: Arc<dyn PhotoCodec>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");

        let products = self.repository.get_all().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch products: {}", e));
            ProductError::Repository(e)
        })?;

        if products.is_empty() {
            self.logger.warn("Inventory has no products");
            return Err(ProductError::NotFound);
        }

        restore_photos(self.codec.as_ref(), products).map_err(|e| {
            self.logger
                .error(&format!("Failed to decode product photos: {}", e));
            ProductError::Photo(e)
        })
    }
}
