use std::sync::Arc;

use async_trait::async_trait;

use super::photo::restore_photos;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::PhotoCodec;
use crate::domain::product::use_cases::search_by_name::{
    SearchProductsByNameParams, SearchProductsByNameUseCase,
};

pub struct SearchProductsByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub codec: Arc<dyn PhotoCodec>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsByNameUseCase for SearchProductsByNameUseCaseImpl {
    async fn execute(
        &self,
        params: SearchProductsByNameParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Searching products by name: {}", params.name));

        let products = self
            .repository
            .search_by_name(&params.name)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to search products by name {}: {}",
                    params.name, e
                ));
                ProductError::Repository(e)
            })?;

        if products.is_empty() {
            self.logger
                .warn(&format!("No product matches name: {}", params.name));
            return Err(ProductError::NotFound);
        }

        restore_photos(self.codec.as_ref(), products).map_err(|e| {
            self.logger
                .error(&format!("Failed to decode product photos: {}", e));
            ProductError::Photo(e)
        })
    }
}
