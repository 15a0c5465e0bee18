use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let name = NewCategory::new(params.name)?;

        let existing = self
            .repository
            .find_by_id(params.id)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to load category {}: {}", params.id, e));
                CategoryError::Repository(e)
            })?
            .ok_or_else(|| {
                self.logger
                    .warn(&format!("Category to update not found: {}", params.id));
                CategoryError::NotFound
            })?;

        let updated = self
            .repository
            .update(&existing.renamed(name))
            .await
            .map_err(|e| {
                let error = CategoryError::from_repository(e);
                if let CategoryError::Repository(cause) = &error {
                    self.logger.error(&format!(
                        "Failed to update category {}: {}",
                        params.id, cause
                    ));
                }
                error
            })?;

        self.logger
            .info(&format!("Category updated: {}", updated.id));
        Ok(updated)
    }
}
