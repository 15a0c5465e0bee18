use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let new_category = NewCategory::new(params.name)?;

        let category = self
            .repository
            .save(&new_category)
            .await
            .map_err(|e| {
                let error = CategoryError::from_repository(e);
                if let CategoryError::Repository(cause) = &error {
                    self.logger
                        .error(&format!("Failed to save category: {}", cause));
                }
                error
            })?;

        self.logger
            .info(&format!("Category created with id: {}", category.id));
        Ok(category)
    }
}
