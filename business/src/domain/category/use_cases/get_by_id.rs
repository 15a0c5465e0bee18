use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

pub struct GetCategoryByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetCategoryByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoryByIdParams) -> Result<Category, CategoryError>;
}
