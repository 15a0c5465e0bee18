use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Category, NewCategory};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError>;
    async fn save(&self, category: &NewCategory) -> Result<Category, RepositoryError>;
    async fn update(&self, category: &Category) -> Result<Category, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
