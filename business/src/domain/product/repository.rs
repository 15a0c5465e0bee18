use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    /// Case-insensitive substring match on the product name.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
