use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct SearchProductsByNameParams {
    pub name: String,
}

/// Returns every product whose name contains the given text, ignoring case.
/// No match at all is reported as [`ProductError::NotFound`].
#[async_trait]
pub trait SearchProductsByNameUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchProductsByNameParams,
    ) -> Result<Vec<Product>, ProductError>;
}
