use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;

use business::domain::category::model::Category;
use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

/// A product row joined with its owning category.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub photo: Vec<u8>,
    pub category_id: i64,
    pub category_name: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = price_from_column(&self.price)?;
        Ok(Product::from_repository(
            self.id,
            self.name,
            price,
            self.quantity,
            self.photo,
            Category::from_repository(self.category_id, self.category_name),
        ))
    }
}

/// Converts a domain price into the two-decimal NUMERIC stored in the table.
pub fn price_to_column(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price)
        .map(|value| value.round(2))
        .ok_or_else(RepositoryError::persistence)
}

fn price_from_column(price: &BigDecimal) -> Result<f64, RepositoryError> {
    price
        .to_f64()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            tracing::error!("price column {} does not fit in f64", price);
            RepositoryError::persistence()
        })
}
