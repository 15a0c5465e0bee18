use super::errors::ProductError;
use crate::domain::category::model::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub photo: Vec<u8>,
    pub category: Category,
}

/// A product that has not been stored yet. The store assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub photo: Vec<u8>,
    pub category: Category,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub photo: Vec<u8>,
    pub category: Category,
}

/// Checks the caller-supplied fields of a product. Needs no store access.
pub fn validate_fields(name: &str, price: f64, quantity: i32) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::NegativePrice);
    }
    if quantity < 0 {
        return Err(ProductError::NegativeQuantity);
    }
    Ok(())
}

fn validate(props: &NewProductProps) -> Result<(), ProductError> {
    validate_fields(&props.name, props.price, props.quantity)
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props)?;

        Ok(Self {
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            photo: props.photo,
            category: props.category,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        price: f64,
        quantity: i32,
        photo: Vec<u8>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
            photo,
            category,
        }
    }

    /// Overwrites every mutable field while keeping the identity.
    pub fn overwrite(&self, props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props)?;

        Ok(Self {
            id: self.id,
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            photo: props.photo,
            category: props.category,
        })
    }

    pub fn with_photo(self, photo: Vec<u8>) -> Self {
        Self { photo, ..self }
    }
}
