use poem_openapi::Object;
use poem_openapi::types::Base64;

use business::domain::product::model::Product;

use crate::api::category::dto::CategoryResponse;
use crate::api::envelope::Metadata;

/// Body of product create and update requests.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price (non-negative)
    pub price: f64,
    /// Units in stock (non-negative)
    pub quantity: i32,
    /// Photo bytes, base64-encoded
    #[oai(skip_serializing_if_is_none)]
    pub photo: Option<Base64<Vec<u8>>>,
    /// Identifier of an existing category
    pub category_id: i64,
}

impl ProductRequest {
    pub fn photo_bytes(&mut self) -> Vec<u8> {
        self.photo.take().map(|photo| photo.0).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: i32,
    /// Photo bytes, base64-encoded
    pub photo: Base64<Vec<u8>>,
    /// Owning category
    pub category: CategoryResponse,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            photo: Base64(product.photo),
            category: product.category.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductData {
    pub products: Vec<ProductResponse>,
}

/// Response envelope for every product endpoint
#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub metadata: Metadata,
    pub data: ProductData,
}

impl ProductEnvelope {
    pub fn success(description: &str, products: Vec<Product>) -> Self {
        Self {
            metadata: Metadata::ok(description),
            data: ProductData {
                products: products.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::nok(description),
            data: ProductData {
                products: Vec::new(),
            },
        }
    }
}
