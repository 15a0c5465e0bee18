use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search_by_name::{
    SearchProductsByNameParams, SearchProductsByNameUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::envelope::{Failure, IntoFailure, parse_id};
use crate::api::product::dto::{ProductEnvelope, ProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_by_name_use_case: Arc<dyn SearchProductsByNameUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_by_name_use_case: Arc<dyn SearchProductsByNameUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_by_name_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and deleting inventory products.
/// Photos travel base64-encoded and are stored compressed.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// The referenced category must exist.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn save(&self, body: Json<ProductRequest>) -> ProductApiResponse {
        let mut request = body.0;
        let params = CreateProductParams {
            photo: request.photo_bytes(),
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            category_id: request.category_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => ProductApiResponse::Created(Json(ProductEnvelope::success(
                "Product saved",
                vec![product],
            ))),
            Err(err) => {
                let mut failure = err.into_failure("Product not found", "Error saving product");
                // A rejected write is reported as a problem with the submitted data.
                if failure.status == StatusCode::INTERNAL_SERVER_ERROR {
                    failure.status = StatusCode::BAD_REQUEST;
                }
                failure.into()
            }
        }
    }

    /// List all products
    ///
    /// An empty inventory answers 404.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ProductApiResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                ProductApiResponse::Ok(Json(ProductEnvelope::success("Products found", products)))
            }
            Err(err) => err
                .into_failure("Products not found", "Error searching products")
                .into(),
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn search_by_id(&self, id: Path<String>) -> ProductApiResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(failure) => return failure.into(),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => ProductApiResponse::Ok(Json(ProductEnvelope::success(
                "Product found",
                vec![product],
            ))),
            Err(err) => err
                .into_failure("Product not found", "Error searching product")
                .into(),
        }
    }

    /// Search products by name
    ///
    /// Case-insensitive substring match. No match answers 404.
    #[oai(path = "/products/filter/:name", method = "get", tag = "ApiTags::Products")]
    async fn search_by_name(&self, name: Path<String>) -> ProductApiResponse {
        match self
            .search_by_name_use_case
            .execute(SearchProductsByNameParams { name: name.0 })
            .await
        {
            Ok(products) => {
                ProductApiResponse::Ok(Json(ProductEnvelope::success("Products found", products)))
            }
            Err(err) => err
                .into_failure("No product matches the name", "Error searching product")
                .into(),
        }
    }

    /// Update a product
    ///
    /// Overwrites name, price, quantity, photo and category.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> ProductApiResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(failure) => return failure.into(),
        };

        let mut request = body.0;
        let params = UpdateProductParams {
            id,
            photo: request.photo_bytes(),
            category_id: request.category_id,
            name: request.name,
            price: request.price,
            quantity: request.quantity,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => ProductApiResponse::Ok(Json(ProductEnvelope::success(
                "Product updated",
                vec![product],
            ))),
            Err(err) => err
                .into_failure("Product to update not found", "Error updating product")
                .into(),
        }
    }

    /// Delete a product
    ///
    /// Deleting an unknown id is not an error.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> ProductApiResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(failure) => return failure.into(),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => ProductApiResponse::Ok(Json(ProductEnvelope::success(
                "Product deleted",
                Vec::new(),
            ))),
            Err(err) => err
                .into_failure("Product not found", "Error deleting product")
                .into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductApiResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 201)]
    Created(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ProductEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ProductEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ProductEnvelope>),
}

impl From<Failure> for ProductApiResponse {
    fn from(failure: Failure) -> Self {
        let body = Json(ProductEnvelope::failure(failure.description));
        match failure.status.as_u16() {
            400 => ProductApiResponse::BadRequest(body),
            404 => ProductApiResponse::NotFound(body),
            _ => ProductApiResponse::InternalError(body),
        }
    }
}
