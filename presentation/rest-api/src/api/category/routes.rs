use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};

use crate::api::category::dto::{CategoryEnvelope, CategoryRequest};
use crate::api::envelope::{Failure, IntoFailure, parse_id};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Category management API
#[OpenApi]
impl CategoryApi {
    /// List all categories
    ///
    /// An empty category table is a successful, empty listing.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn search(&self) -> CategoryApiResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => CategoryApiResponse::Ok(Json(CategoryEnvelope::success(
                "Categories found",
                categories,
            ))),
            Err(err) => err
                .into_failure("Categories not found", "Error querying categories")
                .into(),
        }
    }

    /// Get a category by ID
    #[oai(path = "/categories/:id", method = "get", tag = "ApiTags::Categories")]
    async fn search_by_id(&self, id: Path<String>) -> CategoryApiResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(failure) => return failure.into(),
        };

        match self
            .get_by_id_use_case
            .execute(GetCategoryByIdParams { id })
            .await
        {
            Ok(category) => CategoryApiResponse::Ok(Json(CategoryEnvelope::success(
                "Category found",
                vec![category],
            ))),
            Err(err) => err
                .into_failure("Category not found", "Error querying category by id")
                .into(),
        }
    }

    /// Create a category
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn save(&self, body: Json<CategoryRequest>) -> CategoryApiResponse {
        match self
            .create_use_case
            .execute(CreateCategoryParams { name: body.0.name })
            .await
        {
            Ok(category) => CategoryApiResponse::Created(Json(CategoryEnvelope::success(
                "Category saved",
                vec![category],
            ))),
            Err(err) => err
                .into_failure("Category not found", "Error saving category")
                .into(),
        }
    }

    /// Rename a category
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update(&self, id: Path<String>, body: Json<CategoryRequest>) -> CategoryApiResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(failure) => return failure.into(),
        };

        match self
            .update_use_case
            .execute(UpdateCategoryParams {
                id,
                name: body.0.name,
            })
            .await
        {
            Ok(category) => CategoryApiResponse::Ok(Json(CategoryEnvelope::success(
                "Category updated",
                vec![category],
            ))),
            Err(err) => err
                .into_failure("Category to update not found", "Error updating category")
                .into(),
        }
    }

    /// Delete a category
    ///
    /// Fails while products still reference the category.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_by_id(&self, id: Path<String>) -> CategoryApiResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(failure) => return failure.into(),
        };

        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id })
            .await
        {
            Ok(()) => CategoryApiResponse::Ok(Json(CategoryEnvelope::success(
                "Category deleted",
                Vec::new(),
            ))),
            Err(err) => err
                .into_failure("Category not found", "Error deleting category")
                .into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CategoryApiResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryEnvelope>),
    #[oai(status = 201)]
    Created(Json<CategoryEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<CategoryEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<CategoryEnvelope>),
    #[oai(status = 409)]
    Conflict(Json<CategoryEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<CategoryEnvelope>),
}

impl From<Failure> for CategoryApiResponse {
    fn from(failure: Failure) -> Self {
        let body = Json(CategoryEnvelope::failure(failure.description));
        match failure.status.as_u16() {
            400 => CategoryApiResponse::BadRequest(body),
            404 => CategoryApiResponse::NotFound(body),
            409 => CategoryApiResponse::Conflict(body),
            _ => CategoryApiResponse::InternalError(body),
        }
    }
}
