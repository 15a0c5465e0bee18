use async_trait::async_trait;
use mockall::mock;
use poem::Route;
use poem::test::TestClient;
use poem_openapi::{OpenApi, OpenApiService};

use business::domain::category::errors::CategoryError;
use business::domain::category::model::Category;
use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
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

pub fn client<T: OpenApi + 'static>(api: T) -> TestClient<Route> {
    TestClient::new(Route::new().nest("/", OpenApiService::new(api, "test", "0.0.0")))
}

mock! {
    pub GetAllCategories {}

    #[async_trait]
    impl GetAllCategoriesUseCase for GetAllCategories {
        async fn execute(&self) -> Result<Vec<Category>, CategoryError>;
    }
}

mock! {
    pub GetCategoryById {}

    #[async_trait]
    impl GetCategoryByIdUseCase for GetCategoryById {
        async fn execute(&self, params: GetCategoryByIdParams) -> Result<Category, CategoryError>;
    }
}

mock! {
    pub CreateCategory {}

    #[async_trait]
    impl CreateCategoryUseCase for CreateCategory {
        async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError>;
    }
}

mock! {
    pub UpdateCategory {}

    #[async_trait]
    impl UpdateCategoryUseCase for UpdateCategory {
        async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError>;
    }
}

mock! {
    pub DeleteCategory {}

    #[async_trait]
    impl DeleteCategoryUseCase for DeleteCategory {
        async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError>;
    }
}

mock! {
    pub CreateProduct {}

    #[async_trait]
    impl CreateProductUseCase for CreateProduct {
        async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub GetAllProducts {}

    #[async_trait]
    impl GetAllProductsUseCase for GetAllProducts {
        async fn execute(&self) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub GetProductById {}

    #[async_trait]
    impl GetProductByIdUseCase for GetProductById {
        async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub SearchProductsByName {}

    #[async_trait]
    impl SearchProductsByNameUseCase for SearchProductsByName {
        async fn execute(
            &self,
            params: SearchProductsByNameParams,
        ) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub UpdateProduct {}

    #[async_trait]
    impl UpdateProductUseCase for UpdateProduct {
        async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub DeleteProduct {}

    #[async_trait]
    impl DeleteProductUseCase for DeleteProduct {
        async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
    }
}
