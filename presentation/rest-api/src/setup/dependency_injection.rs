use std::sync::Arc;

use compression::ZlibPhotoCodec;
use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search_by_name::SearchProductsByNameUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::codec_config::CodecConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub category_api: CategoryApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, codec_config: &CodecConfig) -> Self {
        let category_logger = Arc::new(TracingLogger::new("category"));
        let product_logger = Arc::new(TracingLogger::new("product"));

        // Infrastructure adapters
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let codec = Arc::new(ZlibPhotoCodec::with_level(codec_config.compression_level));

        // Category use cases
        let category_api = CategoryApi::new(
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger.clone(),
            }),
            Arc::new(GetCategoryByIdUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger.clone(),
            }),
            Arc::new(CreateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger.clone(),
            }),
            Arc::new(UpdateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger.clone(),
            }),
            Arc::new(DeleteCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger,
            }),
        );

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            codec: codec.clone(),
            logger: product_logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            codec: codec.clone(),
            logger: product_logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            codec: codec.clone(),
            logger: product_logger.clone(),
        });
        let search_by_name_use_case = Arc::new(SearchProductsByNameUseCaseImpl {
            repository: product_repository.clone(),
            codec: codec.clone(),
            logger: product_logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository,
            codec,
            logger: product_logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: product_logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_by_name_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            category_api,
            product_api,
        }
    }
}
