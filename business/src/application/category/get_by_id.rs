use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCategoryByIdUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryByIdUseCase for GetCategoryByIdUseCaseImpl {
    async fn execute(&self, params: GetCategoryByIdParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Fetching category by id: {}", params.id));

        let category = self.repository.find_by_id(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch category {}: {}", params.id, e));
            CategoryError::Repository(e)
        })?;

        category.ok_or_else(|| {
            self.logger
                .warn(&format!("Category not found: {}", params.id));
            CategoryError::NotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockCategoryRepo, category, mock_logger};
    use crate::domain::errors::RepositoryError;
    use mockall::predicate::eq;
    use proptest::prelude::*;

    #[tokio::test]
    async fn should_return_category_when_exists() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(category(id, "Kitchen"))));

        let use_case = GetCategoryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(GetCategoryByIdParams { id: 3 })
            .await
            .unwrap();
        assert_eq!(found, category(3, "Kitchen"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_category_is_absent() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetCategoryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetCategoryByIdParams { id: 42 }).await;
        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }

    #[tokio::test]
    async fn should_distinguish_store_failure_from_not_found() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetCategoryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetCategoryByIdParams { id: 1 }).await;
        assert!(matches!(
            result.unwrap_err(),
            CategoryError::Repository(RepositoryError::DatabaseError)
        ));
    }

    proptest! {
        #[test]
        fn should_return_exactly_the_stored_category_for_any_id(id in any::<i64>(), name in "[a-zA-Z ]{1,20}") {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let stored_name = name.clone();
            let mut mock_repo = MockCategoryRepo::new();
            mock_repo
                .expect_find_by_id()
                .with(eq(id))
                .returning(move |id| Ok(Some(category(id, &stored_name))));

            let use_case = GetCategoryByIdUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let found = runtime
                .block_on(use_case.execute(GetCategoryByIdParams { id }))
                .unwrap();
            prop_assert_eq!(found.id, id);
            prop_assert_eq!(found.name, name);
        }
    }
}
