use poem_openapi::Object;

use business::domain::category::model::Category;

use crate::api::envelope::Metadata;

#[derive(Debug, Clone, Object)]
pub struct CategoryRequest {
    /// Category name (cannot be empty, must be unique)
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct CategoryResponse {
    /// Category identifier
    pub id: i64,
    /// Category name
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryData {
    pub categories: Vec<CategoryResponse>,
}

/// Response envelope for every category endpoint
#[derive(Debug, Clone, Object)]
pub struct CategoryEnvelope {
    pub metadata: Metadata,
    pub data: CategoryData,
}

impl CategoryEnvelope {
    pub fn success(description: &str, categories: Vec<Category>) -> Self {
        Self {
            metadata: Metadata::ok(description),
            data: CategoryData {
                categories: categories.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::nok(description),
            data: CategoryData {
                categories: Vec::new(),
            },
        }
    }
}
