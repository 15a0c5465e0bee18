use super::errors::CategoryError;

/// A persisted category. Identifiers are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A category that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Result<Self, CategoryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }
        Ok(Self { name })
    }
}

impl Category {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, name: String) -> Self {
        Self { id, name }
    }

    /// Returns a copy of this category carrying an already validated name.
    pub fn renamed(&self, name: NewCategory) -> Self {
        Self {
            id: self.id,
            name: name.name,
        }
    }
}
