use thiserror::Error;

use crate::core::error::AppError;

/// Failures of the category hierarchy operations
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Sorting must be a non-negative integer, got {0}")]
    InvalidSorting(i64),

    #[error(
        "Sorting {sorting} is out of range for parent {}: at most {sibling_count} allowed",
        display_parent(.parent_id)
    )]
    SortingOutOfRange {
        sorting: i64,
        parent_id: Option<i32>,
        sibling_count: i64,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Category name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid parent: {0}")]
    InvalidParent(String),

    #[error("Category {0} cannot be its own parent")]
    SelfParent(i32),

    #[error("Category {0} not found")]
    CategoryNotFound(i32),

    #[error("Some categories do not exist or are not root categories")]
    PartialOrNonRootSelection,

    #[error("Failed to delete category {id}")]
    DeleteFailed {
        id: i32,
        #[source]
        source: sqlx::Error,
    },

    #[error("Category store error: {0}")]
    Store(#[from] sqlx::Error),
}

fn display_parent(parent_id: &Option<i32>) -> String {
    match parent_id {
        Some(id) => id.to_string(),
        None => "root".to_string(),
    }
}

impl CategoryError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CategoryError::InvalidSorting(_)
                | CategoryError::SortingOutOfRange { .. }
                | CategoryError::MissingField(_)
                | CategoryError::DuplicateName(_)
                | CategoryError::InvalidParent(_)
                | CategoryError::SelfParent(_)
        )
    }
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            e if e.is_validation() => AppError::Validation(e.to_string()),
            e @ (CategoryError::CategoryNotFound(_) | CategoryError::PartialOrNonRootSelection) => {
                AppError::NotFound(e.to_string())
            }
            CategoryError::DeleteFailed { id, source } => {
                tracing::error!("Failed to delete category {}: {:?}", id, source);
                AppError::OperationFailed(format!("Failed to delete category {}", id))
            }
            CategoryError::Store(e) => AppError::Database(e),
            e => AppError::Internal(e.to_string()),
        }
    }
}
