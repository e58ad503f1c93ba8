use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;

/// Request body for creating or updating a category
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CategoryPayloadDto {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    /// Root category to nest under; omit or null for a root category
    pub parent_id: Option<i32>,

    #[validate(length(max = 255, message = "Icon must be at most 255 characters"))]
    pub ico: Option<String>,

    /// Position among siblings, from 0 up to the current sibling count
    pub sorting: Option<i64>,
}

/// Request body for deleting several root categories
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BatchDeleteCategoriesDto {
    #[serde(default)]
    pub ids: Vec<i32>,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub ico: String,
    pub sorting: i32,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            parent_id: c.parent_id,
            ico: c.ico,
            sorting: c.sorting,
        }
    }
}

/// Response DTO for category tree (hierarchical structure)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct CategoryTreeDto {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub ico: String,
    pub sorting: i32,
    pub children: Vec<CategoryTreeDto>,
}

impl CategoryTreeDto {
    /// Build the forest hanging under `parent_id` from a flat list of categories.
    ///
    /// Rows whose parent never appears are left out. Order follows the input.
    pub fn build_tree(categories: &[Category], parent_id: Option<i32>) -> Vec<CategoryTreeDto> {
        categories
            .iter()
            .filter(|c| c.parent_id == parent_id)
            .map(|category| Self::build_node(category, categories))
            .collect()
    }

    fn build_node(category: &Category, all_categories: &[Category]) -> CategoryTreeDto {
        CategoryTreeDto {
            id: category.id,
            name: category.name.clone(),
            parent_id: category.parent_id,
            ico: category.ico.clone(),
            sorting: category.sorting,
            children: Self::build_tree(all_categories, Some(category.id)),
        }
    }
}
