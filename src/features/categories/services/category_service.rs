use std::sync::Arc;

use crate::features::categories::dtos::{CategoryPayloadDto, CategoryResponseDto, CategoryTreeDto};
use crate::features::categories::error::CategoryError;
use crate::features::categories::hierarchy;
use crate::features::categories::models::{Category, CategoryFields};
use crate::features::categories::store::CategoryStore;
use crate::shared::constants::{DEFAULT_CATEGORY_ICON, DEFAULT_SORTING};

type Result<T> = std::result::Result<T, CategoryError>;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// All categories as a tree, with the total row count
    pub async fn list_tree(&self) -> Result<(Vec<CategoryTreeDto>, i64)> {
        let categories = self.store.fetch_all().await?;

        let total = categories.len() as i64;
        Ok((CategoryTreeDto::build_tree(&categories, None), total))
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(self.store.count_all().await?)
    }

    pub async fn create(&self, dto: CategoryPayloadDto) -> Result<CategoryResponseDto> {
        let name = required_name(dto.name.as_deref())?;

        if let Some(parent_id) = dto.parent_id {
            self.ensure_root_parent(parent_id).await?;
        }

        if self.store.count_by_name(&name).await? > 0 {
            return Err(CategoryError::DuplicateName(name));
        }

        let sorting = dto.sorting.unwrap_or(DEFAULT_SORTING);
        let sibling_count = self.store.count_by_parent(dto.parent_id).await?;
        hierarchy::validate_sorting(sorting, dto.parent_id, sibling_count)?;

        let fields = CategoryFields {
            name,
            parent_id: dto.parent_id,
            ico: icon_or_default(dto.ico),
            sorting: to_column(sorting)?,
        };

        let category = self.store.insert(&fields).await?;

        tracing::info!(category_id = category.id, "Category created");
        Ok(category.into())
    }

    pub async fn update(&self, id: i32, dto: CategoryPayloadDto) -> Result<CategoryResponseDto> {
        let name = required_name(dto.name.as_deref())?;

        if dto.parent_id == Some(id) {
            return Err(CategoryError::SelfParent(id));
        }

        let current = self
            .store
            .fetch_by_id(id)
            .await?
            .ok_or(CategoryError::CategoryNotFound(id))?;

        if let Some(parent_id) = dto.parent_id {
            self.ensure_root_parent(parent_id).await?;

            if self.store.count_by_parent(Some(id)).await? > 0 {
                return Err(CategoryError::InvalidParent(format!(
                    "category {} has children and cannot be nested",
                    id
                )));
            }
        }

        if name != current.name && self.store.count_by_name(&name).await? > 0 {
            return Err(CategoryError::DuplicateName(name));
        }

        let sorting = self.resolve_sorting(&current, dto.parent_id, dto.sorting).await?;

        let fields = CategoryFields {
            name,
            parent_id: dto.parent_id,
            ico: dto.ico.filter(|ico| !ico.trim().is_empty()).unwrap_or(current.ico),
            sorting,
        };

        let category = self
            .store
            .update(id, &fields)
            .await?
            .ok_or(CategoryError::CategoryNotFound(id))?;

        tracing::info!(category_id = id, "Category updated");
        Ok(category.into())
    }

    /// Delete a category and everything beneath it
    pub async fn delete(&self, id: i32) -> Result<()> {
        hierarchy::delete_subtree(self.store.as_ref(), id).await
    }

    /// Delete several root categories with their subtrees
    pub async fn delete_many(&self, ids: &[i32]) -> Result<String> {
        hierarchy::delete_many(self.store.as_ref(), ids).await
    }

    async fn ensure_root_parent(&self, parent_id: i32) -> Result<()> {
        match self.store.fetch_by_id(parent_id).await? {
            Some(parent) if parent.is_root() => Ok(()),
            Some(_) => Err(CategoryError::InvalidParent(format!(
                "category {} is not a root category",
                parent_id
            ))),
            None => Err(CategoryError::InvalidParent(format!(
                "category {} does not exist",
                parent_id
            ))),
        }
    }

    /// Position for an updated category.
    ///
    /// Inside its current group the category does not count as its own sibling. Without an
    /// explicit position it keeps its place, or goes last when it changes group.
    async fn resolve_sorting(
        &self,
        current: &Category,
        parent_id: Option<i32>,
        requested: Option<i64>,
    ) -> Result<i32> {
        let same_group = current.parent_id == parent_id;
        let mut sibling_count = self.store.count_by_parent(parent_id).await?;
        if same_group {
            sibling_count -= 1;
        }

        match requested {
            Some(sorting) => {
                hierarchy::validate_sorting(sorting, parent_id, sibling_count)?;
                to_column(sorting)
            }
            None if same_group => Ok(current.sorting),
            None => to_column(sibling_count),
        }
    }
}

fn required_name(name: Option<&str>) -> Result<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or(CategoryError::MissingField("name"))
}

fn icon_or_default(ico: Option<String>) -> String {
    ico.filter(|ico| !ico.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string())
}

fn to_column(sorting: i64) -> Result<i32> {
    i32::try_from(sorting).map_err(|_| CategoryError::InvalidSorting(sorting))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::store::memory::{category, InMemoryCategoryStore};
    use tokio_test::{assert_err, assert_ok};

    fn service_with(rows: Vec<Category>) -> (CategoryService, Arc<InMemoryCategoryStore>) {
        let store = Arc::new(InMemoryCategoryStore::with_rows(rows));
        (CategoryService::new(store.clone()), store)
    }

    fn scenario() -> Vec<Category> {
        vec![
            category(1, "Tech", None),
            category(2, "AI", Some(1)),
            category(3, "Life", None),
        ]
    }

    fn payload(name: &str, parent_id: Option<i32>, sorting: Option<i64>) -> CategoryPayloadDto {
        CategoryPayloadDto {
            name: Some(name.to_string()),
            parent_id,
            ico: None,
            sorting,
        }
    }

    #[tokio::test]
    async fn test_list_tree_returns_forest_and_total() {
        let (service, _) = service_with(scenario());

        let (tree, total) = assert_ok!(service.list_tree().await);

        assert_eq!(total, 3);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children[0].name, "AI");
    }

    #[tokio::test]
    async fn test_create_root_category_uses_defaults() {
        let (service, _) = service_with(scenario());

        let created = assert_ok!(service.create(payload("Music", None, None)).await);

        assert_eq!(created.id, 4);
        assert_eq!(created.parent_id, None);
        assert_eq!(created.ico, DEFAULT_CATEGORY_ICON);
        assert_eq!(created.sorting, 0);
    }

    #[tokio::test]
    async fn test_create_child_at_end_of_group() {
        let (service, store) = service_with(scenario());

        let created = assert_ok!(service.create(payload("Rust", Some(1), Some(1))).await);

        assert_eq!(created.parent_id, Some(1));
        assert_eq!(created.sorting, 1);
        assert!(store.get(created.id).is_some());
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let (service, _) = service_with(scenario());

        let err = assert_err!(service.create(payload("   ", None, None)).await);

        assert!(matches!(err, CategoryError::MissingField("name")));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let (service, store) = service_with(scenario());

        let err = assert_err!(service.create(payload("AI", None, None)).await);

        assert!(matches!(err, CategoryError::DuplicateName(ref n) if n == "AI"));
        assert_eq!(store.ids(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_parent() {
        let (service, _) = service_with(scenario());

        let err = assert_err!(service.create(payload("Rust", Some(99), None)).await);

        assert!(matches!(err, CategoryError::InvalidParent(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_third_level() {
        let (service, _) = service_with(scenario());

        let err = assert_err!(service.create(payload("LLM", Some(2), None)).await);

        assert!(matches!(err, CategoryError::InvalidParent(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_sorting_past_sibling_count() {
        let (service, store) = service_with(scenario());

        // two root categories exist, so 2 is the last valid position
        let err = assert_err!(service.create(payload("Music", None, Some(3))).await);

        assert!(matches!(err, CategoryError::SortingOutOfRange { .. }));
        assert_eq!(store.ids(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_sorting() {
        let (service, _) = service_with(scenario());

        let err = assert_err!(service.create(payload("Music", None, Some(-2))).await);

        assert!(matches!(err, CategoryError::InvalidSorting(-2)));
    }

    #[tokio::test]
    async fn test_update_rejects_self_parent() {
        let (service, _) = service_with(vec![category(5, "Books", None)]);

        let err = assert_err!(service.update(5, payload("Books", Some(5), None)).await);

        assert!(matches!(err, CategoryError::SelfParent(5)));
    }

    #[tokio::test]
    async fn test_update_unknown_category_is_not_found() {
        let (service, _) = service_with(scenario());

        let err = assert_err!(service.update(42, payload("Nope", None, None)).await);

        assert!(matches!(err, CategoryError::CategoryNotFound(42)));
    }

    #[tokio::test]
    async fn test_update_rejects_non_root_parent() {
        let (service, _) = service_with(scenario());

        let err = assert_err!(service.update(3, payload("Life", Some(2), None)).await);

        assert!(matches!(err, CategoryError::InvalidParent(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_nesting_category_with_children() {
        let (service, _) = service_with(scenario());

        let err = assert_err!(service.update(1, payload("Tech", Some(3), None)).await);

        assert!(matches!(err, CategoryError::InvalidParent(_)));
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_name() {
        let (service, store) = service_with(scenario());

        let updated = assert_ok!(service.update(3, payload("Life", None, None)).await);

        assert_eq!(updated.name, "Life");
        assert_eq!(store.get(3).map(|c| c.name), Some("Life".to_string()));
    }

    #[tokio::test]
    async fn test_update_rejects_name_taken_by_other_category() {
        let (service, _) = service_with(scenario());

        let err = assert_err!(service.update(3, payload("Tech", None, None)).await);

        assert!(matches!(err, CategoryError::DuplicateName(_)));
    }

    #[tokio::test]
    async fn test_update_within_group_does_not_count_itself() {
        let (service, _) = service_with(scenario());

        // roots are 1 and 3; moving 3 within the root group allows positions 0..=1
        assert_ok!(service.update(3, payload("Life", None, Some(1))).await);
        let err = assert_err!(service.update(3, payload("Life", None, Some(2))).await);

        assert!(matches!(err, CategoryError::SortingOutOfRange { .. }));
    }

    #[tokio::test]
    async fn test_update_moving_group_appends_by_default() {
        let (service, store) = service_with(scenario());

        let moved = assert_ok!(service.update(3, payload("Life", Some(1), None)).await);

        assert_eq!(moved.parent_id, Some(1));
        assert_eq!(moved.sorting, 1);
        assert_eq!(store.get(3).and_then(|c| c.parent_id), Some(1));
    }

    #[tokio::test]
    async fn test_update_keeps_icon_when_omitted() {
        let mut rows = scenario();
        rows[2].ico = "leaf".to_string();
        let (service, _) = service_with(rows);

        let updated = assert_ok!(service.update(3, payload("Living", None, None)).await);

        assert_eq!(updated.ico, "leaf");
        assert_eq!(updated.name, "Living");
    }

    #[tokio::test]
    async fn test_delete_removes_subtree() {
        let (service, store) = service_with(scenario());

        assert_ok!(service.delete(1).await);

        assert_eq!(store.deleted(), vec![2, 1]);
        assert_eq!(store.ids(), vec![3]);
    }

    #[tokio::test]
    async fn test_delete_many_rejects_child_selection() {
        let (service, store) = service_with(scenario());

        let err = assert_err!(service.delete_many(&[1, 2]).await);

        assert!(matches!(err, CategoryError::PartialOrNonRootSelection));
        assert!(store.deleted().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_store_error() {
        let store = Arc::new(InMemoryCategoryStore::with_rows(scenario()).fail_reads());
        let service = CategoryService::new(store);

        let err = assert_err!(service.list_tree().await);
        assert!(matches!(err, CategoryError::Store(_)));

        let err = assert_err!(service.count().await);
        assert!(matches!(err, CategoryError::Store(_)));
    }
}
