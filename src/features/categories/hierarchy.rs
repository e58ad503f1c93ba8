//! Structural operations on the two-level category tree.
//!
//! Deletion walks the store one node at a time and removes children before their parent.
//! Nothing here runs inside a transaction: when a delete fails partway, rows removed earlier
//! in the same chain stay removed.

use futures::future::BoxFuture;

use crate::features::categories::error::CategoryError;
use crate::features::categories::store::CategoryStore;

pub const BATCH_DELETE_MESSAGE: &str = "Batch delete succeeded";

/// Check a requested sibling position against the size of the target sibling group.
///
/// Any position from `0` up to and including `sibling_count` (append at the end) is accepted.
pub fn validate_sorting(
    sorting: i64,
    parent_id: Option<i32>,
    sibling_count: i64,
) -> Result<(), CategoryError> {
    if sorting < 0 {
        return Err(CategoryError::InvalidSorting(sorting));
    }
    if sorting > sibling_count {
        return Err(CategoryError::SortingOutOfRange {
            sorting,
            parent_id,
            sibling_count,
        });
    }
    Ok(())
}

/// Delete a category together with all of its descendants.
pub fn delete_subtree(
    store: &dyn CategoryStore,
    id: i32,
) -> BoxFuture<'_, Result<(), CategoryError>> {
    Box::pin(async move {
        let category = store
            .fetch_by_id(id)
            .await?
            .ok_or(CategoryError::CategoryNotFound(id))?;

        let children = store.fetch_by_parent(Some(category.id)).await?;
        for child in children {
            delete_subtree(store, child.id).await?;
        }

        store
            .delete(id)
            .await
            .map_err(|source| CategoryError::DeleteFailed { id, source })?;

        tracing::debug!(category_id = id, "Category deleted");
        Ok(())
    })
}

/// Delete several root categories and their subtrees, in the given order.
///
/// The whole request is rejected before anything is deleted when an id is unknown or
/// names a child category.
pub async fn delete_many(
    store: &dyn CategoryStore,
    ids: &[i32],
) -> Result<String, CategoryError> {
    if ids.is_empty() {
        return Err(CategoryError::MissingField("ids"));
    }

    let roots = store.fetch_by_ids_root_only(ids).await?;
    if roots.len() != ids.len() {
        return Err(CategoryError::PartialOrNonRootSelection);
    }

    for &id in ids {
        delete_subtree(store, id).await?;
    }

    tracing::info!(count = ids.len(), "Categories deleted in batch");
    Ok(BATCH_DELETE_MESSAGE.to_string())
}
