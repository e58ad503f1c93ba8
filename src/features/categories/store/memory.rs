use std::sync::Mutex;

use async_trait::async_trait;

use super::{CategoryStore, StoreResult};
use crate::features::categories::models::{Category, CategoryFields};

/// In-memory category table that records every delete, in order
pub struct InMemoryCategoryStore {
    state: Mutex<MemoryState>,
}

struct MemoryState {
    rows: Vec<Category>,
    next_id: i32,
    deleted: Vec<i32>,
    failing_delete: Option<i32>,
    failing_reads: bool,
}

pub fn category(id: i32, name: &str, parent_id: Option<i32>) -> Category {
    Category {
        id,
        name: name.to_string(),
        parent_id,
        ico: "default".to_string(),
        sorting: 0,
    }
}

impl InMemoryCategoryStore {
    pub fn with_rows(rows: Vec<Category>) -> Self {
        let next_id = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(MemoryState {
                rows,
                next_id,
                deleted: Vec::new(),
                failing_delete: None,
                failing_reads: false,
            }),
        }
    }

    /// Make `delete(id)` return an error
    pub fn fail_delete_of(self, id: i32) -> Self {
        self.state.lock().unwrap().failing_delete = Some(id);
        self
    }

    /// Make `fetch_all` and `count_all` return an error
    pub fn fail_reads(self) -> Self {
        self.state.lock().unwrap().failing_reads = true;
        self
    }

    pub fn deleted(&self) -> Vec<i32> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.state.lock().unwrap().rows.iter().map(|c| c.id).collect()
    }

    pub fn get(&self, id: i32) -> Option<Category> {
        self.state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }
}

fn sorted(mut rows: Vec<Category>) -> Vec<Category> {
    rows.sort_by_key(|c| (c.sorting, c.id));
    rows
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn fetch_by_id(&self, id: i32) -> StoreResult<Option<Category>> {
        Ok(self.get(id))
    }

    async fn fetch_by_parent(&self, parent_id: Option<i32>) -> StoreResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        Ok(sorted(
            state
                .rows
                .iter()
                .filter(|c| c.parent_id == parent_id)
                .cloned()
                .collect(),
        ))
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        if state.failing_reads {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(sorted(state.rows.clone()))
    }

    async fn count_by_parent(&self, parent_id: Option<i32>) -> StoreResult<i64> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().filter(|c| c.parent_id == parent_id).count() as i64)
    }

    async fn count_by_name(&self, name: &str) -> StoreResult<i64> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().filter(|c| c.name == name).count() as i64)
    }

    async fn count_all(&self) -> StoreResult<i64> {
        let state = self.state.lock().unwrap();
        if state.failing_reads {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(state.rows.len() as i64)
    }

    async fn insert(&self, fields: &CategoryFields) -> StoreResult<Category> {
        let mut state = self.state.lock().unwrap();
        let row = Category {
            id: state.next_id,
            name: fields.name.clone(),
            parent_id: fields.parent_id,
            ico: fields.ico.clone(),
            sorting: fields.sorting,
        };
        state.next_id += 1;
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, fields: &CategoryFields) -> StoreResult<Option<Category>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.iter_mut().find(|c| c.id == id).map(|row| {
            row.name = fields.name.clone();
            row.parent_id = fields.parent_id;
            row.ico = fields.ico.clone();
            row.sorting = fields.sorting;
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing_delete == Some(id) {
            return Err(sqlx::Error::Protocol(format!("delete of {} rejected", id)));
        }
        state.rows.retain(|c| c.id != id);
        state.deleted.push(id);
        Ok(())
    }

    async fn fetch_by_ids_root_only(&self, ids: &[i32]) -> StoreResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .filter(|c| ids.contains(&c.id) && c.is_root())
            .cloned()
            .collect())
    }
}
