use crate::storage::todo::now_millis;
use crate::storage::{NewTodo, Todo, TodoChanges, TodoFilter, TodoId};
use crate::trace_err;

use super::error::SledStorageError;
use super::{BincodeConfig, FromBytesWithConfig, SledStorage, ToBytesWithConfig};
use crate::storage::{StorageError, TodoStorage, TodoVersion};
use async_trait::async_trait;
use sled::Tree;
use tracing::{info, info_span, instrument, warn, Span};

#[async_trait]
impl TodoStorage for SledStorage {
    #[instrument(name = "SledStorage::save_todo", skip_all)]
    async fn save(&self, new: NewTodo) -> Result<Todo, StorageError> {
        let id = TodoId::new();
        info!(todo_id = %id, "save todo");

        let todo = new.into_todo(id, now_millis());

        let encoded: Vec<u8> = trace_err!(
            TodoVersion::from(todo.clone()).to_bytes(&self.bincode_config),
            "failed to bin encode todo"
        )
        .map_err(SledStorageError::from)?;

        let old_value = trace_err!(
            self.todo_tree.insert(id.as_key(), encoded),
            "failed to write todo into storage"
        )
        .map_err(SledStorageError::from)?;
        if old_value.is_some() {
            warn!(todo_id = %id, "save replaced an existing document");
        }

        Ok(todo)
    }

    #[instrument(name = "SledStorage::update_todo", skip_all)]
    async fn update(
        &self,
        filter: TodoFilter,
        changes: TodoChanges,
    ) -> Result<Option<Todo>, StorageError> {
        // cloning tree is cheap: struct Tree{inner: Arc<TreeInner>}
        let (todo_tree, bincode_config) = info_span!("Cloning tree and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| update_todo(filter, changes, &todo_tree, &bincode_config))
        })
        .await?
    }

    #[instrument(name = "SledStorage::find_one_todo", skip_all)]
    async fn find_one(&self, filter: TodoFilter) -> Result<Option<Todo>, StorageError> {
        info!(filter = ?filter, "find one todo");

        let (todo_tree, bincode_config) = info_span!("Cloning tree and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| find_one_todo(filter, &todo_tree, &bincode_config))
        })
        .await?
    }

    #[instrument(name = "SledStorage::get_all_todos", skip_all)]
    async fn get_all(&self, filter: TodoFilter) -> Result<Vec<Todo>, StorageError> {
        info!(filter = ?filter, "get all todos");

        let (todo_tree, bincode_config) = info_span!("Cloning tree and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| get_all_todos(filter, &todo_tree, &bincode_config))
        })
        .await?
    }
}

fn decode_todo(bytes: &[u8], config: &BincodeConfig) -> Result<Todo, SledStorageError> {
    Ok(Todo::from(trace_err!(
        TodoVersion::from_bytes(bytes, config),
        "failed to bin decode todo"
    )?))
}

/// Locates the key the filter selects. A filter with an id addresses its
/// document directly; without one the first match in key order wins.
fn candidate_key(
    filter: &TodoFilter,
    todo_tree: &Tree,
    config: &BincodeConfig,
) -> Result<Option<[u8; 16]>, SledStorageError> {
    if let Some(id) = filter.id {
        return Ok(Some(id.as_key()));
    }

    for entry in todo_tree.iter() {
        let (_, value) = entry?;
        let todo = decode_todo(&value, config)?;
        if filter.matches(&todo) {
            return Ok(Some(todo.id.as_key()));
        }
    }
    Ok(None)
}

#[instrument(name = "update_todo", skip_all)]
fn update_todo(
    filter: TodoFilter,
    changes: TodoChanges,
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<Option<Todo>, StorageError> {
    info!(filter = ?filter, changes = ?changes, "update todo");

    let Some(key) = candidate_key(&filter, todo_tree, bincode_config)
        .map_err(SledStorageError::from)?
    else {
        return Ok(None);
    };

    let updated = todo_tree
        .transaction(|tx| {
            let value = trace_err!(
                tx.get(key).map_err(SledStorageError::from),
                "failed to read todo from storage"
            )?;

            let Some(value) = value else {
                return Ok(None);
            };

            let mut todo = trace_err!(
                decode_todo(&value, bincode_config),
                "failed to bin decode todo"
            )?;

            // Filter re-checked inside the transaction; the document may
            // have changed between candidate lookup and here.
            if !filter.matches(&todo) {
                return Ok(None);
            }

            todo.apply(&changes, now_millis());

            let encoded = trace_err!(
                TodoVersion::from(todo.clone()).to_bytes(bincode_config),
                "failed to bin encode todo"
            )?;

            trace_err!(
                tx.insert(&key, encoded).map_err(SledStorageError::from),
                "failed to write todo into storage"
            )?;

            Ok(Some(todo))
        })
        .map_err(SledStorageError::from)?;

    Ok(updated)
}

#[instrument(name = "find_one_todo", skip_all)]
fn find_one_todo(
    filter: TodoFilter,
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<Option<Todo>, StorageError> {
    if let Some(id) = filter.id {
        let value = trace_err!(
            todo_tree.get(id.as_key()),
            "failed to read todo from storage"
        )
        .map_err(SledStorageError::from)?;

        return match value {
            Some(value) => {
                let todo = decode_todo(&value, bincode_config)?;
                Ok(filter.matches(&todo).then_some(todo))
            }
            None => Ok(None),
        };
    }

    for entry in todo_tree.iter() {
        let (_, value) = trace_err!(entry, "failed to scan todo tree")
            .map_err(SledStorageError::from)?;
        let todo = decode_todo(&value, bincode_config)?;
        if filter.matches(&todo) {
            return Ok(Some(todo));
        }
    }
    Ok(None)
}

#[instrument(name = "get_all_todos", skip_all)]
fn get_all_todos(
    filter: TodoFilter,
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<Vec<Todo>, StorageError> {
    let mut todos = Vec::new();
    for entry in todo_tree.iter() {
        let (_, value) = trace_err!(entry, "failed to scan todo tree")
            .map_err(SledStorageError::from)?;
        let todo = decode_todo(&value, bincode_config)?;
        if filter.matches(&todo) {
            todos.push(todo);
        }
    }

    info!(count = todos.len(), "collected todos");

    Ok(todos)
}

#[cfg(test)]
mod tests;
