mod error;
mod ids;
mod sled;
mod todo;

#[cfg(feature = "integration_tests")]
pub use sled::test_util;
pub(crate) use sled::{error::SledStartupError, SledStorage};

use async_trait::async_trait;
pub(crate) use error::StorageError;
pub use todo::{NewTodo, Todo, TodoChanges, TodoFilter};
pub(crate) use todo::TodoVersion;

pub use ids::TodoId;

/// Repository contract over the todo collection. Absence is `Option`:
/// `update` and `find_one` return `None` when no document matches the
/// filter, and the not-found policy lives with the caller.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// Persists a new document, assigning its id and timestamps.
    async fn save(&self, todo: NewTodo) -> Result<Todo, StorageError>;

    /// Applies `changes` to the document matching `filter` and returns
    /// the updated entity.
    async fn update(
        &self,
        filter: TodoFilter,
        changes: TodoChanges,
    ) -> Result<Option<Todo>, StorageError>;

    async fn find_one(&self, filter: TodoFilter) -> Result<Option<Todo>, StorageError>;

    async fn get_all(&self, filter: TodoFilter) -> Result<Vec<Todo>, StorageError>;
}

#[async_trait]
pub trait FlushStorage: Send + Sync {
    async fn flush(&self) -> Result<(), StorageError>;
}
