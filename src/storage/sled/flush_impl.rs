use super::error::SledStorageError;
use super::SledStorage;
use crate::{
    storage::{FlushStorage, StorageError},
    trace_err,
};
use async_trait::async_trait;
use tracing::instrument;

#[async_trait]
impl FlushStorage for SledStorage {
    #[instrument(name = "SledStorage::flush", skip_all)]
    async fn flush(&self) -> Result<(), StorageError> {
        trace_err!(
            self.todo_tree.flush_async().await,
            "failed to flush todo_tree"
        )
        .map_err(SledStorageError::from)?;

        Ok(())
    }
}
