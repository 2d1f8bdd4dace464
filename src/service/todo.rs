use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    handlers::error::AppError,
    storage::{NewTodo, Todo, TodoChanges, TodoFilter, TodoId, TodoStorage},
};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::create", skip_all)]
    pub(crate) async fn create(&self, title: &str) -> Result<Todo, AppError> {
        let todo = self.storage.save(NewTodo::new(title)).await?;

        info!(todo_id = %todo.id, "created todo");

        Ok(todo)
    }

    #[instrument(name = "Service::todo::get", skip_all)]
    pub(crate) async fn get(&self, id: TodoId) -> Result<Todo, AppError> {
        self.storage
            .find_one(TodoFilter::by_id(id).active())
            .await?
            .ok_or(AppError::NotFound)
    }

    #[instrument(name = "Service::todo::get_all", skip_all)]
    pub(crate) async fn get_all(&self) -> Result<Vec<Todo>, AppError> {
        self.storage
            .get_all(TodoFilter::default().active())
            .await
            .map_err(Into::into)
    }

    /// Retitles by id alone; an inactive record can still be edited, it
    /// just stays invisible to fetch and list.
    #[instrument(name = "Service::todo::update", skip_all)]
    pub(crate) async fn update(&self, id: TodoId, title: &str) -> Result<Todo, AppError> {
        info!(todo_id = %id, "update todo");

        self.storage
            .update(TodoFilter::by_id(id), TodoChanges::set_title(title))
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Soft delete: flips `is_active` on the matching active record.
    /// Already-inactive and missing ids both come back as not found.
    #[instrument(name = "Service::todo::delete", skip_all)]
    pub(crate) async fn delete(&self, id: TodoId) -> Result<(), AppError> {
        info!(todo_id = %id, "delete todo");

        self.storage
            .update(TodoFilter::by_id(id).active(), TodoChanges::deactivate())
            .await?
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}
