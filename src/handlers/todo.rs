use super::error::AppError;
use super::types::*;
use crate::{
    handlers::Service,
    validation::{parse_id, validate_body},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(State(service): State<Service>) -> Result<impl IntoResponse, AppError> {
    let todos = service.todo().get_all().await?;

    info!("Get {} todos", todos.len());

    Ok(Json(todos))
}

#[tracing::instrument(name = "handlers::todo::get", skip_all)]
pub(crate) async fn get(
    State(service): State<Service>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let todo = service.todo().get(id).await?;

    info!(todo_id = %todo.id, "Get todo");

    Ok(Json(todo))
}

#[tracing::instrument(name = "handlers::todo::create", skip_all)]
pub(crate) async fn create(
    State(service): State<Service>,
    Json(input): Json<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    validate_body(&input)?;

    // present after validation
    let title = input.title.unwrap_or_default();

    match service.todo().create(&title).await {
        Ok(todo) => Ok((StatusCode::CREATED, Json(todo))),
        Err(e) => {
            tracing::error!(err = ?e, "failed to create todo");
            Err(e)
        }
    }
}

#[tracing::instrument(name = "handlers::todo::update", skip_all)]
pub(crate) async fn update(
    State(service): State<Service>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    validate_body(&input)?;

    let title = input.title.unwrap_or_default();

    let todo = service.todo().update(id, &title).await?;

    Ok(Json(todo))
}

#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    service.todo().delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
