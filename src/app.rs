use crate::handlers;
use crate::service::Service;
use axum::{routing::get, Router};

use tower_http::trace::TraceLayer;
use tracing::instrument;

fn todo_routes() -> Router<Service> {
    Router::new()
        .route(
            "/",
            get(handlers::todo::get_all).post(handlers::todo::create),
        )
        .route(
            "/{id}",
            get(handlers::todo::get)
                .put(handlers::todo::update)
                .delete(handlers::todo::delete),
        )
}

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service) -> Router {
    Router::new()
        .nest("/todos", todo_routes())
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
