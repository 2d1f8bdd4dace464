#![allow(dead_code, unused_imports)]

mod client;
mod server;

pub use client::TestAppClient;
use todo_api::{build_app, Service, TestStorageBuilder};

use axum::Router;
pub use server::{spawn_test_app, TestAppHandle};
use todo_api::ValidationFailure;

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default)]
    pub failures: Vec<ValidationFailure>,
}

pub async fn create_test_app() -> Router {
    let builder = TestStorageBuilder::new();
    let todo_storage = builder.build_todo().await;
    let flush_storage = builder.build_flush().await;

    let service = Service::new(todo_storage, flush_storage);

    build_app(service)
}
