mod app;
mod config;
pub(crate) mod handlers;
mod init;
pub(crate) mod service;
pub(crate) mod storage;
pub(crate) mod utils;
pub(crate) mod validation;

pub use config::Settings;
pub use handlers::error::AppError;
pub use init::{init_tracing, StartupError};
pub use validation::ValidationFailure;

use axum::Router;
use tracing::{info, instrument};

#[cfg(feature = "integration_tests")]
pub use app::build_app;

#[cfg(feature = "integration_tests")]
pub use storage::{Todo, TodoId};

#[cfg(feature = "integration_tests")]
pub use service::Service;

#[cfg(feature = "integration_tests")]
pub use storage::test_util::TestStorageBuilder;

#[instrument(name = "init_app", skip_all)]
pub fn init_app(settings: Settings) -> Result<(Router, service::Service), StartupError> {
    info!(settings = ?settings, "init_app with settings");

    let service = init::init_storage(&settings)?;

    Ok((app::build_app(service.clone()), service))
}
