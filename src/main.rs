use todo_api::{init_tracing, Settings, StartupError};

use thiserror::Error;
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

#[derive(Debug, Error)]
enum TodoApiError {
    #[error("Startup error")]
    Startup(#[from] StartupError),

    #[error("Io error")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), TodoApiError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .max_blocking_threads(num_cpus::get() * 2)
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

#[cfg(unix)]
async fn shutdown_signal() {
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to bind to SIGTERM");

    tokio::select! {
        _ = signal::ctrl_c() => {
            println!("SIGINT received.");
        },
        _ = sigterm.recv() => {
            println!("SIGTERM received.");
        },
    }
}

async fn async_main() -> Result<(), TodoApiError> {
    let settings = Settings::new()?;

    init_tracing(&settings)?;

    let server_addr = settings.server_addr();
    let (app, service) = todo_api::init_app(settings)?;

    let listener = TcpListener::bind(&server_addr).await?;

    let shutdown_signal = async {
        #[cfg(unix)]
        shutdown_signal().await;
    };

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    let _ = service.flush_storage().await;

    Ok(())
}
