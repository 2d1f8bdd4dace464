use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::config::Settings;

use super::StartupError;

/// Installs the global tracing subscriber. `RUST_LOG` wins over the
/// configured level when set.
pub fn init_tracing(settings: &Settings) -> Result<(), StartupError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level()));

    let subscriber = Registry::default().with(filter);

    if settings.stdout_tracing() {
        let fmt_layer = fmt::layer()
            .with_level(true)
            .with_target(true)
            .compact();
        tracing::subscriber::set_global_default(subscriber.with(fmt_layer))?;
    } else {
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
