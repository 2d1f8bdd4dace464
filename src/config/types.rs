use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;
use strum_macros::AsRefStr;

#[derive(Debug, Deserialize, Copy, Clone, AsRefStr)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Sled,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageKind,
    pub sled: Option<SledConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SledConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub stdout_tracing: bool,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}
