use std::sync::Arc;

use labtrack_core::audit::AuditSink;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by controllers).
    pub config: Arc<ServerConfig>,
    /// Destination for audit entries.
    pub audit: Arc<dyn AuditSink>,
}

impl AppState {
    pub fn new(config: ServerConfig, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            config: Arc::new(config),
            audit,
        }
    }
}
