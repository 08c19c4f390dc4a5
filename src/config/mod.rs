//! Configuration module for the volatility service.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Server, Models, and Observability.

mod model_config;
mod observability_config;
mod server_config;

pub use model_config::{ModelEnvConfig, parse_windows};
pub use observability_config::ObservabilityEnvConfig;
pub use server_config::ServerEnvConfig;

use crate::domain::ml::WindowId;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main application configuration.
///
/// Aggregates all sub-configs into a single flat struct.
#[derive(Debug, Clone)]
pub struct Config {
    // Server (from ServerEnvConfig)
    pub host: String,
    pub port: u16,

    // Models (from ModelEnvConfig)
    pub model_dir: PathBuf,
    pub model_windows: Vec<WindowId>,

    // Observability (from ObservabilityEnvConfig)
    pub observability_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        let server = ServerEnvConfig::default();
        let models = ModelEnvConfig::default();
        let observability = ObservabilityEnvConfig::default();

        Self {
            host: server.host,
            port: server.port,
            model_dir: models.model_dir,
            model_windows: models.windows,
            observability_enabled: observability.enabled,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let server = ServerEnvConfig::from_env().context("Failed to load server config")?;
        let models = ModelEnvConfig::from_env().context("Failed to load model config")?;
        let observability = ObservabilityEnvConfig::from_env();

        Ok(Self {
            host: server.host,
            port: server.port,
            model_dir: models.model_dir,
            model_windows: models.windows,
            observability_enabled: observability.enabled,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        ServerEnvConfig {
            host: self.host.clone(),
            port: self.port,
        }
        .socket_addr()
    }
}
