//! CLI command implementations

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_tracing, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure
///
/// Every field is optional; an absent file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener and CORS settings
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Default tracing filter (optional, default "info"). `RUST_LOG` wins.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {:?}: {}", path, e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if self.log_filter.trim().is_empty() {
            return Err(CliError::config_error("log_filter must not be empty"));
        }

        Ok(())
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
    }
}

/// Start the HTTP server
///
/// 1. Load configuration (file, then flag overrides)
/// 2. Initialize tracing
/// 3. Build the server around a fresh in-memory store
/// 4. Serve on a tokio runtime until Ctrl-C
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_overrides(host, port);
    config.validate()?;

    init_tracing(&config.log_filter).map_err(|e| CliError::config_error(e.to_string()))?;

    tracing::info!(
        event = %Event::ConfigLoaded,
        host = %config.http.host,
        port = config.http.port,
        cors_origins = config.http.cors_origins.len()
    );

    let server = HttpServer::with_config(config.http);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
