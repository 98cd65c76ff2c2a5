//! `appraiser serve` - resolve configuration and run the HTTP server.
//!
//! Precedence, highest first: CLI flags, environment variables, the TOML
//! config file, built-in defaults.

use std::path::PathBuf;

use clap::Args;

use appraiser_infra::config::load_server_config;
use appraiser_types::config::ServerConfig;

use crate::http::router::build_router;
use crate::state::AppState;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long, env = "APPRAISER_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding the frontend bundle.
    #[arg(long, env = "APPRAISER_WEB_DIR")]
    pub web_dir: Option<PathBuf>,

    /// Fixed seed for reproducible scores.
    #[arg(long, env = "RANDOM_SEED")]
    pub seed: Option<u64>,

    /// Path to the TOML config file. A missing file means defaults.
    #[arg(long, env = "APPRAISER_CONFIG", default_value = "appraiser.toml")]
    pub config: PathBuf,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, env = "APPRAISER_OTEL")]
    pub otel: bool,
}

impl ServeArgs {
    /// Load the config file and layer flags/env values on top.
    pub async fn resolve_config(&self) -> anyhow::Result<ServerConfig> {
        let file_config = load_server_config(&self.config).await?;
        let config = self.apply_overrides(file_config);
        config.validate()?;
        Ok(config)
    }

    /// Replace every file value that was also given as a flag or env var.
    pub fn apply_overrides(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(web_dir) = &self.web_dir {
            config.web_dir = web_dir.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

/// Bind, announce readiness, and serve until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::init(config.seed);
    let router = build_router(state, &config.web_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(%local_addr, "Appraiser listening");
    println!(
        "  {} Appraiser API listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{local_addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
///
/// A signal that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
