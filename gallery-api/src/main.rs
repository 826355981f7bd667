//! gallery-api - Gallery layout service entry point
//!
//! Resolves configuration (CLI → ENV → TOML → defaults), initializes
//! tracing, and serves the layout API until Ctrl+C or SIGTERM.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gallery_api::{build_router, AppState};
use gallery_common::config::{
    default_config_path, load_toml_config, resolve_service_config, write_toml_config,
    ConfigOverrides,
};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for gallery-api
#[derive(Parser, Debug)]
#[command(name = "gallery-api")]
#[command(about = "Wall layout service for the virtual art gallery")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind to
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Path to TOML config file
    #[arg(short, long, env = "GALLERY_CONFIG")]
    config: Option<PathBuf>,

    /// Save the resolved configuration as TOML to this path and exit
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(default_config_path);
    let toml_config = match &config_path {
        Some(path) => load_toml_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => Default::default(),
    };

    let overrides = ConfigOverrides {
        bind_address: args.bind,
        port: args.port,
        log_level: args.log_level,
    };
    let config = resolve_service_config(&overrides, &toml_config)
        .context("Failed to resolve configuration")?;

    // RUST_LOG wins over the configured level
    let level = &config.log_level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("gallery_api={level},gallery_common={level},tower_http={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting gallery-api v{}",
        env!("CARGO_PKG_VERSION")
    );
    match &config_path {
        Some(path) if path.exists() => info!("Loaded config file: {}", path.display()),
        Some(path) => warn!("Config file not found at {}, using defaults", path.display()),
        None => warn!("No config directory on this platform, using defaults"),
    }

    if let Some(path) = &args.write_default_config {
        write_toml_config(&config.to_toml(), path)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        info!("Wrote resolved configuration to {}", path.display());
        return Ok(());
    }
    info!("CORS allowed origins: {}", config.cors_allowed_origins.join(", "));

    let addr = config.socket_addr()?;
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("gallery-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
