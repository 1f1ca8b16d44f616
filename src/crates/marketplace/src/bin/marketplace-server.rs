//! Marketplace server binary
//!
//! Standalone server exposing the users, orders and offers REST API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use marketplace::api::create_router;
use marketplace::config::ServerConfig;
use marketplace::db::DatabaseConnection;
use marketplace::seed::{load_seed_data, SeedData};

/// CRUD REST service for marketplace users, orders and offers
#[derive(Debug, Parser)]
#[command(name = "marketplace-server", version)]
struct Args {
    /// Path to marketplace-server.toml
    #[arg(long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Interface to bind (overrides the config file)
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to bind (overrides the config file)
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Skip loading seed data
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(rust_log)
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::load(args.config.as_deref())
        .context("Failed to load server configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.no_seed {
        config.seed.enabled = false;
    }
    config.validate().context("Invalid server configuration")?;

    tracing::info!("Server name: {}", config.server.name);
    tracing::info!("Database URL: {}", config.database_url());

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.bind_address()))?;

    // Initialize database connection
    let db = DatabaseConnection::with_max_connections(
        config.database_url(),
        config.effective_max_connections(),
    )
    .await
    .with_context(|| format!("Failed to connect to {}", config.database_url()))?;

    tracing::info!("Creating database schema");
    db.run_migrations().await.context("Failed to create schema")?;

    db.health_check().await.context("Database health check failed")?;

    if config.seed.enabled {
        let seed = SeedData::load(config.seed.path.as_deref()).context("Failed to read seed data")?;
        load_seed_data(&db, &seed).await.context("Failed to load seed data")?;
    } else {
        tracing::info!("Seed data disabled");
    }

    // Build the router
    let app = create_router(db.clone());

    tracing::info!("Starting marketplace server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    tracing::info!("Marketplace server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL-C signal handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
