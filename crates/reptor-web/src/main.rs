//! Reptor Web Server
//!
//! Run with: cargo run -p reptor-web -- --port 8000

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reptor_common::Feature;
use reptor_web::config::Config;

#[derive(Debug, Parser)]
#[command(name = "reptor")]
#[command(about = "A RESTful reputation server")]
struct Args {
    /// IP address or host to bind (default localhost)
    #[arg(long)]
    address: Option<String>,

    /// Port for the HTTP server (default 8000)
    #[arg(long)]
    port: Option<u16>,

    /// Path to reptor.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long)]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(address) = args.address {
        config.server.address = address;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(log) = args.log {
        config.server.log = log;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log)),
        )
        .init();

    info!("Starting Reptor reputation server...");
    let state = reptor_web::state::AppState::new(config.scoring);
    let profile = state.service.profile();
    info!(
        reach = ?profile.curve(Feature::Reach),
        clarity = ?profile.curve(Feature::Clarity),
        "scoring profile loaded"
    );

    let app = reptor_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind((config.server.address.as_str(), config.server.port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
}
