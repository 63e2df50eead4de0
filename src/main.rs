use anyhow::Result;
use clap::Parser;
use duolog_sessions::{create_router, AppState, Config};
use std::sync::Arc;
use tracing::info;

/// Consent-gated session backend
#[derive(Debug, Parser)]
#[command(name = "duolog-sessions", version)]
struct Args {
    /// Path to the configuration file (extension optional)
    #[arg(long, default_value = "config/duolog-sessions")]
    config: String,

    /// Override the configured HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    if cfg.service.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    info!("{} v{}", cfg.service.name, cfg.service.version);
    info!(
        "HTTP server will bind to {}:{}",
        cfg.service.http.bind, cfg.service.http.port
    );
    info!("Session API prefix: {}", cfg.service.http.api_prefix);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let http = cfg.service.http.clone();
    let state = AppState::new(Arc::new(cfg));
    let app = create_router(state, &http);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    info!("Shutdown signal received");
}
