use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod archive;
mod cli;
mod config;
mod errors;
mod log;
mod prompt;
mod provider;
mod server;
mod wire;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_tracing(args.debug);

    let mut cfg = config::Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        cfg.host = host;
    }
    if let Some(port) = args.port {
        cfg.port = port;
    }

    // Exactly one credential may be present; both is fatal here, neither
    // leaves the service running but unable to generate.
    let credentials = config::Credentials::from_env()?;
    let provider = credentials.map(|c| provider::make_provider(c, &cfg));
    match &provider {
        Some(p) => tracing::info!(provider = p.name(), "provider selected"),
        None => tracing::warn!("no provider configured; generation requests will fail"),
    }

    let addr = format!("{}:{}", cfg.host, cfg.port);
    let state = Arc::new(server::AppState {
        provider,
        config: cfg,
        save_exchanges: args.save_exchanges,
    });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!("Serving on http://{addr}");

    axum::serve(listener, server::router(state))
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug { "botforge=debug" } else { "botforge=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
