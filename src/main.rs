use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use storycast::speech::MinimaxClient;
use storycast::{create_router, AppState, Config};
use tracing::info;

/// Guided voice-podcast session service
#[derive(Debug, Parser)]
#[command(name = "storycast", version)]
struct Args {
    /// Path to the configuration file, without extension
    #[arg(long, default_value = "config/storycast")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("storycast v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!(
        "Interview has {} steps, {} narration lines",
        cfg.interview.step_count(),
        cfg.script.lines.len()
    );

    let speech = Arc::new(MinimaxClient::new(cfg.speech.clone())?);
    let state = AppState::new(cfg.clone(), speech.clone(), speech);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
