use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobmatch::config::Config;
use jobmatch::jobs::jooble::{DisabledJobSource, JobSource, JoobleClient};
use jobmatch::matching::matcher::SubstringEquivalence;
use jobmatch::routes::build_router;
use jobmatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize job board client
    let job_source: Arc<dyn JobSource> = match &config.jooble_api_key {
        Some(key) => {
            let client = JoobleClient::new(
                config.jooble_base_url.clone(),
                key.clone(),
                Duration::from_secs(config.job_board_timeout_secs),
            )?;
            info!("Jooble client initialized ({})", config.jooble_base_url);
            Arc::new(client)
        }
        None => {
            warn!("JOOBLE_API_KEY is not set; external job search is disabled");
            Arc::new(DisabledJobSource)
        }
    };

    // Substring equivalence by default; swap here for a stricter rule
    let equivalence = Arc::new(SubstringEquivalence);

    let state = AppState {
        config: config.clone(),
        job_source,
        equivalence,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
