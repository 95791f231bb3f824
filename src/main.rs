use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use motivate_core::GenerationClient;
use motivate_core::config::generation_config_from_env_values;

/// Main entry point for the motivate proxy server
///
/// Serves the proxy function over REST on port 3000 (configurable via MOTIVATE_REST_ADDR).
/// The generation API key is never configured here: every request brings its own.
///
/// # Environment Variables
/// - `MOTIVATE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `GENERATION_API_BASE_URL`: generation API base (default: Google's `v1beta` endpoint)
/// - `GENERATION_MODEL`: model name (default: "gemini-pro")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("motivate_run=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("MOTIVATE_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let generation_cfg = generation_config_from_env_values(
        std::env::var("GENERATION_API_BASE_URL").ok(),
        std::env::var("GENERATION_MODEL").ok(),
    )?;
    tracing::info!(
        "++ Generation API: {} (model {})",
        generation_cfg.base_url(),
        generation_cfg.model()
    );

    let app = router(AppState::new(GenerationClient::new(generation_cfg)?));

    tracing::info!("++ Starting motivate proxy on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
