use std::error::Error;

use llm_assist::telemetry;
use tracing::Level;
use tracing_subscriber::{
    Layer, filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file.
    // Fails if .env file not found, not readable or invalid.
    dotenvy::dotenv()?;

    // INFO everywhere, DEBUG for the LLM layer, unless RUST_LOG says otherwise.
    let filter = telemetry::env_filter_with_level("info", Level::DEBUG);

    // LLM events go through the library layer (timestamps, source location);
    // the plain layer carries everything else.
    let app_layer = fmt::layer()
        .with_target(false)
        .with_filter(filter_fn(|meta| {
            !meta.target().starts_with(telemetry::TARGET_PREFIX)
        }));

    tracing_subscriber::registry()
        .with(filter)
        .with(telemetry::layer())
        .with(app_layer)
        .init();

    api::start().await?;

    Ok(())
}
