//! Responder service entry point

use property_assistant::api::{create_router, AppState};
use property_assistant::config::Config;
use property_assistant::llm::{LlmService, LoggingService, OpenAICompatService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_assistant=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = Config::from_env()?;
    let system_prompt = config.system_prompt()?;

    let api_key = config.api_key.clone().unwrap_or_else(|| {
        tracing::warn!("GROQ_API_KEY is not set; completion requests will fail");
        String::new()
    });

    let provider = OpenAICompatService::new(api_key, &config.model, &config.base_url)?;
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(Arc::new(provider)));
    tracing::info!(model = %llm.model_id(), base_url = %config.base_url, "Completion provider ready");

    let state = AppState::new(llm, system_prompt).with_sampling(config.sampling);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Property assistant listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
