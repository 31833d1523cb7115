use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use babelcast::application::services::{PipelineConfig, PipelineService};
use babelcast::infrastructure::ProviderFactory;
use babelcast::infrastructure::observability::{TracingConfig, init_tracing};
use babelcast::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let providers = ProviderFactory::create(&settings)
        .await
        .context("Failed to create providers")?;

    tracing::info!(
        bucket = %providers.store.bucket(),
        provider = ?settings.providers.kind,
        storage = ?settings.storage.provider,
        "Providers ready"
    );

    let pipeline = Arc::new(PipelineService::new(
        providers.store,
        providers.transcriber,
        providers.translator,
        providers.synthesizer,
        PipelineConfig::from(&settings.pipeline),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let router = create_router(AppState::new(pipeline, settings));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
