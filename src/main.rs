use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use rubric_grader::application::services::{AnalysisSession, RubricEvaluator};
use rubric_grader::infrastructure::llm::GeminiClient;
use rubric_grader::infrastructure::observability::{TracingConfig, init_tracing};
use rubric_grader::infrastructure::text_processing::PdfAdapter;
use rubric_grader::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let llm_client = GeminiClient::with_options(
        settings.gemini.resolve_api_key(),
        settings.gemini.model.clone(),
        &settings.gemini.base_url,
        settings.gemini.timeout(),
    )
    .context("Cannot start without a Gemini API key (set GEMINI_API_KEY)")?;

    tracing::info!(model = llm_client.model(), "Gemini client ready");

    let evaluator = RubricEvaluator::new(Arc::new(llm_client))
        .with_temperature(settings.gemini.temperature);
    let file_loader = PdfAdapter::new().with_timeout(settings.extraction.timeout());

    let session = Arc::new(AnalysisSession::new(
        Arc::new(file_loader),
        Arc::new(evaluator),
    ));

    let state = AppState::new(session, settings.extraction.max_file_size_bytes());
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
