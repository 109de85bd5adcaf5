use mailbot_backend::infrastructure::config::{Config, LogFormat};
use mailbot_backend::infrastructure::http::start_http_server;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting MailBot Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        model = %config.openai_model,
        timeout_secs = config.provider_timeout_secs,
        "Using OpenAI chat completions"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject provider credentials)
    let completion_repo = Arc::new(
        mailbot_backend::infrastructure::repositories::OpenAiCompletionRepository::new(
            &config.openai_api_key,
            config.openai_model.clone(),
            Duration::from_secs(config.provider_timeout_secs),
        ),
    );

    // 2. Instantiate services (inject repositories)
    let generation_service = Arc::new(
        mailbot_backend::domain::generation::GenerationService::new(completion_repo),
    );

    // 3. Instantiate controllers (inject services)
    let generate_controller = Arc::new(
        mailbot_backend::controllers::generate::GenerateController::new(generation_service),
    );

    // Start HTTP server with all routes
    start_http_server(config, generate_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "mailbot_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "mailbot_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
