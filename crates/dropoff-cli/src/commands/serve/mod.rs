mod app;
mod shutdown;

use clap::Args;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

use dropoff_config::{
    ServerConfig, DEFAULT_ADDRESS, DEFAULT_SENTIMENT_MODEL_URL, DEFAULT_SENTIMENT_TIMEOUT_SECS,
};
use dropoff_sentiment::SentimentService;

pub use app::build_application;
pub use shutdown::shutdown_signal;

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = DEFAULT_ADDRESS, env = "DROPOFF_ADDRESS")]
    pub address: String,

    /// Hugging Face Inference API token (HF_API_KEY is also read when unset)
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    pub hf_api_token: Option<String>,

    /// Text-classification model endpoint
    #[arg(
        long,
        default_value = DEFAULT_SENTIMENT_MODEL_URL,
        env = "DROPOFF_SENTIMENT_MODEL_URL"
    )]
    pub sentiment_model_url: String,

    /// Timeout in seconds for each classification call
    #[arg(
        long,
        default_value_t = DEFAULT_SENTIMENT_TIMEOUT_SECS,
        env = "DROPOFF_SENTIMENT_TIMEOUT_SECS"
    )]
    pub sentiment_timeout_secs: u64,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let config = Arc::new(ServerConfig::new(
            self.address,
            self.sentiment_model_url,
            ServerConfig::resolve_token(self.hf_api_token),
            self.sentiment_timeout_secs,
        )?);
        debug!("Loaded configuration: {:?}", config);

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(serve(config))
    }
}

async fn serve(config: Arc<ServerConfig>) -> anyhow::Result<()> {
    let sentiment_service = Arc::new(SentimentService::from_config(&config)?);
    info!(
        "Sentiment provider {} at {}",
        sentiment_service.provider_name(),
        config.sentiment_model_url
    );

    let app = build_application(sentiment_service);

    let listener = TcpListener::bind(&config.address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", config.address, e))?;
    info!("Drop-off analyzer listening on {}", config.address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server exited");
    Ok(())
}
