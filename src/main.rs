use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};

mod config;
mod error;
mod handlers;
mod llm;
mod profile;
mod prompts;
mod state;
mod store;
mod utils;

use config::CONFIG;
use llm::{GeminiClient, PromptModel};
use state::AppState;
use store::InfluencerStore;
use utils::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _guards = init_logging(&CONFIG.log_dir, &CONFIG.log_level);

    let model = PromptModel::Gemini(GeminiClient::from_config(&CONFIG));
    if !model.is_configured() {
        warn!("GEMINI_API_KEY is not set; /api/generate will answer 500 until it is");
    }
    let influencers = InfluencerStore::open(&CONFIG.influencer_store_path).await;
    let state = AppState::new(model, influencers);

    let router = handlers::build_router(state, CONFIG.max_body_bytes);
    let listener = TcpListener::bind(CONFIG.bind_addr).await?;
    info!(
        "Starting Viral Prompt Studio on {} (model {})",
        listener.local_addr()?,
        CONFIG.gemini_model
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
