//! Query service server binary
//!
//! Run with: cargo run -p corpus-rag --bin corpus-rag-server

use corpus_rag::{config::Settings, server::QueryServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "corpus_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load and presence-check configuration; missing backends fail per-request
    let settings = Settings::from_env();
    settings.validate();

    tracing::info!("Configuration loaded");
    tracing::info!("  - Prompt dir: {}", settings.prompts.dir.display());
    tracing::info!(
        "  - Search endpoint: {}",
        settings.search.endpoint.as_deref().unwrap_or("(unset)")
    );
    tracing::info!(
        "  - LLM deployment: {}",
        settings.llm.deployment.as_deref().unwrap_or("(unset)")
    );

    let server = QueryServer::new(settings)?;

    println!("\nServer starting on http://{}", server.address());
    println!("\nEndpoints:");
    println!("  POST /query            - Ask with LLM synthesis");
    println!("  POST /search           - Retrieval only");
    println!("  POST /ask              - Structured memos retrieval");
    println!("  POST /synthesize       - Build LLM input (no LLM call)");
    println!("  POST /synthesize/full  - Synthesize from an /ask response");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
