//! brolly-server - REST API server binary.

use std::net::SocketAddr;

use brolly_core::config::EngineConfig;
use brolly_extractors::scan_documents;
use brolly_server::{create_engine, create_server, AppState};
use tokio::signal;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("brolly_server=debug".parse().unwrap()),
        )
        .init();

    // Get configuration from environment
    let host = std::env::var("BROLLY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("BROLLY_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("BROLLY_PORT must be a valid port number");

    let config = EngineConfig::from_env();
    let engine = create_engine(config)?;
    let state = AppState::new(engine);

    // Bring up the graph from the cache or the documents directory.
    // Failure here is not fatal; endpoints report "not loaded" until a
    // rebuild succeeds.
    match initial_load(&state).await {
        Ok(count) => info!("Knowledge graph ready ({} facts)", count),
        Err(e) => warn!("Starting without a knowledge graph: {}", e),
    }

    let app = create_server(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting brolly-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}

async fn initial_load(state: &AppState) -> Result<usize, Box<dyn std::error::Error>> {
    let documents_dir = state.engine.config().documents_dir.clone();

    let documents = match scan_documents(&documents_dir).await {
        Ok(docs) => docs,
        Err(e) => {
            // Cache may still exist even when the documents dir is gone.
            if state.engine.config().graph_path().exists() {
                Default::default()
            } else {
                error!(
                    "Cannot read documents dir {}: {}",
                    documents_dir.display(),
                    e
                );
                return Err(Box::new(e));
            }
        }
    };

    let snapshot = state.engine.load_or_build(&documents).await?;
    let facts = snapshot.graph.fact_count();
    state.publish(snapshot).await;
    Ok(facts)
}
