//! Session log viewer - serves the latest CSV snapshot as JSON

mod handlers;
mod sessions;

use axum::{routing::get, Router};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handlers::{index, latest_data, AppState};

/// Serve the most recent session CSV over a JSON endpoint
#[derive(Parser, Debug)]
#[command(name = "promptgen_server")]
#[command(about = "Serve the latest session CSV snapshot as JSON")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Directory containing session CSV files
    #[arg(short, long, default_value = "sessions")]
    sessions_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let state = Arc::new(AppState {
        sessions_dir: args.sessions_dir.clone(),
    });

    // CORS configuration for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/", get(index))
        .route("/data", get(latest_data))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Session server starting on {}", addr);
    tracing::info!("Sessions directory: {}", args.sessions_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
