use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use transcript_archive::ingestion::handlers::handle_complete_week;
use transcript_archive::retrieval::handlers::handle_download;
use transcript_archive::storage::store::TranscriptStore;

const DEFAULT_BIND: &str = "0.0.0.0:5000";
const DEFAULT_DATA_DIR: &str = "transcripts";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [--bind <addr:port>] [--data-dir <path>]", args[0]);
        std::process::exit(0);
    }

    let (bind_addr, data_dir) = parse_args(&args)?;

    // 1. Storage directory (created if absent, idempotent):
    let store = Arc::new(TranscriptStore::new(&data_dir)?);
    tracing::info!("Storage directory: {}", store.dir().display());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/api/complete_week", post(handle_complete_week))
        .route("/download/*filename", get(handle_download))
        .layer(Extension(store))
        .layer(CorsLayer::permissive());

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn parse_args(args: &[String]) -> anyhow::Result<(SocketAddr, PathBuf)> {
    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;
    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--bind requires a value"))?;
                bind_addr = value.parse()?;
                i += 2;
            }
            "--data-dir" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--data-dir requires a value"))?;
                data_dir = PathBuf::from(value);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok((bind_addr, data_dir))
}
