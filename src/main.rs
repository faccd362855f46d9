//! Demo server for the segment router.
//!
//! Registers a handful of routes (static, trailing slash, nested, and a
//! named parameter), logs the routing table, and serves until Ctrl+C.

use std::path::PathBuf;

use axum::{body::Body, http::Request, Json};
use clap::Parser;
use serde_json::json;
use tokio::net::TcpListener;

use segment_router::config::{load_config, ServerConfig};
use segment_router::http::{handler, BoxedHandler, ParamsExt};
use segment_router::lifecycle::{signals, Shutdown};
use segment_router::observability::{logging, metrics};
use segment_router::{HttpServer, RouteError, Router};

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Trie-based HTTP router demo server", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);
    tracing::info!("segment-router v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let router = demo_routes(&config.routing.root_path)?;
    for (method, path) in router.routes() {
        tracing::info!(method = %method, path = %path, "Route");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::shutdown_on_ctrl_c(shutdown.clone());

    let server = HttpServer::new(config, router);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn demo_routes(root: &str) -> Result<Router<BoxedHandler>, RouteError> {
    let mut router = Router::with_root(root)?;

    router.get("/", handler(|_req| async { "Hello World" }))?;
    router.get("/test", handler(|_req| async { "Hello Test without slash" }))?;
    router.get("/test/", handler(|_req| async { "Hello Test with slash" }))?;
    router.get("/aaa/bbb", handler(|_req| async { "Hello aaa/bbb" }))?;
    router.get("/aaa/bbb/ccc", handler(|_req| async { "Hello aaa/bbb/ccc" }))?;
    router.get(
        "/param/:param",
        handler(|req: Request<Body>| async move {
            let param = req.param("param").unwrap_or_default().to_string();
            Json(json!({ "param": param }))
        }),
    )?;

    Ok(router)
}
