//! Savepoint backend: HTTP API for player accounts and save-game data.
//!
//! The backend follows a layered architecture: `controller` handles HTTP
//! requests and DTO conversion, `service` holds the business logic, `data`
//! wraps all database operations behind repositories, and `error` maps
//! failures to HTTP responses. Startup wiring (configuration, database,
//! listener, CORS boundary) lives in `config`, `startup`, and `listener`.

mod config;
mod controller;
mod data;
mod error;
mod listener;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Args, Settings},
    error::AppError,
    state::AppState,
};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "savepoint=debug,tower_http=debug"
    } else {
        "savepoint=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Startup failures are fatal; request-level errors are handled per request.
    if let Err(err) = run(args).await {
        tracing::error!("server failed to start or serve: {err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let settings = Settings::load(&args)?;

    let db = startup::connect_to_database(&settings).await?;

    tracing::info!("starting server on {} ({})", settings.addr, settings.proto);

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(TraceLayer::new_for_http());

    // The CORS boundary wraps everything, including unmatched routes, so
    // OPTIONS requests never reach the router.
    let app = if settings.debug {
        app.layer(axum::middleware::from_fn(middleware::cors::debug))
    } else {
        app.layer(axum::middleware::from_fn(middleware::cors::production))
    };

    let listener = listener::bind(settings.proto, &settings.addr).await?;

    startup::serve(listener, app, settings.tls.as_ref()).await
}
