//! Backend of the Skill Barter platform, a site where members trade lessons in what they know
//! for lessons in what they want to learn.
//!
//!
//!
//! # Endpoints
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /` | Liveness text |
//! | `POST /test` | Frontend connection check, greets `name` or `Guest` |
//! | `POST /recommend` | `{skills}` to the recommender, result returned as is |
//! | `POST /chat` | `{message}` to the chatbot, returns `{reply}` |
//! | `POST /contact` | Stores `{name, email, message}` feedback |
//! | `GET /feedback` | All feedback, newest first |
//!
//! Every origin is allowed, the frontend is served from wherever the member opened it.
//!
//!
//!
//! # Errors
//!
//! Failures come back as `{"status": "error", "message": ...}`.
//! - 400 for unparsable bodies or missing (absent, `null` or empty) contact fields
//! - 415 when a JSON route is called without `Content-Type: application/json`
//! - 409 when SQLite rejects a row on a constraint
//! - 500 for storage and collaborator faults, also logged
//!
//! Absent fields on the other routes default to empty values.
//!
//!
//!
//! # Setup
//!
//! Environment variables, all optional.
//! - `RUST_HOST`: bind host, default `127.0.0.1`
//! - `RUST_PORT`: bind port, default `5000`
//! - `DATABASE_PATH`: SQLite file, default `feedback.db`
//! - `DEBUG_MODE`: per-request tracing, default `true`
//! - `RUST_LOG`: log filter, default `info`
//!
//! Run the server.
//! ```sh
//! cargo run -p skill_barter
//! ```
//!
//! Poke every route of a running server.
//! ```sh
//! cargo run -p tester -- --base-url http://127.0.0.1:5000
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod collaborators;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{
    chat_handler, contact_handler, feedback_handler, home_handler, recommend_handler,
    test_handler,
};
use state::State;

pub async fn start_server() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = State::new(config).context("Failed to initialize the feedback database")?;

    info!("Starting server...");
    let app = app(state.clone());

    let address = state.config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    let router = Router::new()
        .route("/", get(home_handler))
        .route("/test", post(test_handler))
        .route("/recommend", post(recommend_handler))
        .route("/chat", post(chat_handler))
        .route("/contact", post(contact_handler))
        .route("/feedback", get(feedback_handler))
        .layer(cors);

    let router = if state.config.debug {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
