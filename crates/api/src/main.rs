//! Chat endpoint for the finance assistant.
//!
//! Accepts `POST /chat {"message": "..."}`, builds the ledger-backed
//! system prompt, asks the generation backend for a reply, runs the
//! tool-call interpolation engine over it, and returns the final text.

use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use assistant_core::{prompt, ChatMessage, Generator};
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use finance_tools::{default_registry, ExchangeRateApi};
use interpolator::Interpolator;
use ledger::{render_history, ExpenseStore, SqliteLedger};
use openai_generator::OpenAiGenerator;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

#[derive(Clone)]
struct AppState {
    generator: Arc<dyn Generator>,
    store: Arc<dyn ExpenseStore>,
    interpolator: Arc<Interpolator>,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: String,
}

/// Request-level failure, rendered as HTTP 500 with a detail message.
struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": format!("Error: {}", self.0) })),
        )
            .into_response()
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let addr = env::var("FIN_API_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let db_url = env::var("FIN_DB_URL")
        .unwrap_or_else(|_| "sqlite:db/transactions.db?mode=rwc".to_string());

    ensure_db_dir(&db_url);

    let ledger = SqliteLedger::connect(&db_url)
        .await
        .expect("Failed to connect to ledger database");
    ledger.migrate().await.expect("Failed to run ledger migrations");
    ledger.seed_if_empty().await.expect("Failed to seed ledger");

    let store: Arc<dyn ExpenseStore> = Arc::new(ledger);
    let rates = Arc::new(ExchangeRateApi::new());
    let registry = Arc::new(default_registry(store.clone(), rates));
    let generator: Arc<dyn Generator> =
        Arc::new(OpenAiGenerator::from_env().expect("Failed to configure generator"));

    let state = AppState {
        generator,
        store,
        interpolator: Arc::new(Interpolator::new(registry)),
    };

    let app = router(state);

    let addr: SocketAddr = addr.parse().expect("Invalid FIN_API_ADDR");
    info!(%addr, "Finance assistant API listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .with_state(state)
}

/// Create the parent directory for a file-backed SQLite URL.
fn ensure_db_dir(url: &str) {
    let path = url.trim_start_matches("sqlite:");
    if path.contains(":memory:") {
        return;
    }
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(error = %err, "Failed to create database directory");
            }
        }
    }
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    // Storage and generation failures are fatal to the request; tool-call
    // failures inside the reply are recovered by the interpolator.
    let expenses = state
        .store
        .list_all()
        .await
        .map_err(|e| ApiError(e.to_string()))?;

    let system = prompt::build_system_prompt(&render_history(&expenses));
    let messages = vec![
        ChatMessage::system(system),
        ChatMessage::user(payload.message),
    ];

    let raw = state
        .generator
        .generate(messages)
        .await
        .map_err(|e| ApiError(e.to_string()))?;

    let outcome = state
        .interpolator
        .interpolate(&raw)
        .await
        .map_err(|e| ApiError(e.to_string()))?;

    for err in &outcome.errors {
        warn!(span = ?err.span, "Recovered tool-call failure: {}", err.reason);
    }

    Ok(Json(ChatResponse {
        response: outcome.text,
    }))
}
