//! HTTP API for the chat service.

use axum::{
    extract::{FromRequest, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, warn};

use crate::chat::ChatService;
use crate::error::AppError;
use crate::models::{
    AnalyzeTextRequest, CreateMessageRequest, CreateUserRequest, MessageResponse, UserSummary,
};
use crate::sentiment::AnalysisResult;

const SERVICE_NAME: &str = "Emotion Chat API";

/// JSON body extractor whose rejections go through `AppError`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
struct AppJson<T>(T);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(reason) => {
                warn!("Rejected request: {}", reason);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response()
            }
            other => {
                error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Build the application router
pub fn router(service: ChatService) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/api/messages",
            get(list_messages_handler).post(create_message_handler),
        )
        .route("/api/messages/:user_id", get(user_messages_handler))
        .route("/api/analysis", post(analyze_handler))
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "Healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": SERVICE_NAME,
    }))
}

async fn list_users_handler(
    State(service): State<ChatService>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(service.list_users().await?))
}

async fn create_user_handler(
    State(service): State<ChatService>,
    AppJson(request): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserSummary>), AppError> {
    let (user, created) = service.create_user(request).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(UserSummary::empty(&user))))
}

async fn list_messages_handler(
    State(service): State<ChatService>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    Ok(Json(service.list_messages().await?))
}

async fn user_messages_handler(
    State(service): State<ChatService>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    Ok(Json(service.list_user_messages(user_id).await?))
}

async fn create_message_handler(
    State(service): State<ChatService>,
    AppJson(request): AppJson<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let message = service.create_message(request).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

async fn analyze_handler(
    State(service): State<ChatService>,
    AppJson(request): AppJson<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    Ok(Json(service.analyze_text(request).await?))
}
