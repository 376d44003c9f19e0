use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::{
    api_types::*,
    auth::is_authorized,
    config::Config,
    delete_service::DeleteService,
};

pub struct AppState {
    pub config: Config,
    pub delete_service: DeleteService,
}

pub fn create_router(config: Config) -> Router {
    let delete_service = DeleteService::new(config.aws.clone());
    let state = Arc::new(AppState {
        config,
        delete_service,
    });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/delete", post(delete_message))
        // Alias kept for callers of the older route name
        .route("/delete-message", post(delete_message))
        .route("/test-connection", get(test_connection))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

// Health check endpoint - no authentication
async fn root(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        service: state.config.api.title.clone(),
        version: state.config.api.version.clone(),
    })
}

// Detailed health check endpoint - no authentication
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.api.title.clone(),
        version: state.config.api.version.clone(),
    })
}

async fn delete_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if !is_authorized(&headers, state.config.auth.api_password.as_deref()) {
        return unauthorized_response();
    }

    let request = match DeleteRequest::from_json(&body) {
        Ok(request) => request,
        Err(errors) => return validation_error_response(errors),
    };

    match state.delete_service.delete_message(&request).await {
        Ok(queue_url) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success: true,
                message: "Message deleted successfully".to_string(),
                queue_url: Some(queue_url),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error deleting message ({}): {}", e.kind, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Error deleting message: {}", e),
            )
        }
    }
}

async fn test_connection(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&headers, state.config.auth.api_password.as_deref()) {
        return unauthorized_response();
    }

    match state.delete_service.test_connection().await {
        Ok(region) => (
            StatusCode::OK,
            Json(ConnectionResponse {
                success: true,
                message: "AWS SQS connection established successfully".to_string(),
                region,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error testing connection ({}): {}", e.kind, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Error connecting to AWS SQS: {}", e),
            )
        }
    }
}

fn unauthorized_response() -> Response {
    error_response(
        StatusCode::UNAUTHORIZED,
        "Invalid password. Use header: X-API-Key: your_password",
    )
}

fn error_response(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.to_string(),
        }),
    )
        .into_response()
}

fn validation_error_response(detail: Vec<FieldError>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorResponse { detail }),
    )
        .into_response()
}
