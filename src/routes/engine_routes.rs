use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::dto::EngineRequest;
use crate::models::Engine;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_engine_router() -> Router<AppState> {
    Router::new()
        .route("/engines", post(create_engine))
        .route(
            "/engines/:id",
            get(get_engine).put(update_engine).delete(delete_engine),
        )
}

async fn get_engine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Engine>, AppError> {
    let engine = state.engine_service.get_engine_by_id(&id).await?;
    Ok(Json(engine.unwrap_or_default()))
}

async fn create_engine(
    State(state): State<AppState>,
    payload: Result<Json<EngineRequest>, JsonRejection>,
) -> Response {
    // A diferencia de los coches, un JSON inválido aquí es un 400
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("⚠️ Error deserializando el motor: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Bad Request", "message": rejection.body_text() })),
            )
                .into_response();
        }
    };

    match state.engine_service.create_engine(&request).await {
        Ok(engine) => (StatusCode::CREATED, Json(engine)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn update_engine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EngineRequest>, JsonRejection>,
) -> Result<Json<Engine>, AppError> {
    let Json(request) = payload.map_err(|rejection| bad_request_error(&rejection.body_text()))?;
    let engine = state.engine_service.update_engine(&id, &request).await?;
    Ok(Json(engine))
}

async fn delete_engine(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.engine_service.delete_engine(&id).await {
        Ok(Some(engine)) => (StatusCode::OK, Json(engine)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Engine not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("❌ Error eliminando el motor {}: {}", id, e);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "Invalid request": e.to_string() })),
            )
                .into_response()
        }
    }
}
