//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP.
//!
//! Contrato HTTP: todos los errores se responden con 500. La única
//! excepción (borrado de motores, 400/404) se construye en su handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{}", validation_message(.0))]
    Validation(#[from] validator::ValidationError),

    #[error("invalid {0}")]
    InvalidId(String),

    #[error("{0}")]
    NotFound(String),

    #[error("engine id {0} does not exist in the engines table")]
    EngineNotFound(Uuid),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Código estable del tipo de error, incluido en el cuerpo JSON
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DB_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidId(_) => "INVALID_ID",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::EngineNotFound(_) => "ENGINE_NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Título legible del tipo de error
    fn title(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database Error",
            AppError::Validation(_) => "Validation Error",
            AppError::InvalidId(_) => "Invalid Identifier",
            AppError::NotFound(_) => "Not Found",
            AppError::EngineNotFound(_) => "Engine Not Found",
            AppError::BadRequest(_) => "Bad Request",
            AppError::Configuration(_) => "Configuration Error",
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("❌ Database error: {}", e),
            AppError::Configuration(msg) => {
                tracing::error!("❌ {}: {}", self.title(), msg)
            }
            other => tracing::warn!("⚠️ {}: {}", other.title(), other),
        }

        let body = ErrorResponse {
            error: self.title().to_string(),
            message: self.to_string(),
            code: self.code().to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Mensaje de un error de validación; cae al código si no tiene mensaje
pub fn validation_message(error: &validator::ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
