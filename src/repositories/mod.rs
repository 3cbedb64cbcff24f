//! Repositorios (stores) de acceso a datos
//!
//! Cada operación abre su propia transacción. Las búsquedas devuelven
//! `Option`: `None` es el único "no encontrado" para ambas entidades.

pub mod car_repository;
pub mod engine_repository;

pub use car_repository::{CarRepository, CarStore};
pub use engine_repository::{EngineRepository, EngineStore};

use uuid::Uuid;

use crate::utils::errors::{AppError, AppResult};

/// Parsear un identificador recibido en la ruta
pub fn parse_id(entity: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| AppError::InvalidId(format!("{} id '{}': {}", entity, raw, e)))
}
