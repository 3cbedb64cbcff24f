//! Modelo de Engine
//!
//! Mapea la tabla `engines`. Los nombres JSON (`noOfCylinders`, `carRange`)
//! se mantienen por compatibilidad con los clientes existentes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Engine principal - mapea exactamente a la tabla engines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Engine {
    #[sqlx(rename = "id")]
    pub engine_id: Uuid,
    pub displacement: i64,
    #[serde(rename = "noOfCylinders")]
    pub no_of_cylinders: i64,
    #[serde(rename = "carRange")]
    pub car_range: i64,
}

impl Engine {
    /// Un motor sin identificador es el valor cero (no encontrado)
    pub fn is_zero(&self) -> bool {
        self.engine_id.is_nil()
    }
}
