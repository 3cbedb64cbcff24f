use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Engine;

// Request para crear o actualizar un coche
// Los campos ausentes quedan en su valor cero y los rechaza la validación
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarRequest {
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine: Engine,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

// Filtros de GET /cars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CarFilters {
    pub brand: String,
    #[serde(rename = "isEngine")]
    pub is_engine: Option<String>,
}

impl CarFilters {
    /// Sólo el literal "true" activa el join con engines
    pub fn include_engine(&self) -> bool {
        self.is_engine.as_deref() == Some("true")
    }
}
