//! Modelo de Car
//!
//! Este módulo contiene el struct Car, el tipo de combustible y la fila
//! plana que devuelve PostgreSQL (con o sin el join de engines).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use super::engine::Engine;

/// Tipos de combustible aceptados
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for FuelType {
    type Err = String;

    // Comparación exacta, sensible a mayúsculas
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == value)
            .ok_or_else(|| format!("unknown fuel type '{}'", value))
    }
}

/// Car principal tal como se expone en la API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine: Engine,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    pub fn is_zero(&self) -> bool {
        self.id.is_nil()
    }
}

/// Fila de la tabla cars, opcionalmente con las columnas de engines
///
/// Sin el join sólo llega `engine_id`; las columnas del motor quedan en `None`.
#[derive(Debug, FromRow)]
pub struct CarRow {
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub price: Decimal,
    pub engine_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(default)]
    pub displacement: Option<i64>,
    #[sqlx(default)]
    pub no_of_cylinders: Option<i64>,
    #[sqlx(default)]
    pub car_range: Option<i64>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            year: row.year,
            brand: row.brand,
            fuel_type: row.fuel_type,
            engine: Engine {
                engine_id: row.engine_id,
                displacement: row.displacement.unwrap_or_default(),
                no_of_cylinders: row.no_of_cylinders.unwrap_or_default(),
                car_range: row.car_range.unwrap_or_default(),
            },
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
