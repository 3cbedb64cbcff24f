//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean
//! al schema PostgreSQL (tablas cars y engines).

pub mod car;
pub mod engine;

pub use car::{Car, CarRow, FuelType};
pub use engine::Engine;
