//! Services module
//!
//! Capa de servicios entre los handlers HTTP y los stores. No añade reglas
//! de negocio propias: valida los payloads y devuelve los errores sin traducir.

pub mod car_service;
pub mod engine_service;

pub use car_service::CarService;
pub use engine_service::EngineService;
