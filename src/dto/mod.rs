//! DTOs de entrada de la API

pub mod car_dto;
pub mod engine_dto;

pub use car_dto::{CarFilters, CarRequest};
pub use engine_dto::EngineRequest;
