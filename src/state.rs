//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable entre requests:
//! todo lo durable vive en PostgreSQL.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::repositories::{CarRepository, CarStore, EngineRepository, EngineStore};
use crate::services::{CarService, EngineService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub car_service: CarService,
    pub engine_service: EngineService,
}

impl AppState {
    /// Estado con los stores de PostgreSQL sobre el pool dado
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self::with_stores(
            Arc::new(CarRepository::new(pool.clone())),
            Arc::new(EngineRepository::new(pool)),
            config,
        )
    }

    /// Estado con stores arbitrarios
    pub fn with_stores(
        car_store: Arc<dyn CarStore>,
        engine_store: Arc<dyn EngineStore>,
        config: EnvironmentConfig,
    ) -> Self {
        Self {
            config,
            car_service: CarService::new(car_store),
            engine_service: EngineService::new(engine_store),
        }
    }
}
