//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool de PostgreSQL con SQLx.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;
use std::time::Duration;

use crate::utils::errors::{AppError, AppResult};

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    /// Leer la configuración desde variables de entorno
    pub fn from_env() -> AppResult<Self> {
        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::Configuration("DATABASE_URL must be set in environment variables".to_string())
        })?;

        let mut config = Self::new(url);
        if let Some(max) = parse_env("DATABASE_MAX_CONNECTIONS")? {
            config.max_connections = max;
        }
        if let Some(min) = parse_env("DATABASE_MIN_CONNECTIONS")? {
            config.min_connections = min;
        }
        Ok(config)
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}

fn parse_env(key: &str) -> AppResult<Option<u32>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Configuration(format!("{} must be a valid number", key))),
        Err(_) => Ok(None),
    }
}
