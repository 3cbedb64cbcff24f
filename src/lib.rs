//! API de coches y motores sobre PostgreSQL
//!
//! Handlers HTTP (axum) → servicios → stores (sqlx) → PostgreSQL.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
pub use utils::errors::{AppError, AppResult};
