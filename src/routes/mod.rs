//! Rutas HTTP
//!
//! Handlers de coches y motores. Decodifican el request, llaman al servicio
//! y codifican la respuesta con su código de estado.

pub mod car_routes;
pub mod engine_routes;
pub mod health_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .merge(health_routes::create_health_router())
        .merge(car_routes::create_car_router())
        .merge(engine_routes::create_engine_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
