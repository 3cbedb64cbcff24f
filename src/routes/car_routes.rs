use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::dto::{CarFilters, CarRequest};
use crate::models::Car;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(get_cars_by_brand).post(create_car))
        .route("/cars/:id", get(get_car).put(update_car).delete(delete_car))
}

// Un JSON mal formado se responde igual que cualquier otro error (500)
fn decode(payload: Result<Json<CarRequest>, JsonRejection>) -> Result<CarRequest, AppError> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| bad_request_error(&rejection.body_text()))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    let car = state.car_service.get_car_by_id(&id).await?;
    // Contrato: un coche inexistente se devuelve como valor cero con 200
    Ok(Json(car.unwrap_or_default()))
}

async fn get_cars_by_brand(
    State(state): State<AppState>,
    Query(filters): Query<CarFilters>,
) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state
        .car_service
        .get_cars_by_brand(&filters.brand, filters.include_engine())
        .await?;
    Ok(Json(cars))
}

async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let request = decode(payload)?;
    let car = state.car_service.create_car(&request).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let request = decode(payload)?;
    let car = state.car_service.update_car(&id, &request).await?;
    Ok(Json(car))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    let car = state.car_service.delete_car(&id).await?;
    Ok(Json(car))
}
