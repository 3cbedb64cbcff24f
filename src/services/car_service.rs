use std::sync::Arc;

use crate::dto::CarRequest;
use crate::models::Car;
use crate::repositories::CarStore;
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_car_request;

/// Servicio de coches: valida el payload antes de cualquier acceso al store
#[derive(Clone)]
pub struct CarService {
    store: Arc<dyn CarStore>,
}

impl CarService {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }

    pub async fn get_car_by_id(&self, id: &str) -> AppResult<Option<Car>> {
        self.store.find_by_id(id).await
    }

    pub async fn get_cars_by_brand(&self, brand: &str, include_engine: bool) -> AppResult<Vec<Car>> {
        let cars = self.store.find_by_brand(brand, include_engine).await?;
        log::debug!("🔍 {} coches encontrados para la marca '{}'", cars.len(), brand);
        Ok(cars)
    }

    pub async fn create_car(&self, request: &CarRequest) -> AppResult<Car> {
        validate_car_request(request)?;
        self.store.create(request).await
    }

    pub async fn update_car(&self, id: &str, request: &CarRequest) -> AppResult<Car> {
        validate_car_request(request)?;
        self.store.update(id, request).await
    }

    pub async fn delete_car(&self, id: &str) -> AppResult<Car> {
        self.store.delete(id).await
    }
}
