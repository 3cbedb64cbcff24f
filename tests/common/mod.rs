//! Stores en memoria para los tests de servicios y handlers
//!
//! Reproducen el comportamiento observable de los stores de PostgreSQL:
//! ids inválidos, "no encontrado" como `None`, y los errores de update/delete.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use car_engine_api::config::EnvironmentConfig;
use car_engine_api::dto::{CarRequest, EngineRequest};
use car_engine_api::models::{Car, Engine};
use car_engine_api::repositories::{parse_id, CarStore, EngineStore};
use car_engine_api::utils::errors::not_found_error;
use car_engine_api::{AppError, AppResult, AppState};

#[derive(Default)]
pub struct InMemoryEngineStore {
    engines: Mutex<HashMap<Uuid, Engine>>,
}

impl InMemoryEngineStore {
    pub fn len(&self) -> usize {
        self.engines.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<Engine> {
        self.engines.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl EngineStore for InMemoryEngineStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Engine>> {
        let id = parse_id("engine", id)?;
        Ok(self.get(id))
    }

    async fn create(&self, request: &EngineRequest) -> AppResult<Engine> {
        let engine = Engine {
            engine_id: Uuid::new_v4(),
            displacement: request.displacement,
            no_of_cylinders: request.no_of_cylinders,
            car_range: request.car_range,
        };
        self.engines.lock().unwrap().insert(engine.engine_id, engine.clone());
        Ok(engine)
    }

    async fn update(&self, id: &str, request: &EngineRequest) -> AppResult<Engine> {
        let id = parse_id("engine", id)?;
        let mut engines = self.engines.lock().unwrap();
        let engine = engines.get_mut(&id).ok_or_else(|| not_found_error("engine not found"))?;
        engine.displacement = request.displacement;
        engine.no_of_cylinders = request.no_of_cylinders;
        engine.car_range = request.car_range;
        Ok(engine.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<Option<Engine>> {
        let id = parse_id("engine", id)?;
        Ok(self.engines.lock().unwrap().remove(&id))
    }
}

pub struct InMemoryCarStore {
    engines: Arc<InMemoryEngineStore>,
    cars: Mutex<HashMap<Uuid, Car>>,
}

impl InMemoryCarStore {
    pub fn new(engines: Arc<InMemoryEngineStore>) -> Self {
        Self {
            engines,
            cars: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.cars.lock().unwrap().len()
    }

    fn with_engine(&self, mut car: Car) -> Car {
        if let Some(engine) = self.engines.get(car.engine.engine_id) {
            car.engine = engine;
        }
        car
    }
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Car>> {
        let id = parse_id("car", id)?;
        let car = self.cars.lock().unwrap().get(&id).cloned();
        Ok(car.map(|car| self.with_engine(car)))
    }

    async fn find_by_brand(&self, brand: &str, include_engine: bool) -> AppResult<Vec<Car>> {
        let cars: Vec<Car> = self
            .cars
            .lock()
            .unwrap()
            .values()
            .filter(|car| car.brand == brand)
            .cloned()
            .collect();
        Ok(cars
            .into_iter()
            .map(|car| {
                if include_engine {
                    self.with_engine(car)
                } else {
                    car
                }
            })
            .collect())
    }

    async fn create(&self, request: &CarRequest) -> AppResult<Car> {
        let engine_id = request.engine.engine_id;
        if self.engines.get(engine_id).is_none() {
            return Err(AppError::EngineNotFound(engine_id));
        }
        let now = Utc::now();
        let car = Car {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            year: request.year.clone(),
            brand: request.brand.clone(),
            fuel_type: request.fuel_type.clone(),
            engine: Engine {
                engine_id,
                ..Engine::default()
            },
            price: request.price,
            created_at: now,
            updated_at: now,
        };
        self.cars.lock().unwrap().insert(car.id, car.clone());
        Ok(self.with_engine(car))
    }

    async fn update(&self, id: &str, request: &CarRequest) -> AppResult<Car> {
        let id = parse_id("car", id)?;
        let updated = {
            let mut cars = self.cars.lock().unwrap();
            // Igual que UPDATE ... RETURNING sin filas: el error de la consulta se propaga
            let car = cars
                .get_mut(&id)
                .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
            car.name = request.name.clone();
            car.year = request.year.clone();
            car.brand = request.brand.clone();
            car.fuel_type = request.fuel_type.clone();
            car.engine = Engine {
                engine_id: request.engine.engine_id,
                ..Engine::default()
            };
            car.price = request.price;
            car.updated_at = Utc::now();
            car.clone()
        };
        Ok(self.with_engine(updated))
    }

    async fn delete(&self, id: &str) -> AppResult<Car> {
        let id = parse_id("car", id)?;
        let removed = self
            .cars
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| not_found_error("car not found"))?;
        Ok(self.with_engine(removed))
    }
}

pub struct TestContext {
    pub engines: Arc<InMemoryEngineStore>,
    pub cars: Arc<InMemoryCarStore>,
    pub state: AppState,
}

pub fn test_context() -> TestContext {
    let engines = Arc::new(InMemoryEngineStore::default());
    let cars = Arc::new(InMemoryCarStore::new(engines.clone()));
    let state = AppState::with_stores(cars.clone(), engines.clone(), EnvironmentConfig::default());
    TestContext { engines, cars, state }
}

pub fn engine_request() -> EngineRequest {
    EngineRequest {
        displacement: 1998,
        no_of_cylinders: 4,
        car_range: 650,
    }
}

pub fn car_request(engine: &Engine) -> CarRequest {
    CarRequest {
        name: "Golf".to_string(),
        year: "2015".to_string(),
        brand: "Volkswagen".to_string(),
        fuel_type: "Diesel".to_string(),
        engine: engine.clone(),
        price: Decimal::new(1_999_950, 2),
    }
}
