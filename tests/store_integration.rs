//! Tests de los stores contra PostgreSQL real
//!
//! Requieren TEST_DATABASE_URL y se ejecutan con `cargo test -- --ignored`.

use car_engine_api::config::DatabaseConfig;
use car_engine_api::dto::{CarRequest, EngineRequest};
use car_engine_api::models::Engine;
use car_engine_api::repositories::{CarRepository, CarStore, EngineRepository, EngineStore};
use car_engine_api::AppError;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const SCHEMA: &str = include_str!("../db/schema.sql");

async fn setup_test_database() -> PgPool {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must be set to run store integration tests");
    let mut config = DatabaseConfig::new(url);
    config.max_connections = 2;
    let pool = config.create_pool().await.expect("Failed to connect to test database");

    for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("Failed to create schema");
    }
    pool
}

fn engine_request() -> EngineRequest {
    EngineRequest {
        displacement: 2998,
        no_of_cylinders: 6,
        car_range: 540,
    }
}

fn car_request(engine: &Engine, brand: &str) -> CarRequest {
    CarRequest {
        name: "M3".to_string(),
        year: "2020".to_string(),
        brand: brand.to_string(),
        fuel_type: "Petrol".to_string(),
        engine: engine.clone(),
        price: Decimal::new(7_250_000, 2),
    }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_engine_lifecycle() {
    let pool = setup_test_database().await;
    let store = EngineRepository::new(pool);

    let created = store.create(&engine_request()).await.unwrap();
    let id = created.engine_id.to_string();
    assert_eq!(store.find_by_id(&id).await.unwrap(), Some(created.clone()));

    let mut request = engine_request();
    request.car_range = 600;
    let updated = store.update(&id, &request).await.unwrap();
    assert_eq!(updated.car_range, 600);

    let deleted = store.delete(&id).await.unwrap();
    assert_eq!(deleted.map(|e| e.car_range), Some(600));
    assert_eq!(store.find_by_id(&id).await.unwrap(), None);
    assert_eq!(store.delete(&id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_engine_update_unknown_id() {
    let store = EngineRepository::new(setup_test_database().await);
    let error = store
        .update(&Uuid::new_v4().to_string(), &engine_request())
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "engine not found");

    let error = store.update("bogus", &engine_request()).await.unwrap_err();
    assert!(matches!(error, AppError::InvalidId(_)));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_car_lifecycle() {
    let pool = setup_test_database().await;
    let engines = EngineRepository::new(pool.clone());
    let cars = CarRepository::new(pool);
    let brand = format!("brand-{}", Uuid::new_v4());

    let engine = engines.create(&engine_request()).await.unwrap();
    let created = cars.create(&car_request(&engine, &brand)).await.unwrap();
    assert_eq!(created.engine, engine);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = cars.find_by_id(&created.id.to_string()).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let listed = cars.find_by_brand(&brand, false).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].engine.engine_id, engine.engine_id);
    assert_eq!(listed[0].engine.displacement, 0);

    let joined = cars.find_by_brand(&brand, true).await.unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].engine, engine);
    assert_eq!(joined[0].id, created.id);

    let mut request = car_request(&engine, &brand);
    request.fuel_type = "Hybrid".to_string();
    let updated = cars.update(&created.id.to_string(), &request).await.unwrap();
    assert_eq!(updated.fuel_type, "Hybrid");
    assert!(updated.updated_at >= created.updated_at);

    let deleted = cars.delete(&created.id.to_string()).await.unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(cars.find_by_id(&created.id.to_string()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_car_with_missing_engine_is_not_inserted() {
    let pool = setup_test_database().await;
    let cars = CarRepository::new(pool);
    let brand = format!("brand-{}", Uuid::new_v4());
    let ghost = Engine {
        engine_id: Uuid::new_v4(),
        displacement: 1,
        no_of_cylinders: 1,
        car_range: 1,
    };

    let error = cars.create(&car_request(&ghost, &brand)).await.unwrap_err();
    assert!(matches!(error, AppError::EngineNotFound(_)));
    assert!(cars.find_by_brand(&brand, true).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_car_update_and_delete_unknown_id() {
    let pool = setup_test_database().await;
    let engines = EngineRepository::new(pool.clone());
    let cars = CarRepository::new(pool);
    let engine = engines.create(&engine_request()).await.unwrap();
    let id = Uuid::new_v4().to_string();

    let error = cars.update(&id, &car_request(&engine, "none")).await.unwrap_err();
    assert!(matches!(error, AppError::Database(sqlx::Error::RowNotFound)));

    let error = cars.delete(&id).await.unwrap_err();
    assert_eq!(error.to_string(), "car not found");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_failed_engine_delete_rolls_back() {
    let pool = setup_test_database().await;
    let engines = EngineRepository::new(pool.clone());
    let cars = CarRepository::new(pool);
    let brand = format!("brand-{}", Uuid::new_v4());

    let engine = engines.create(&engine_request()).await.unwrap();
    let car = cars.create(&car_request(&engine, &brand)).await.unwrap();
    let id = engine.engine_id.to_string();

    // cars.engine_id sigue apuntando al motor: la FK hace fallar el DELETE
    let error = engines.delete(&id).await.unwrap_err();
    assert!(matches!(error, AppError::Database(_)));

    assert_eq!(engines.find_by_id(&id).await.unwrap(), Some(engine.clone()));
    let joined = cars.find_by_brand(&brand, true).await.unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].engine, engine);

    cars.delete(&car.id.to_string()).await.unwrap();
    assert_eq!(engines.delete(&id).await.unwrap(), Some(engine));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_failed_car_update_leaves_row_untouched() {
    let pool = setup_test_database().await;
    let engines = EngineRepository::new(pool.clone());
    let cars = CarRepository::new(pool);
    let brand = format!("brand-{}", Uuid::new_v4());

    let engine = engines.create(&engine_request()).await.unwrap();
    let created = cars.create(&car_request(&engine, &brand)).await.unwrap();

    // Motor inexistente: la FK rechaza el UPDATE dentro de la transacción
    let ghost = Engine {
        engine_id: Uuid::new_v4(),
        ..engine.clone()
    };
    let mut request = car_request(&ghost, &brand);
    request.name = "changed".to_string();
    let error = cars.update(&created.id.to_string(), &request).await.unwrap_err();
    assert!(matches!(error, AppError::Database(_)));

    let fetched = cars.find_by_id(&created.id.to_string()).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    cars.delete(&created.id.to_string()).await.unwrap();
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_price_round_trips_exactly() {
    let pool = setup_test_database().await;
    let engines = EngineRepository::new(pool.clone());
    let cars = CarRepository::new(pool);
    let brand = format!("brand-{}", Uuid::new_v4());

    let engine = engines.create(&engine_request()).await.unwrap();
    let mut request = car_request(&engine, &brand);
    request.price = Decimal::new(1_999, 2);
    let created = cars.create(&request).await.unwrap();
    assert_eq!(created.price, Decimal::new(1_999, 2));

    let fetched = cars.find_by_id(&created.id.to_string()).await.unwrap().unwrap();
    assert_eq!(fetched.price, request.price);
}
