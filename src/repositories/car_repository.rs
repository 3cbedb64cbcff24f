use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::in_transaction;
use crate::dto::CarRequest;
use crate::models::{Car, CarRow};
use crate::utils::errors::{not_found_error, AppError, AppResult};

use super::parse_id;

// Columnas de cars + engines; la fila resultante se mapea a CarRow
const SELECT_CAR_WITH_ENGINE: &str = r#"
    SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price, c.engine_id,
           c.created_at, c.updated_at, e.displacement, e.no_of_cylinders, e.car_range
    FROM cars c
    LEFT JOIN engines e ON c.engine_id = e.id
"#;

const SELECT_CAR_WITHOUT_ENGINE: &str = r#"
    SELECT id, name, year, brand, fuel_type, price, engine_id, created_at, updated_at
    FROM cars
"#;

/// Operaciones de persistencia de coches
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Coche con los datos de su motor, o `None` si no existe
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Car>>;

    /// Coches de una marca; con `include_engine` se rellenan los datos del motor
    async fn find_by_brand(&self, brand: &str, include_engine: bool) -> AppResult<Vec<Car>>;

    /// Falla con `EngineNotFound` si el motor referenciado no existe
    async fn create(&self, request: &CarRequest) -> AppResult<Car>;

    /// Sin comprobación previa: un id inexistente propaga el error de la consulta
    async fn update(&self, id: &str, request: &CarRequest) -> AppResult<Car>;

    /// Devuelve la copia previa al borrado; "car not found" si no existe
    async fn delete(&self, id: &str) -> AppResult<Car>;
}

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for CarRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Car>> {
        let car_id = parse_id("car", id)?;
        let query = format!("{} WHERE c.id = $1", SELECT_CAR_WITH_ENGINE);

        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let row = sqlx::query_as::<_, CarRow>(&query)
                    .bind(car_id)
                    .fetch_optional(&mut *conn)
                    .await?;
                Ok::<_, AppError>(row.map(Car::from))
            })
        })
        .await
    }

    async fn find_by_brand(&self, brand: &str, include_engine: bool) -> AppResult<Vec<Car>> {
        let query = if include_engine {
            format!("{} WHERE c.brand = $1", SELECT_CAR_WITH_ENGINE)
        } else {
            format!("{} WHERE brand = $1", SELECT_CAR_WITHOUT_ENGINE)
        };
        let brand = brand.to_string();

        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let rows = sqlx::query_as::<_, CarRow>(&query)
                    .bind(brand)
                    .fetch_all(&mut *conn)
                    .await?;
                Ok::<Vec<Car>, AppError>(rows.into_iter().map(Car::from).collect())
            })
        })
        .await
    }

    async fn create(&self, request: &CarRequest) -> AppResult<Car> {
        let request = request.clone();
        let car_id = Uuid::new_v4();
        let now = Utc::now();

        let car = in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let engine_id = request.engine.engine_id;
                let engine_exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM engines WHERE id = $1")
                    .bind(engine_id)
                    .fetch_optional(&mut *conn)
                    .await?;
                if engine_exists.is_none() {
                    return Err(AppError::EngineNotFound(engine_id));
                }

                let row = sqlx::query_as::<_, CarRow>(
                    r#"
                    WITH inserted AS (
                        INSERT INTO cars (id, name, year, brand, fuel_type, engine_id, price, created_at, updated_at)
                        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                        RETURNING id, name, year, brand, fuel_type, engine_id, price, created_at, updated_at
                    )
                    SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price, c.engine_id,
                           c.created_at, c.updated_at, e.displacement, e.no_of_cylinders, e.car_range
                    FROM inserted c
                    LEFT JOIN engines e ON c.engine_id = e.id
                    "#,
                )
                .bind(car_id)
                .bind(&request.name)
                .bind(&request.year)
                .bind(&request.brand)
                .bind(&request.fuel_type)
                .bind(engine_id)
                .bind(request.price)
                .bind(now)
                .bind(now)
                .fetch_one(&mut *conn)
                .await?;
                Ok::<_, AppError>(Car::from(row))
            })
        })
        .await?;

        log::info!("✅ Coche creado: {} ({})", car.id, car.brand);
        Ok(car)
    }

    async fn update(&self, id: &str, request: &CarRequest) -> AppResult<Car> {
        let car_id = parse_id("car", id)?;
        let request = request.clone();
        let now = Utc::now();

        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let row = sqlx::query_as::<_, CarRow>(
                    r#"
                    WITH updated AS (
                        UPDATE cars
                        SET name = $2, year = $3, brand = $4, fuel_type = $5,
                            engine_id = $6, price = $7, updated_at = $8
                        WHERE id = $1
                        RETURNING id, name, year, brand, fuel_type, engine_id, price, created_at, updated_at
                    )
                    SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price, c.engine_id,
                           c.created_at, c.updated_at, e.displacement, e.no_of_cylinders, e.car_range
                    FROM updated c
                    LEFT JOIN engines e ON c.engine_id = e.id
                    "#,
                )
                .bind(car_id)
                .bind(&request.name)
                .bind(&request.year)
                .bind(&request.brand)
                .bind(&request.fuel_type)
                .bind(request.engine.engine_id)
                .bind(request.price)
                .bind(now)
                .fetch_one(&mut *conn)
                .await?;
                Ok::<_, AppError>(Car::from(row))
            })
        })
        .await
    }

    async fn delete(&self, id: &str) -> AppResult<Car> {
        let car_id = parse_id("car", id)?;
        let select = format!("{} WHERE c.id = $1", SELECT_CAR_WITH_ENGINE);

        let deleted = in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let existing = sqlx::query_as::<_, CarRow>(&select)
                    .bind(car_id)
                    .fetch_optional(&mut *conn)
                    .await?
                    .ok_or_else(|| not_found_error("car not found"))?;

                let result = sqlx::query("DELETE FROM cars WHERE id = $1")
                    .bind(car_id)
                    .execute(&mut *conn)
                    .await?;
                if result.rows_affected() == 0 {
                    return Err(not_found_error("car not found"));
                }
                Ok::<_, AppError>(Car::from(existing))
            })
        })
        .await?;

        log::info!("🗑️ Coche eliminado: {}", deleted.id);
        Ok(deleted)
    }
}
