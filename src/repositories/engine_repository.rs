use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::in_transaction;
use crate::dto::EngineRequest;
use crate::models::Engine;
use crate::utils::errors::{not_found_error, AppError, AppResult};

use super::parse_id;

const SELECT_ENGINE: &str =
    "SELECT id, displacement, no_of_cylinders, car_range FROM engines WHERE id = $1";

/// Operaciones de persistencia de motores
#[async_trait]
pub trait EngineStore: Send + Sync {
    /// `None` si no existe ningún motor con ese id
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Engine>>;

    /// Devuelve el motor construido a partir del request (no se relee)
    async fn create(&self, request: &EngineRequest) -> AppResult<Engine>;

    /// Falla con "engine not found" si el UPDATE no afecta ninguna fila
    async fn update(&self, id: &str, request: &EngineRequest) -> AppResult<Engine>;

    /// Devuelve la copia previa al borrado, o `None` si no existía
    async fn delete(&self, id: &str) -> AppResult<Option<Engine>>;
}

pub struct EngineRepository {
    pool: PgPool,
}

impl EngineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngineStore for EngineRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Engine>> {
        let engine_id = parse_id("engine", id)?;

        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let engine = sqlx::query_as::<_, Engine>(SELECT_ENGINE)
                    .bind(engine_id)
                    .fetch_optional(&mut *conn)
                    .await?;
                Ok::<_, AppError>(engine)
            })
        })
        .await
    }

    async fn create(&self, request: &EngineRequest) -> AppResult<Engine> {
        let engine = Engine {
            engine_id: Uuid::new_v4(),
            displacement: request.displacement,
            no_of_cylinders: request.no_of_cylinders,
            car_range: request.car_range,
        };

        let created = in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                sqlx::query(
                    r#"
                    INSERT INTO engines (id, displacement, no_of_cylinders, car_range)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(engine.engine_id)
                .bind(engine.displacement)
                .bind(engine.no_of_cylinders)
                .bind(engine.car_range)
                .execute(&mut *conn)
                .await?;
                Ok::<_, AppError>(engine)
            })
        })
        .await?;

        log::info!("✅ Motor creado: {}", created.engine_id);
        Ok(created)
    }

    async fn update(&self, id: &str, request: &EngineRequest) -> AppResult<Engine> {
        let engine_id = parse_id("engine", id)?;
        let engine = Engine {
            engine_id,
            displacement: request.displacement,
            no_of_cylinders: request.no_of_cylinders,
            car_range: request.car_range,
        };

        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let result = sqlx::query(
                    r#"
                    UPDATE engines
                    SET displacement = $2, no_of_cylinders = $3, car_range = $4
                    WHERE id = $1
                    "#,
                )
                .bind(engine.engine_id)
                .bind(engine.displacement)
                .bind(engine.no_of_cylinders)
                .bind(engine.car_range)
                .execute(&mut *conn)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(not_found_error("engine not found"));
                }
                Ok::<_, AppError>(engine)
            })
        })
        .await
    }

    async fn delete(&self, id: &str) -> AppResult<Option<Engine>> {
        let engine_id = parse_id("engine", id)?;

        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let existing = sqlx::query_as::<_, Engine>(SELECT_ENGINE)
                    .bind(engine_id)
                    .fetch_optional(&mut *conn)
                    .await?;

                let Some(engine) = existing else {
                    return Ok(None);
                };

                let result = sqlx::query("DELETE FROM engines WHERE id = $1")
                    .bind(engine_id)
                    .execute(&mut *conn)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(not_found_error("no rows deleted"));
                }
                Ok::<_, AppError>(Some(engine))
            })
        })
        .await
    }
}
