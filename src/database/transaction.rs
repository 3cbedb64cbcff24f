//! Transacciones con alcance
//!
//! `in_transaction` abre una transacción, ejecuta la operación y decide una
//! sola vez, a partir del resultado de la operación, si hace commit o rollback.

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

use crate::utils::errors::AppResult;

/// Ejecutar `op` dentro de una transacción propia
///
/// Commit sólo si `op` devuelve `Ok`. Si `op` falla se hace rollback y se
/// devuelve el error original; un fallo del rollback sólo se registra.
/// Un fallo del commit se devuelve como error.
pub async fn in_transaction<T, F>(pool: &PgPool, op: F) -> AppResult<T>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, AppResult<T>> + Send,
{
    let mut tx = pool.begin().await?;

    match op(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                log::warn!("⚠️ Error haciendo rollback de la transacción: {}", rollback_err);
            }
            Err(err)
        }
    }
}
