use std::sync::Arc;

use crate::dto::EngineRequest;
use crate::models::Engine;
use crate::repositories::EngineStore;
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_engine_request;

/// Servicio de motores: valida y delega en el store
#[derive(Clone)]
pub struct EngineService {
    store: Arc<dyn EngineStore>,
}

impl EngineService {
    pub fn new(store: Arc<dyn EngineStore>) -> Self {
        Self { store }
    }

    pub async fn get_engine_by_id(&self, id: &str) -> AppResult<Option<Engine>> {
        self.store.find_by_id(id).await
    }

    pub async fn create_engine(&self, request: &EngineRequest) -> AppResult<Engine> {
        validate_engine_request(request)?;
        self.store.create(request).await
    }

    pub async fn update_engine(&self, id: &str, request: &EngineRequest) -> AppResult<Engine> {
        validate_engine_request(request)?;
        self.store.update(id, request).await
    }

    pub async fn delete_engine(&self, id: &str) -> AppResult<Option<Engine>> {
        let deleted = self.store.delete(id).await?;
        if deleted.is_none() {
            log::info!("ℹ️ Motor {} no existe, nada que borrar", id);
        }
        Ok(deleted)
    }
}
