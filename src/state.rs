//! Shared state for the demo routers.

use crate::config::{ModelRegistry, Settings};
use crate::mock::MockStore;
use sqlx::SqlitePool;
use std::sync::Arc;

/// State of the ORM demo: database pool plus the model registry.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub models: Arc<ModelRegistry>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: SqlitePool, models: ModelRegistry, settings: Settings) -> Self {
        AppState {
            pool,
            models: Arc::new(models),
            settings: Arc::new(settings),
        }
    }
}

/// State of the basic demo: no database, one in-memory resource list.
#[derive(Clone, Default)]
pub struct DemoState {
    pub settings: Arc<Settings>,
    pub resources: MockStore,
}

impl DemoState {
    pub fn new(settings: Settings) -> Self {
        DemoState {
            settings: Arc::new(settings),
            resources: MockStore::default(),
        }
    }
}
