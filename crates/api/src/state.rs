use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{CheckoutResolver, IntakeCoordinator};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in the composition root and cheaply cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bellhop_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Batched luggage intake.
    pub intake: Arc<IntakeCoordinator>,
    /// Checkout by retrieval code.
    pub checkout: Arc<CheckoutResolver>,
}

impl AppState {
    /// Wire services around one pool.
    pub fn new(pool: bellhop_db::DbPool, config: ServerConfig) -> Self {
        Self {
            intake: Arc::new(IntakeCoordinator::new(pool.clone())),
            checkout: Arc::new(CheckoutResolver::new(pool.clone())),
            pool,
            config: Arc::new(config),
        }
    }
}
