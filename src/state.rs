//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los repositorios se exponen como trait
//! objects para poder sustituirlos por dobles en memoria en los tests.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::repositories::bike_repository::{BikeRepository, PgBikeRepository};
use crate::repositories::brand_repository::{BrandRepository, PgBrandRepository};
use crate::repositories::user_repository::{PgUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub brands: Arc<dyn BrandRepository>,
    pub bikes: Arc<dyn BikeRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            config,
            brands: Arc::new(PgBrandRepository::new(pool.clone())),
            bikes: Arc::new(PgBikeRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool)),
        }
    }
}
