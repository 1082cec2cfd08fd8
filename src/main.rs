mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::EnvironmentConfig;
use middleware::cors::cors_layer;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🏍️  Bike Inventory - API de inventario de motos");
    info!("================================================");

    let env_config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = format!("{}:{}", env_config.host, env_config.port).parse()?;
    let cors = cors_layer(&env_config.cors_origins);
    let app_state = AppState::new(pool, env_config);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1/auth", routes::auth_routes::create_auth_router())
        .nest(
            "/api/v1/bikes",
            routes::bike_routes::create_bike_router(app_state.clone()),
        )
        .nest(
            "/api/v1/brands",
            routes::brand_routes::create_brand_router(app_state.clone()),
        )
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Auth:");
    info!("   POST /api/v1/auth/signup - Registrar usuario");
    info!("   POST /api/v1/auth/login - Login");
    info!("🏍️  Bikes:");
    info!("   POST   /api/v1/bikes - Dar de alta una moto");
    info!("   GET    /api/v1/bikes - Listar motos");
    info!("   GET    /api/v1/bikes/:id - Obtener moto");
    info!("   PUT    /api/v1/bikes/:id - Actualizar moto");
    info!("   DELETE /api/v1/bikes/:id - Eliminar moto");
    info!("🏷️  Brands:");
    info!("   GET  /api/v1/brands - Marcas con estadísticas");
    info!("   GET  /api/v1/brands/summary - Resumen global");
    info!("   POST /api/v1/brands - Crear marca");
    info!("   PUT  /api/v1/brands/:id - Renombrar marca");
    info!("   GET  /api/v1/brands/:name/bikes - Motos por marca");
    info!("   GET  /api/v1/brands/:name/stats - Estadísticas por marca");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "bike-inventory",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
