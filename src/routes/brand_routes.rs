use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::brand_controller::BrandController;
use crate::dto::bike_dto::BikeResponse;
use crate::dto::brand_dto::{
    BrandNameRequest, BrandResponse, BrandStatsResponse, BrandWithStatsResponse,
    RenameBrandResponse, SummaryResponse,
};
use crate::middleware::auth::{auth_middleware, require_roles, AuthenticatedUser};
use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_brand_router(state: AppState) -> Router<AppState> {
    // El router exige el mismo nombre de parámetro en rutas hermanas, así
    // que `:key` es el id de la marca en el PUT y el nombre literal en las
    // rutas de consulta.
    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route("/summary", get(get_summary))
        .route("/:key", put(rename_brand))
        .route("/:key/bikes", get(get_bikes_by_brand))
        .route("/:key/stats", get(get_brand_stats))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn controller(state: &AppState) -> BrandController {
    BrandController::new(state.brands.clone(), state.bikes.clone())
}

async fn list_brands(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<BrandWithStatsResponse>>, AppError> {
    require_roles(&user, &[])?;
    let response = controller(&state).list_with_stats().await?;
    Ok(Json(response))
}

async fn get_summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<SummaryResponse>, AppError> {
    require_roles(&user, &[])?;
    let response = controller(&state).summary().await?;
    Ok(Json(response))
}

async fn create_brand(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<BrandNameRequest>,
) -> Result<Json<BrandResponse>, AppError> {
    require_roles(&user, &[UserRole::Admin, UserRole::Manager])?;
    let response = controller(&state).create(request).await?;
    Ok(Json(response))
}

async fn rename_brand(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<BrandNameRequest>,
) -> Result<Json<RenameBrandResponse>, AppError> {
    require_roles(&user, &[UserRole::Admin, UserRole::Manager])?;
    let response = controller(&state).rename(id, request).await?;
    Ok(Json(response))
}

async fn get_bikes_by_brand(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(brand_name): Path<String>,
) -> Result<Json<Vec<BikeResponse>>, AppError> {
    require_roles(&user, &[])?;
    let response = controller(&state).bikes_for(&brand_name).await?;
    Ok(Json(response))
}

async fn get_brand_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(brand_name): Path<String>,
) -> Result<Json<BrandStatsResponse>, AppError> {
    require_roles(&user, &[])?;
    let response = controller(&state).stats_for(&brand_name).await?;
    Ok(Json(response))
}
