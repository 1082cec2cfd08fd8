use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::bike_controller::BikeController;
use crate::dto::bike_dto::{BikeResponse, CreateBikeRequest, UpdateBikeRequest};
use crate::middleware::auth::{auth_middleware, require_roles, AuthenticatedUser};
use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_bike_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_bikes).post(create_bike))
        .route(
            "/:id",
            get(get_bike).put(update_bike).delete(delete_bike),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_bike(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateBikeRequest>,
) -> Result<Json<BikeResponse>, AppError> {
    require_roles(&user, &[UserRole::Admin, UserRole::Manager])?;
    let controller = BikeController::new(state.bikes.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_bikes(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<BikeResponse>>, AppError> {
    require_roles(&user, &[])?;
    let controller = BikeController::new(state.bikes.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_bike(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<BikeResponse>, AppError> {
    require_roles(&user, &[])?;
    let controller = BikeController::new(state.bikes.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_bike(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBikeRequest>,
) -> Result<Json<BikeResponse>, AppError> {
    require_roles(&user, &[UserRole::Admin, UserRole::Manager])?;
    let controller = BikeController::new(state.bikes.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_bike(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_roles(&user, &[UserRole::Admin])?;
    let controller = BikeController::new(state.bikes.clone());
    controller.delete(id).await?;
    Ok(Json(json!({ "message": "Bike deleted" })))
}
