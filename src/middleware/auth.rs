//! Middleware de autenticación JWT
//!
//! Extrae y valida el token Bearer, comprueba que el usuario sigue
//! existiendo en el store e inyecta un `AuthenticatedUser` en la request.
//! El control de roles por operación se hace con [`require_roles`].

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    models::user::UserRole,
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{verify_token, JwtConfig},
    },
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
    pub name: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let claims = verify_token(token, &JwtConfig::from(&state.config))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

    // El rol se toma del registro actual del usuario, no del token, para
    // que un cambio de rol tenga efecto inmediato
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

    let authenticated_user = AuthenticatedUser {
        user_id: user.id,
        role: user.role,
        name: user.name,
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Verifica que el usuario tenga alguno de los roles requeridos.
/// Una lista vacía significa "cualquier usuario autenticado".
pub fn require_roles(user: &AuthenticatedUser, roles: &[UserRole]) -> Result<(), AppError> {
    if roles.is_empty() || roles.contains(&user.role) {
        return Ok(());
    }

    Err(AppError::Forbidden(
        "No tienes permisos para realizar esta operación".to_string(),
    ))
}
