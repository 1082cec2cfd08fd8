use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use crate::models::user::{User, UserRole};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    users: Arc<dyn UserRepository>,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<MessageResponse, AppError> {
        request.validate()?;

        if self.users.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = User::new(
            request.name,
            request.email,
            password_hash,
            request.role.unwrap_or(UserRole::Viewer),
        );

        self.users.create(&user).await?;

        Ok(MessageResponse::new("User created"))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, user.role, &self.jwt)?;

        Ok(LoginResponse {
            token,
            role: user.role,
            name: user.name,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;
    use crate::utils::jwt::verify_token;

    fn controller() -> AuthController {
        AuthController::new(
            Arc::new(InMemoryUserRepository::default()),
            JwtConfig {
                secret: "test-secret".to_string(),
                expiration: 3600,
            },
        )
    }

    fn signup_request(email: &str, role: Option<UserRole>) -> SignupRequest {
        SignupRequest {
            name: "Ana García".to_string(),
            email: email.to_string(),
            password: "secreto123".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let ctrl = controller();
        ctrl.signup(signup_request("ana@taller.es", Some(UserRole::Manager)))
            .await
            .unwrap();

        let response = ctrl
            .login(LoginRequest {
                email: "ana@taller.es".to_string(),
                password: "secreto123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.role, UserRole::Manager);
        assert_eq!(response.email, "ana@taller.es");

        let claims = verify_token(&response.token, &ctrl.jwt).unwrap();
        assert_eq!(claims.role, UserRole::Manager);
    }

    #[tokio::test]
    async fn test_signup_defaults_to_viewer() {
        let ctrl = controller();
        ctrl.signup(signup_request("ana@taller.es", None))
            .await
            .unwrap();

        let response = ctrl
            .login(LoginRequest {
                email: "ana@taller.es".to_string(),
                password: "secreto123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.role, UserRole::Viewer);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_rejected() {
        let ctrl = controller();
        ctrl.signup(signup_request("ana@taller.es", None))
            .await
            .unwrap();

        let result = ctrl.signup(signup_request("ana@taller.es", None)).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_signup_invalid_email_rejected() {
        let ctrl = controller();
        let result = ctrl.signup(signup_request("no-es-un-email", None)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_login_wrong_password_unauthorized() {
        let ctrl = controller();
        ctrl.signup(signup_request("ana@taller.es", None))
            .await
            .unwrap();

        let result = ctrl
            .login(LoginRequest {
                email: "ana@taller.es".to_string(),
                password: "incorrecta".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_email_unauthorized() {
        let ctrl = controller();
        let result = ctrl
            .login(LoginRequest {
                email: "nadie@taller.es".to_string(),
                password: "loquesea".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
