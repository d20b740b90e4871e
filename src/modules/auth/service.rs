use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse, TokenPayload};

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub struct AuthService;

impl AuthService {
    /// Verifies credentials against the active user with the given email
    /// and issues a bearer token carrying id and role claims. Unknown
    /// email and wrong password are indistinguishable to the caller.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AuthServiceError> {
        #[derive(sqlx::FromRow)]
        struct UserCredentials {
            id: Uuid,
            password: String,
            roles: Vec<String>,
        }

        let user = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, password, roles FROM users WHERE email = $1 AND deleted_at IS NULL",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = create_access_token(user.id, &user.roles, jwt_config)?;

        Ok(LoginResponse {
            token: TokenPayload {
                id: user.id,
                roles: user.roles,
                token,
            },
        })
    }
}
