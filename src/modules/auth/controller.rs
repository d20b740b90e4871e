use axum::{Json, extract::State};
use tracing::error;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse};
use super::service::{AuthService, AuthServiceError};

/// Authenticate and receive a bearer token.
///
/// Unlike the other controllers, unexpected failures here respond with a
/// fixed message instead of echoing the error; the rest of the API echoes.
/// The asymmetry is inherited behavior, kept on purpose.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    match AuthService::login(&state.db, dto, &state.jwt_config).await {
        Ok(response) => Ok(Json(response)),
        Err(AuthServiceError::InvalidCredentials) => {
            Err(AppError::unauthorized("Invalid email or password"))
        }
        Err(err) => {
            error!(error = %err, "login failed unexpectedly");
            Err(AppError::internal("An error occurred while logging in"))
        }
    }
}
