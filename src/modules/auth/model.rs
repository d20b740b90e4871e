use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// JWT claims attached to every authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub roles: Vec<String>,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// The signed token together with the identity it carries.
///
/// The nesting (`{token: {id, roles, token}}`) mirrors the wire format of
/// the system being reimplemented and is deliberately not flattened.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPayload {
    pub id: Uuid,
    pub roles: Vec<String>,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: TokenPayload,
}
