//! User entity and request DTOs.
//!
//! The [`User`] struct is the client-facing shape: the password hash lives
//! only in the `users` table and is never selected into it. Role and
//! password are deliberately absent from [`UpdateUserDto`]; neither is
//! client-mutable through the update path.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::middleware::role::{ROLE_ADMIN, ROLE_USER};
use crate::validator::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Roles must be a non-empty subset of {admin, user}.
pub fn validate_roles(roles: &[String]) -> Result<(), ValidationError> {
    if roles.is_empty() {
        let mut err = ValidationError::new("roles_empty");
        err.message = Some("roles must not be empty".into());
        return Err(err);
    }

    if roles.iter().any(|r| r != ROLE_ADMIN && r != ROLE_USER) {
        let mut err = ValidationError::new("roles_unknown");
        err.message = Some("roles may only contain 'admin' or 'user'".into());
        return Err(err);
    }

    Ok(())
}

/// Name and email are trimmed on deserialization; the password is taken
/// verbatim, surrounding whitespace included.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters"),
        custom(function = validate_not_blank, message = "name must not be blank")
    )]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    /// Defaults to `["user"]` when omitted.
    #[validate(custom(function = validate_roles))]
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters"),
        custom(function = validate_not_blank, message = "name must not be blank")
    )]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_roles() {
        assert!(validate_roles(&["user".to_string()]).is_ok());
        assert!(validate_roles(&["admin".to_string(), "user".to_string()]).is_ok());
    }

    #[test]
    fn rejects_empty_roles() {
        assert!(validate_roles(&[]).is_err());
    }

    #[test]
    fn rejects_unknown_roles() {
        assert!(validate_roles(&["superadmin".to_string()]).is_err());
    }
}
