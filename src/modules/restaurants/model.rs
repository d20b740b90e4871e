use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validator::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    /// Tax identifier, unique across active restaurants.
    pub nit: String,
    pub phone: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Incoming text is trimmed on deserialization, so the length bounds below
/// apply to the trimmed value and the trimmed value is what gets stored.
/// The `not_blank` checks cover values built in code, which skip serde.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRestaurantDto {
    #[validate(
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters"),
        custom(function = validate_not_blank, message = "name must not be blank")
    )]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub name: String,
    #[validate(
        length(min = 1, max = 200, message = "address must be between 1 and 200 characters"),
        custom(function = validate_not_blank, message = "address must not be blank")
    )]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub address: String,
    #[validate(
        length(min = 1, max = 100, message = "city must be between 1 and 100 characters"),
        custom(function = validate_not_blank, message = "city must not be blank")
    )]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub city: String,
    #[validate(length(min = 5, max = 20, message = "nit must be between 5 and 20 characters"))]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub nit: String,
    #[validate(length(min = 7, max = 20, message = "phone must be between 7 and 20 characters"))]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub phone: String,
}

/// Partial patch. The tax identifier is not client-mutable after creation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRestaurantDto {
    #[validate(
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters"),
        custom(function = validate_not_blank, message = "name must not be blank")
    )]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub name: Option<String>,
    #[validate(
        length(min = 1, max = 200, message = "address must be between 1 and 200 characters"),
        custom(function = validate_not_blank, message = "address must not be blank")
    )]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub address: Option<String>,
    #[validate(
        length(min = 1, max = 100, message = "city must be between 1 and 100 characters"),
        custom(function = validate_not_blank, message = "city must not be blank")
    )]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub city: Option<String>,
    #[validate(length(min = 7, max = 20, message = "phone must be between 7 and 20 characters"))]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub phone: Option<String>,
}
