//! Reservation entity, the denormalized read shape, and request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::validator::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Hour of day as an `HH:MM` string.
    pub hour: String,
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub party_size: i32,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Reservation with the referenced restaurant's name/address and the
/// referenced user's name resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReservationWithRefs {
    pub id: Uuid,
    pub date: NaiveDate,
    pub hour: String,
    pub party_size: i32,
    pub status: String,
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
    pub restaurant_address: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Hour must be a valid 24-hour `HH:MM` string.
pub fn validate_hour(hour: &str) -> Result<(), ValidationError> {
    if chrono::NaiveTime::parse_from_str(hour, "%H:%M").is_err() {
        let mut err = ValidationError::new("hour_format");
        err.message = Some("hour must be a valid HH:MM time".into());
        return Err(err);
    }

    Ok(())
}

/// Hour and status are trimmed on deserialization before validation runs.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReservationDto {
    /// ISO-8601 calendar date.
    pub date: NaiveDate,
    #[validate(custom(function = validate_hour))]
    #[serde(deserialize_with = "crate::validator::trim_string")]
    pub hour: String,
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    #[validate(range(min = 2, message = "party_size must be greater than 1"))]
    pub party_size: i32,
    /// Free-text status, defaults to "pending".
    #[validate(
        length(min = 1, max = 50, message = "status must be between 1 and 50 characters"),
        custom(function = validate_not_blank, message = "status must not be blank")
    )]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub status: Option<String>,
}

/// Partial patch. The user and restaurant references are fixed at
/// creation time and are not client-mutable.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateReservationDto {
    pub date: Option<NaiveDate>,
    #[validate(custom(function = validate_hour))]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub hour: Option<String>,
    #[validate(range(min = 2, message = "party_size must be greater than 1"))]
    pub party_size: Option<i32>,
    #[validate(
        length(min = 1, max = 50, message = "status must be between 1 and 50 characters"),
        custom(function = validate_not_blank, message = "status must not be blank")
    )]
    #[serde(default, deserialize_with = "crate::validator::trim_opt_string")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_hours() {
        assert!(validate_hour("00:00").is_ok());
        assert!(validate_hour("19:30").is_ok());
        assert!(validate_hour("23:59").is_ok());
    }

    #[test]
    fn rejects_invalid_hours() {
        assert!(validate_hour("24:00").is_err());
        assert!(validate_hour("19:60").is_err());
        assert!(validate_hour("7pm").is_err());
        assert!(validate_hour("").is_err());
    }
}
