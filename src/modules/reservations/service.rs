use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::model::{
    CreateReservationDto, Reservation, ReservationWithRefs, UpdateReservationDto,
};

/// Columns for the denormalized read shape: every reservation read joins
/// in the referenced restaurant's name/address and the user's name.
const JOINED_SELECT: &str = "SELECT r.id, r.date, r.hour, r.party_size, r.status,
            r.restaurant_id, rs.name AS restaurant_name, rs.address AS restaurant_address,
            r.user_id, u.name AS user_name,
            r.created_at, r.updated_at, r.deleted_at
     FROM reservations r
     JOIN restaurants rs ON rs.id = r.restaurant_id
     JOIN users u ON u.id = r.user_id";

#[derive(Debug, thiserror::Error)]
pub enum ReservationServiceError {
    #[error("User with id {0} not found")]
    UserNotFound(Uuid),
    #[error("Restaurant with id {0} not found")]
    RestaurantNotFound(Uuid),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub struct ReservationService;

impl ReservationService {
    /// Creates a reservation after verifying both foreign references.
    /// The user is checked first and short-circuits before the restaurant
    /// reference is looked at.
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        dto: CreateReservationDto,
    ) -> Result<Reservation, ReservationServiceError> {
        let user_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(dto.user_id)
        .fetch_one(db)
        .await?;

        if !user_exists {
            return Err(ReservationServiceError::UserNotFound(dto.user_id));
        }

        let restaurant_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM restaurants WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(dto.restaurant_id)
        .fetch_one(db)
        .await?;

        if !restaurant_exists {
            return Err(ReservationServiceError::RestaurantNotFound(
                dto.restaurant_id,
            ));
        }

        let status = dto.status.unwrap_or_else(|| "pending".to_string());

        let reservation = sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (date, hour, restaurant_id, user_id, party_size, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(dto.date)
        .bind(&dto.hour)
        .bind(dto.restaurant_id)
        .bind(dto.user_id)
        .bind(dto.party_size)
        .bind(&status)
        .fetch_one(db)
        .await?;

        Ok(reservation)
    }

    #[instrument(skip(db))]
    pub async fn get_all(
        db: &PgPool,
    ) -> Result<Vec<ReservationWithRefs>, ReservationServiceError> {
        let reservations = sqlx::query_as::<_, ReservationWithRefs>(&format!(
            "{JOINED_SELECT} WHERE r.deleted_at IS NULL"
        ))
        .fetch_all(db)
        .await?;

        Ok(reservations)
    }

    /// By-id lookup. Unlike [`Self::get_all`], this does not filter
    /// soft-deleted rows; the behavior is inherited from the system being
    /// reimplemented and preserved as-is.
    #[instrument(skip(db))]
    pub async fn get_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<Option<ReservationWithRefs>, ReservationServiceError> {
        let reservation = sqlx::query_as::<_, ReservationWithRefs>(&format!(
            "{JOINED_SELECT} WHERE r.id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(reservation)
    }

    /// Reservations scoped to a user. Not filtered by soft delete.
    #[instrument(skip(db))]
    pub async fn get_by_user_id(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<ReservationWithRefs>, ReservationServiceError> {
        let reservations = sqlx::query_as::<_, ReservationWithRefs>(&format!(
            "{JOINED_SELECT} WHERE r.user_id = $1"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(reservations)
    }

    /// Reservations scoped to a restaurant. Not filtered by soft delete.
    #[instrument(skip(db))]
    pub async fn get_by_restaurant_id(
        db: &PgPool,
        restaurant_id: Uuid,
    ) -> Result<Vec<ReservationWithRefs>, ReservationServiceError> {
        let reservations = sqlx::query_as::<_, ReservationWithRefs>(&format!(
            "{JOINED_SELECT} WHERE r.restaurant_id = $1"
        ))
        .bind(restaurant_id)
        .fetch_all(db)
        .await?;

        Ok(reservations)
    }

    /// Partial patch over date/hour/party_size/status. Foreign references
    /// are not re-checked on update.
    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateReservationDto,
    ) -> Result<Option<Reservation>, ReservationServiceError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            "UPDATE reservations
             SET date = COALESCE($2, date),
                 hour = COALESCE($3, hour),
                 party_size = COALESCE($4, party_size),
                 status = COALESCE($5, status),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(dto.date)
        .bind(&dto.hour)
        .bind(dto.party_size)
        .bind(&dto.status)
        .fetch_optional(db)
        .await?;

        Ok(reservation)
    }

    /// Soft delete. Returns whether a row matched the id.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ReservationServiceError> {
        let result = sqlx::query(
            "UPDATE reservations SET deleted_at = now(), updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .execute(db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
