use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::model::{CreateRestaurantDto, Restaurant, UpdateRestaurantDto};

#[derive(Debug, thiserror::Error)]
pub enum RestaurantServiceError {
    #[error("A restaurant with that nit already exists")]
    NitTaken,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub struct RestaurantService;

impl RestaurantService {
    /// Creates a restaurant unless an active one already holds the tax id.
    /// Check-then-create, same (accepted) race as user creation.
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        dto: CreateRestaurantDto,
    ) -> Result<Restaurant, RestaurantServiceError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM restaurants WHERE nit = $1 AND deleted_at IS NULL)",
        )
        .bind(&dto.nit)
        .fetch_one(db)
        .await?;

        if taken {
            return Err(RestaurantServiceError::NitTaken);
        }

        let restaurant = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, address, city, nit, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&dto.name)
        .bind(&dto.address)
        .bind(&dto.city)
        .bind(&dto.nit)
        .bind(&dto.phone)
        .fetch_one(db)
        .await?;

        Ok(restaurant)
    }

    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<Restaurant>, RestaurantServiceError> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            "SELECT * FROM restaurants WHERE deleted_at IS NULL",
        )
        .fetch_all(db)
        .await?;

        Ok(restaurants)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<Option<Restaurant>, RestaurantServiceError> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT * FROM restaurants WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(restaurant)
    }

    /// Partial patch over name/address/city/phone. The nit is never
    /// re-validated or changed here.
    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateRestaurantDto,
    ) -> Result<Option<Restaurant>, RestaurantServiceError> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            "UPDATE restaurants
             SET name = COALESCE($2, name),
                 address = COALESCE($3, address),
                 city = COALESCE($4, city),
                 phone = COALESCE($5, phone),
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.address)
        .bind(&dto.city)
        .bind(&dto.phone)
        .fetch_optional(db)
        .await?;

        Ok(restaurant)
    }

    /// Soft delete. Returns whether a row matched the id.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, RestaurantServiceError> {
        let result = sqlx::query(
            "UPDATE restaurants SET deleted_at = now(), updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .execute(db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
