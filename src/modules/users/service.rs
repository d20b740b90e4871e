use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::password::hash_password;

use super::model::{CreateUserDto, UpdateUserDto, User};

const USER_COLUMNS: &str = "id, name, email, roles, created_at, updated_at, deleted_at";

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Email already registered")]
    EmailTaken,
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub struct UserService;

impl UserService {
    /// Creates a user after a check-then-create pass over active emails.
    ///
    /// The check and the insert are not atomic; concurrent creates with the
    /// same email can race. Known and accepted at this system's scale.
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateUserDto) -> Result<User, UserServiceError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND deleted_at IS NULL)",
        )
        .bind(&dto.email)
        .fetch_one(db)
        .await?;

        if taken {
            return Err(UserServiceError::EmailTaken);
        }

        let hashed_password = hash_password(&dto.password)?;
        let roles = dto.roles.unwrap_or_else(|| vec!["user".to_string()]);

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password, roles)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&roles)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<User>, UserServiceError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE deleted_at IS NULL"
        ))
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, UserServiceError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// Partial patch over name/email. Uniqueness is not re-checked here.
    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateUserDto,
    ) -> Result<Option<User>, UserServiceError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.email)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// Soft delete. Returns whether a row matched the id.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, UserServiceError> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = now(), updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .execute(db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
