//! Startup account seeding.
//!
//! Seeds a default admin and a default regular user the first time the
//! process starts against an empty database. Each account is only created
//! when no user holds its email, so repeated startups are idempotent.

use sqlx::PgPool;
use std::env;
use tracing::info;

use crate::utils::password::hash_password;

async fn seed_account(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    roles: &[&str],
) -> anyhow::Result<()> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
    )
    .bind(email)
    .fetch_one(db)
    .await?;

    if exists {
        return Ok(());
    }

    let hashed = hash_password(password)?;
    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();

    sqlx::query("INSERT INTO users (name, email, password, roles) VALUES ($1, $2, $3, $4)")
        .bind(name)
        .bind(email)
        .bind(&hashed)
        .bind(&roles)
        .execute(db)
        .await?;

    info!(email = %email, "Seeded default account");
    Ok(())
}

pub async fn seed_default_accounts(db: &PgPool) -> anyhow::Result<()> {
    let admin_email =
        env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@restobook.io".to_string());
    let admin_password = env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    seed_account(db, "Administrator", &admin_email, &admin_password, &["admin"]).await?;

    let user_email =
        env::var("SEED_USER_EMAIL").unwrap_or_else(|_| "user@restobook.io".to_string());
    let user_password = env::var("SEED_USER_PASSWORD").unwrap_or_else(|_| "user123".to_string());

    seed_account(db, "Default User", &user_email, &user_password, &["user"]).await?;

    Ok(())
}
