use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use restobook::config::jwt::JwtConfig;
use restobook::router::init_router;
use restobook::state::AppState;
use restobook::utils::password::hash_password;
use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction};
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

#[allow(dead_code)]
pub struct TestRestaurant {
    pub id: Uuid,
    pub name: String,
    pub nit: String,
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
    };
    init_router(state)
}

/// Logs in through the API and returns the signed token from the nested
/// `{token: {id, roles, token}}` payload.
pub async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["token"]["token"].as_str().unwrap().to_string()
}

/// Create a test user holding the given roles ("admin" and/or "user").
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
    roles: &[&str],
) -> TestUser {
    let hashed = hash_password(password).unwrap();
    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, password, roles)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind("Test User")
    .bind(email)
    .bind(&hashed)
    .bind(&roles)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_restaurant(
    tx: &mut Transaction<'_, Postgres>,
    nit: &str,
) -> TestRestaurant {
    let name = format!("Restaurant {}", Uuid::new_v4());

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO restaurants (name, address, city, nit, phone)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(&name)
    .bind("Calle 10 #5-23")
    .bind("Bogota")
    .bind(nit)
    .bind("6015551234")
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestRestaurant {
        id,
        name,
        nit: nit.to_string(),
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_nit() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}
