use axum::extract::FromRequestParts;
use axum::http::{Request, StatusCode, header};
use restobook::config::jwt::JwtConfig;
use restobook::middleware::auth::AuthUser;
use restobook::state::AppState;
use restobook::utils::jwt::create_access_token;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

fn test_state() -> AppState {
    // Lazy pool: never actually connects, token checks don't touch the db
    let db = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/restobook_test")
        .unwrap();

    AppState {
        db,
        jwt_config: JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            expiry: 3600,
        },
    }
}

async fn extract(state: &AppState, auth_header: Option<&str>) -> Result<AuthUser, String> {
    let mut builder = Request::builder().uri("/api/restaurants");
    if let Some(value) = auth_header {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();

    AuthUser::from_request_parts(&mut parts, state)
        .await
        .map_err(|e| {
            assert_eq!(e.status, StatusCode::UNAUTHORIZED);
            e.message
        })
}

#[tokio::test]
async fn test_missing_header_is_missing_token() {
    let state = test_state();
    let err = extract(&state, None).await.unwrap_err();
    assert_eq!(err, "No token provided");
}

#[tokio::test]
async fn test_blank_token_is_missing_token() {
    let state = test_state();
    let err = extract(&state, Some("Bearer ")).await.unwrap_err();
    assert_eq!(err, "No token provided");

    let err = extract(&state, Some("Bearer    ")).await.unwrap_err();
    assert_eq!(err, "No token provided");
}

#[tokio::test]
async fn test_missing_bearer_prefix_is_missing_token() {
    let state = test_state();
    let err = extract(&state, Some("Basic abc123")).await.unwrap_err();
    assert_eq!(err, "No token provided");
}

#[tokio::test]
async fn test_garbage_token_is_invalid_token() {
    let state = test_state();
    let err = extract(&state, Some("Bearer not.a.jwt")).await.unwrap_err();
    assert_eq!(err, "Invalid or expired token");
}

#[tokio::test]
async fn test_wrong_secret_token_is_invalid_token() {
    let state = test_state();
    let other = JwtConfig {
        secret: "some-other-secret".to_string(),
        expiry: 3600,
    };
    let token = create_access_token(Uuid::new_v4(), &["user".to_string()], &other).unwrap();

    let err = extract(&state, Some(&format!("Bearer {token}")))
        .await
        .unwrap_err();
    assert_eq!(err, "Invalid or expired token");
}

#[tokio::test]
async fn test_valid_token_yields_claims() {
    let state = test_state();
    let user_id = Uuid::new_v4();
    let roles = vec!["admin".to_string()];
    let token = create_access_token(user_id, &roles, &state.jwt_config).unwrap();

    let auth_user = extract(&state, Some(&format!("Bearer {token}")))
        .await
        .unwrap();

    assert_eq!(auth_user.0.sub, user_id.to_string());
    assert_eq!(auth_user.0.roles, roles);
}
