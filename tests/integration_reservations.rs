mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_restaurant, create_test_user, generate_unique_email, generate_unique_nit,
    get_auth_token, setup_test_app,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn post_reservation(
    app: axum::Router,
    token: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/reservations")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_reservation_defaults_status_to_pending(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();

    let email = generate_unique_email();
    let password = "testpass123";
    let user = create_test_user(&mut tx, &email, password, &["user"]).await;
    let restaurant = create_test_restaurant(&mut tx, &generate_unique_nit()).await;

    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &email, password).await;

    let app = setup_test_app(pool);
    let (status, body) = post_reservation(
        app,
        &token,
        json!({
            "date": "2026-09-15",
            "hour": " 19:30 ",
            "restaurant_id": restaurant.id,
            "user_id": user.id,
            "party_size": 4
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["hour"], "19:30");
    assert_eq!(body["restaurant_id"], restaurant.id.to_string());
    assert_eq!(body["user_id"], user.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_reservation_checks_user_before_restaurant(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();

    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&mut tx, &email, password, &["user"]).await;

    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &email, password).await;

    // Both references are unknown; the user error wins
    let fake_user = Uuid::new_v4();
    let fake_restaurant = Uuid::new_v4();

    let app = setup_test_app(pool);
    let (status, body) = post_reservation(
        app,
        &token,
        json!({
            "date": "2026-09-15",
            "hour": "19:30",
            "restaurant_id": fake_restaurant,
            "user_id": fake_user,
            "party_size": 4
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        format!("User with id {} not found", fake_user)
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_reservation_rejects_unknown_restaurant(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();

    let email = generate_unique_email();
    let password = "testpass123";
    let user = create_test_user(&mut tx, &email, password, &["user"]).await;

    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &email, password).await;

    let fake_restaurant = Uuid::new_v4();

    let app = setup_test_app(pool);
    let (status, body) = post_reservation(
        app,
        &token,
        json!({
            "date": "2026-09-15",
            "hour": "19:30",
            "restaurant_id": fake_restaurant,
            "user_id": user.id,
            "party_size": 4
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        format!("Restaurant with id {} not found", fake_restaurant)
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_reservations_requires_admin(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();

    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&mut tx, &email, password, &["user"]).await;

    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &email, password).await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri("/api/reservations")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_deleted_reservation_hidden_from_list_but_readable_by_id(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();

    let user_email = generate_unique_email();
    let admin_email = generate_unique_email();
    let password = "testpass123";
    let user = create_test_user(&mut tx, &user_email, password, &["user"]).await;
    create_test_user(&mut tx, &admin_email, password, &["admin"]).await;
    let restaurant = create_test_restaurant(&mut tx, &generate_unique_nit()).await;

    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let user_token = get_auth_token(app, &user_email, password).await;
    let app = setup_test_app(pool.clone());
    let admin_token = get_auth_token(app, &admin_email, password).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = post_reservation(
        app,
        &user_token,
        json!({
            "date": "2026-09-15",
            "hour": "19:30",
            "restaurant_id": restaurant.id,
            "user_id": user.id,
            "party_size": 4
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let reservation_id = body["id"].as_str().unwrap().to_string();

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(&format!("/api/reservations/{}", reservation_id))
        .header("authorization", format!("Bearer {}", user_token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let deleted = sqlx::query_scalar::<_, bool>(
        "SELECT deleted_at IS NOT NULL FROM reservations WHERE id = $1",
    )
    .bind(Uuid::parse_str(&reservation_id).unwrap())
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(deleted);

    // Gone from the admin listing
    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("GET")
        .uri("/api/reservations")
        .header("authorization", format!("Bearer {}", admin_token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(
        !body
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r["id"] == reservation_id)
    );

    // Still served by the by-id lookup, which does not filter soft deletes
    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(&format!("/api/reservations/{}", reservation_id))
        .header("authorization", format!("Bearer {}", user_token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["id"], reservation_id);
    assert_eq!(body["restaurant_name"], restaurant.name);
    assert!(!body["deleted_at"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_unknown_reservation_returns_not_found(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();

    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&mut tx, &email, password, &["user"]).await;

    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &email, password).await;

    let app = setup_test_app(pool);
    let fake_id = Uuid::new_v4();

    let request = Request::builder()
        .method("DELETE")
        .uri(&format!("/api/reservations/{}", fake_id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body["message"],
        format!("Reservation with id {} not found", fake_id)
    );
}
