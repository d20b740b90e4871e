use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateRestaurantDto, Restaurant, UpdateRestaurantDto};
use super::service::{RestaurantService, RestaurantServiceError};

fn map_error(err: RestaurantServiceError) -> AppError {
    match err {
        RestaurantServiceError::NitTaken => {
            AppError::bad_request("A restaurant with that nit already exists")
        }
        RestaurantServiceError::Database(e) => AppError::internal(e.to_string()),
    }
}

/// Create a restaurant. Admin only.
#[utoipa::path(
    post,
    path = "/api/restaurants",
    request_body = CreateRestaurantDto,
    responses(
        (status = 201, description = "Restaurant created", body = Restaurant),
        (status = 400, description = "Validation failed or nit already registered"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "Restaurants",
    security(("bearer_auth" = []))
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateRestaurantDto>,
) -> Result<(StatusCode, Json<Restaurant>), AppError> {
    let restaurant = RestaurantService::create(&state.db, dto)
        .await
        .map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// List active restaurants. Any authenticated principal.
#[utoipa::path(
    get,
    path = "/api/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = Vec<Restaurant>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Restaurants",
    security(("bearer_auth" = []))
)]
pub async fn get_restaurants(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Restaurant>>, AppError> {
    let restaurants = RestaurantService::get_all(&state.db)
        .await
        .map_err(map_error)?;

    Ok(Json(restaurants))
}

/// Fetch a restaurant by id. Any authenticated principal.
#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(("id" = Uuid, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant details", body = Restaurant),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "Restaurants",
    security(("bearer_auth" = []))
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Restaurant>, AppError> {
    let restaurant = RestaurantService::get_by_id(&state.db, id)
        .await
        .map_err(map_error)?
        .ok_or_else(|| AppError::not_found(format!("Restaurant with id {} not found", id)))?;

    Ok(Json(restaurant))
}

/// Patch a restaurant. Admin only.
#[utoipa::path(
    put,
    path = "/api/restaurants/{id}",
    params(("id" = Uuid, Path, description = "Restaurant id")),
    request_body = UpdateRestaurantDto,
    responses(
        (status = 200, description = "Updated restaurant", body = Restaurant),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin only"),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "Restaurants",
    security(("bearer_auth" = []))
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateRestaurantDto>,
) -> Result<Json<Restaurant>, AppError> {
    let restaurant = RestaurantService::update(&state.db, id, dto)
        .await
        .map_err(map_error)?
        .ok_or_else(|| AppError::not_found(format!("Restaurant with id {} not found", id)))?;

    Ok(Json(restaurant))
}

/// Soft-delete a restaurant. Admin only.
#[utoipa::path(
    delete,
    path = "/api/restaurants/{id}",
    params(("id" = Uuid, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin only"),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "Restaurants",
    security(("bearer_auth" = []))
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = RestaurantService::delete(&state.db, id)
        .await
        .map_err(map_error)?;

    if !deleted {
        return Err(AppError::not_found(format!(
            "Restaurant with id {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
