use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireAdmin, RequireUser};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CreateReservationDto, Reservation, ReservationWithRefs, UpdateReservationDto,
};
use super::service::{ReservationService, ReservationServiceError};

fn map_error(err: ReservationServiceError) -> AppError {
    match err {
        ReservationServiceError::UserNotFound(id) => {
            AppError::bad_request(format!("User with id {} not found", id))
        }
        ReservationServiceError::RestaurantNotFound(id) => {
            AppError::bad_request(format!("Restaurant with id {} not found", id))
        }
        ReservationServiceError::Database(e) => AppError::internal(e.to_string()),
    }
}

/// Create a reservation. Requires the user role.
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Validation failed or referenced user/restaurant not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - user role required")
    ),
    tag = "Reservations",
    security(("bearer_auth" = []))
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    ValidatedJson(dto): ValidatedJson<CreateReservationDto>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    let reservation = ReservationService::create(&state.db, dto)
        .await
        .map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// List active reservations with resolved references. Admin only.
#[utoipa::path(
    get,
    path = "/api/reservations",
    responses(
        (status = 200, description = "List of reservations", body = Vec<ReservationWithRefs>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "Reservations",
    security(("bearer_auth" = []))
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<ReservationWithRefs>>, AppError> {
    let reservations = ReservationService::get_all(&state.db)
        .await
        .map_err(map_error)?;

    Ok(Json(reservations))
}

/// Fetch a reservation by id. Any authenticated principal.
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    params(("id" = Uuid, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Reservation details", body = ReservationWithRefs),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Reservation not found")
    ),
    tag = "Reservations",
    security(("bearer_auth" = []))
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationWithRefs>, AppError> {
    let reservation = ReservationService::get_by_id(&state.db, id)
        .await
        .map_err(map_error)?
        .ok_or_else(|| AppError::not_found(format!("Reservation with id {} not found", id)))?;

    Ok(Json(reservation))
}

/// List a user's reservations. Requires the user role.
#[utoipa::path(
    get,
    path = "/api/reservations/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Reservations for the user", body = Vec<ReservationWithRefs>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - user role required")
    ),
    tag = "Reservations",
    security(("bearer_auth" = []))
)]
pub async fn get_reservations_by_user(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ReservationWithRefs>>, AppError> {
    let reservations = ReservationService::get_by_user_id(&state.db, user_id)
        .await
        .map_err(map_error)?;

    Ok(Json(reservations))
}

/// List a restaurant's reservations. Admin only.
#[utoipa::path(
    get,
    path = "/api/reservations/restaurant/{restaurant_id}",
    params(("restaurant_id" = Uuid, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Reservations for the restaurant", body = Vec<ReservationWithRefs>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "Reservations",
    security(("bearer_auth" = []))
)]
pub async fn get_reservations_by_restaurant(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(restaurant_id): Path<Uuid>,
) -> Result<Json<Vec<ReservationWithRefs>>, AppError> {
    let reservations = ReservationService::get_by_restaurant_id(&state.db, restaurant_id)
        .await
        .map_err(map_error)?;

    Ok(Json(reservations))
}

/// Patch a reservation. Requires the user role.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    params(("id" = Uuid, Path, description = "Reservation id")),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Updated reservation", body = Reservation),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - user role required"),
        (status = 404, description = "Reservation not found")
    ),
    tag = "Reservations",
    security(("bearer_auth" = []))
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateReservationDto>,
) -> Result<Json<Reservation>, AppError> {
    let reservation = ReservationService::update(&state.db, id, dto)
        .await
        .map_err(map_error)?
        .ok_or_else(|| AppError::not_found(format!("Reservation with id {} not found", id)))?;

    Ok(Json(reservation))
}

/// Soft-delete a reservation. Requires the user role.
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(("id" = Uuid, Path, description = "Reservation id")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - user role required"),
        (status = 404, description = "Reservation not found")
    ),
    tag = "Reservations",
    security(("bearer_auth" = []))
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = ReservationService::delete(&state.db, id)
        .await
        .map_err(map_error)?;

    if !deleted {
        return Err(AppError::not_found(format!(
            "Reservation with id {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
