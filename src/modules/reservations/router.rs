use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_reservation, delete_reservation, get_reservation, get_reservations,
    get_reservations_by_restaurant, get_reservations_by_user, update_reservation,
};

/// Guards differ per route (user role for mutations and the by-user
/// listing, admin for the global and by-restaurant listings), so they live
/// on the handlers as extractors.
pub fn init_reservations_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reservation).get(get_reservations))
        .route(
            "/{id}",
            get(get_reservation)
                .put(update_reservation)
                .delete(delete_reservation),
        )
        .route("/user/{user_id}", get(get_reservations_by_user))
        .route(
            "/restaurant/{restaurant_id}",
            get(get_reservations_by_restaurant),
        )
}
