use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_restaurant, delete_restaurant, get_restaurant, get_restaurants, update_restaurant,
};

/// Reads need authentication only; writes need the admin role. The guards
/// live on the handlers (extractors) rather than the router because they
/// differ per method.
pub fn init_restaurants_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_restaurant).get(get_restaurants))
        .route(
            "/{id}",
            get(get_restaurant)
                .put(update_restaurant)
                .delete(delete_restaurant),
        )
}
