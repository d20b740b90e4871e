use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{LoginRequest, LoginResponse, TokenPayload};
use crate::modules::reservations::model::{
    CreateReservationDto, Reservation, ReservationWithRefs, UpdateReservationDto,
};
use crate::modules::restaurants::model::{
    CreateRestaurantDto, Restaurant, UpdateRestaurantDto,
};
use crate::modules::users::model::{CreateUserDto, UpdateUserDto, User};
use crate::utils::errors::FieldError;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::restaurants::controller::create_restaurant,
        crate::modules::restaurants::controller::get_restaurants,
        crate::modules::restaurants::controller::get_restaurant,
        crate::modules::restaurants::controller::update_restaurant,
        crate::modules::restaurants::controller::delete_restaurant,
        crate::modules::reservations::controller::create_reservation,
        crate::modules::reservations::controller::get_reservations,
        crate::modules::reservations::controller::get_reservation,
        crate::modules::reservations::controller::get_reservations_by_user,
        crate::modules::reservations::controller::get_reservations_by_restaurant,
        crate::modules::reservations::controller::update_reservation,
        crate::modules::reservations::controller::delete_reservation,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            TokenPayload,
            User,
            CreateUserDto,
            UpdateUserDto,
            Restaurant,
            CreateRestaurantDto,
            UpdateRestaurantDto,
            Reservation,
            ReservationWithRefs,
            CreateReservationDto,
            UpdateReservationDto,
            FieldError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuing"),
        (name = "Users", description = "User management (admin only)"),
        (name = "Restaurants", description = "Restaurant management"),
        (name = "Reservations", description = "Reservation management")
    ),
    info(
        title = "Restobook API",
        version = "0.1.0",
        description = "Restaurant reservation REST API with JWT authentication and role-based authorization.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
