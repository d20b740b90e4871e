//! Role-based authorization.
//!
//! Two composable gates sit in front of protected routes: `AuthUser`
//! answers "is there a valid token" and the checks here answer "does the
//! principal hold the required role". Routers with a uniform guard use the
//! layer-based middleware; routers mixing guards per method use the
//! extractor forms.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Checks that the principal holds `role`.
///
/// "No roles at all" and "has roles but not this one" produce distinct
/// messages; downstream clients depend on the distinction.
pub fn check_role(auth_user: &AuthUser, role: &str) -> Result<(), AppError> {
    if auth_user.0.roles.is_empty() {
        return Err(AppError::forbidden("Access denied. No roles found."));
    }

    if !auth_user.has_role(role) {
        return Err(AppError::forbidden("Access denied."));
    }

    Ok(())
}

async fn require_role(
    state: AppState,
    req: Request,
    next: Next,
    role: &str,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_role(&auth_user, role)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer middleware for routers where every route needs the admin role.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, ROLE_ADMIN).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Layer middleware for routers where every route needs the user role.
pub async fn require_user(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, ROLE_USER).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor guard for admin-only handlers inside mixed-guard routers.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_role(&auth_user, ROLE_ADMIN)?;
        Ok(RequireAdmin(auth_user))
    }
}

/// Extractor guard for handlers that need the user role.
#[derive(Debug, Clone)]
pub struct RequireUser(pub AuthUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_role(&auth_user, ROLE_USER)?;
        Ok(RequireUser(auth_user))
    }
}
