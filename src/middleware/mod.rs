//! Authentication and authorization middleware.
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] validates the JWT and extracts the claims
//! 3. [`role`] gates check the claims against the required role
//! 4. The handler runs only if all checks pass

pub mod auth;
pub mod role;
