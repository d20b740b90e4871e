//! Shared utilities: the application error type, JWT helpers, and
//! password hashing.

pub mod errors;
pub mod jwt;
pub mod password;
