//! Configuration modules, each loading its settings from environment
//! variables with documented defaults.
//!
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: token signing secret and expiry
//! - [`server`]: listen port

pub mod database;
pub mod jwt;
pub mod server;
