//! Feature modules. Each follows the same structure: `model.rs` (entity
//! and DTOs), `service.rs` (business logic against the pool),
//! `controller.rs` (HTTP handlers), `router.rs` (route wiring).

pub mod auth;
pub mod reservations;
pub mod restaurants;
pub mod users;
