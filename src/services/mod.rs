//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod auto_play_service;

pub use auto_play_service::AutoPlayService;
