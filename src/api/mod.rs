//! HTTP surface for the tracking service
//!
//! Thin collaborator around the pure core: envelope, routes, handlers.

pub mod envelope;
pub mod handlers;
pub mod routes;

pub use handlers::ApiState;
pub use routes::router;
