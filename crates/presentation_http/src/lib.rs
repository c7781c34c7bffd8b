//! ResQroute HTTP presentation layer
//!
//! Serves the rendered route map artifact and a health endpoint.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{ServerError, app, serve, serve_on};
pub use state::AppState;
