//! ClimateGuardian HTTP API.
//!
//! JSON endpoints for asking questions, reading the query history, checking
//! health and listing the public dataset catalog, plus a small landing page.

pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
