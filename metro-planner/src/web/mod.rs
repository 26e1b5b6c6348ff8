//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for finding stations and planning routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
