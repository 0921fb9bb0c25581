//! HTTP API module for the Severance Settlement Engine.
//!
//! This module provides the REST endpoint for calculating a severance
//! settlement from a termination request.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SettlementRequest;
pub use response::{ApiError, SettlementResponse};
pub use state::AppState;
