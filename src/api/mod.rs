//! HTTP API module for the Time Cost Engine.
//!
//! This module provides the REST API through which a client submits the
//! calculator form and receives either the time cost or a validation error.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, FieldValue};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
