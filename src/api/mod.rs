//! HTTP API module for the vacation engine.
//!
//! This module exposes row validation and the analysis pipeline as REST
//! endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalyzeRequest, ValidateRequest};
pub use response::{AnalyzeResponse, ApiError, CurrentLeave, OccupancyView};
pub use state::AppState;
