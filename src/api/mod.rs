//! HTTP API module for the Annual Leave Engine.
//!
//! This module provides the REST API endpoints for summarizing attendance
//! exports, suggesting annual leave entitlements and calculating
//! unused-leave payouts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayoutRequest, PipelineRequest, SuggestRequest, SummarizeRequest};
pub use response::{ApiError, PipelineResponse, RulesResponse, SummarizeResponse};
pub use state::AppState;
