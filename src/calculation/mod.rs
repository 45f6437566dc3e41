//! Calculation logic for the Annual Leave Engine.
//!
//! This module contains all the calculation functions: duration text parsing,
//! attendance summarization by category, entitlement suggestion, monetary
//! rounding, unused-leave payout, and the pipeline that combines them.

mod duration;
mod entitlement;
mod payout;
mod pipeline;
mod rounding;
mod summary;

pub use duration::{ParsedDuration, parse_duration};
pub use entitlement::{STATUTORY_BASE_DAYS, STATUTORY_MAX_SENIORITY_DAYS, suggest_annual_days};
pub use payout::calc_unused_leave_payout;
pub use pipeline::{full_pipeline, full_pipeline_with};
pub use rounding::round_money;
pub use summary::{CategorySummary, UNSPECIFIED_CATEGORY, summarize_nice_records};
