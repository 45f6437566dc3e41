//! Core data models for the Annual Leave Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod fields;
mod leave_result;
mod rule;
mod service;
mod wage;

pub use attendance::{DEFAULT_HOURS_PER_DAY, RawAttendanceRecord};
pub(crate) use fields::lenient_decimal;
pub use fields::{ServiceFields, WageFields};
pub use leave_result::{PayoutResult, PipelineResult, SuggestionResult, WageSnapshot};
pub use rule::{
    DEFAULT_DAYS_AFTER_FIRST_YEAR, DEFAULT_FIRST_YEAR_MAX, DEFAULT_MONEY_STEP, GrantType,
    RoundingMode, RuleProfile,
};
pub use service::ServiceProfile;
pub use wage::{WageProfile, WageType};
