//! Annual Leave Engine
//!
//! This crate summarizes attendance exports by category, suggests annual
//! leave entitlements under statutory and collective-agreement rules, and
//! calculates the payout owed for unused leave.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
