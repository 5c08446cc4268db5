//! Retail investment calculators
//!
//! This crate computes projections for six personal-finance instruments
//! (SIP, step-up SIP, SWP, goal-based SIP, fixed deposit and loan EMI),
//! with per-period schedules, CSV export and a JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
