//! Configuration loading and management for the calculators.
//!
//! This module provides the read-only input bounds every calculator validates
//! against, loaded from a YAML file or taken from the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use invest_calc::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/calculators.yaml").unwrap();
//! println!("SIP years: {:?}", config.config().bounds.sip.years);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Bounds, CalculatorBounds, CalculatorConfig, CurrencyConfig, EmiBounds, FdBounds,
    GoalSipBounds, SipBounds, StepUpSipBounds, SwpBounds,
};
