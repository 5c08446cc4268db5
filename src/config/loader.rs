//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! bounds from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, CurrencyConfig};

/// Loads and provides access to calculator configuration.
///
/// The file layout mirrors [`CalculatorConfig`]:
///
/// ```text
/// currency:
///   symbol: "₹"
/// bounds:
///   sip:
///     monthly_investment: { min: "500", max: "50000" }
///     annual_rate: { min: "0.1", max: "15.0" }
///     years: { min: 1, max: 30 }
///   step_up_sip: ...
/// ```
///
/// # Example
///
/// ```no_run
/// use invest_calc::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/calculators.yaml").unwrap();
/// println!("Currency: {}", loader.currency().symbol);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A configured range has `min > max` (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use invest_calc::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/calculators.yaml")?;
    /// # Ok::<(), invest_calc::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: CalculatorConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(&config).map_err(|message| EngineError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "Loaded calculator configuration");
        Ok(Self { config })
    }

    /// Returns a loader holding the built-in default bounds.
    pub fn builtin() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Rejects inverted ranges.
    fn validate(config: &CalculatorConfig) -> Result<(), String> {
        let b = &config.bounds;
        let decimal_ranges = [
            ("sip.monthly_investment", &b.sip.monthly_investment),
            ("sip.annual_rate", &b.sip.annual_rate),
            ("step_up_sip.monthly_investment", &b.step_up_sip.monthly_investment),
            ("step_up_sip.annual_increment", &b.step_up_sip.annual_increment),
            ("step_up_sip.annual_rate", &b.step_up_sip.annual_rate),
            ("swp.principal", &b.swp.principal),
            ("swp.annual_rate", &b.swp.annual_rate),
            ("swp.monthly_withdrawal", &b.swp.monthly_withdrawal),
            ("goal_sip.goal_amount", &b.goal_sip.goal_amount),
            ("goal_sip.annual_rate", &b.goal_sip.annual_rate),
            ("fd.principal", &b.fd.principal),
            ("fd.annual_rate", &b.fd.annual_rate),
            ("emi.loan_amount", &b.emi.loan_amount),
            ("emi.annual_rate", &b.emi.annual_rate),
        ];
        for (name, range) in decimal_ranges {
            if range.min > range.max {
                return Err(format!("{}: min {} exceeds max {}", name, range.min, range.max));
            }
        }

        let year_ranges = [
            ("sip.years", &b.sip.years),
            ("step_up_sip.years", &b.step_up_sip.years),
            ("swp.years", &b.swp.years),
            ("goal_sip.years", &b.goal_sip.years),
            ("fd.years", &b.fd.years),
            ("emi.tenure_years", &b.emi.tenure_years),
        ];
        for (name, range) in year_ranges {
            if range.min > range.max {
                return Err(format!("{}: min {} exceeds max {}", name, range.min, range.max));
            }
        }

        Ok(())
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the currency display settings.
    pub fn currency(&self) -> &CurrencyConfig {
        &self.config.currency
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CalculatorConfig {
        self.config
    }
}
