//! Interpretation parameters.
//!
//! Parameters are plain serde structs with defaults, so a caller can build
//! them in code or deserialize them from JSON:
//!
//! ```
//! use str_solver::config::InterpretationConfig;
//!
//! let config = InterpretationConfig::from_json(r#"{"theta": 0.01}"#).unwrap();
//! assert_eq!(config.theta, 0.01);
//! assert_eq!(config.mixture.major_comp_ratio, 2.9);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Default ratio below which two peaks are too imbalanced to be a heterozygote
pub const DEFAULT_HETERO_IMBALANCE: f64 = 0.67;
/// Default ratio by which a major peak must exceed the next one
pub const DEFAULT_MAJOR_COMP_RATIO: f64 = 2.9;
/// Default minimum height (rfu) of a homozygous major peak
pub const DEFAULT_MIN_HOMOZYGOUS: f64 = 1500.0;
/// Default minimum height (rfu) of the weaker peak of a heterozygote
pub const DEFAULT_WEAK_SIGNAL: f64 = 500.0;

/// Thresholds for major-component extraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixtureParams {
    pub hetero_imbalance: f64,
    pub major_comp_ratio: f64,
    pub min_homozygous: f64,
    pub weak_signal: f64,
}

impl Default for MixtureParams {
    fn default() -> Self {
        Self {
            hetero_imbalance: DEFAULT_HETERO_IMBALANCE,
            major_comp_ratio: DEFAULT_MAJOR_COMP_RATIO,
            min_homozygous: DEFAULT_MIN_HOMOZYGOUS,
            weak_signal: DEFAULT_WEAK_SIGNAL,
        }
    }
}

impl MixtureParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("hetero_imbalance", self.hetero_imbalance)?;
        non_negative("major_comp_ratio", self.major_comp_ratio)?;
        non_negative("min_homozygous", self.min_homozygous)?;
        non_negative("weak_signal", self.weak_signal)
    }
}

/// Stutter ratios used for peak-height correction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StutterRatios {
    /// Fraction of a true peak that appears one repeat shorter
    pub minus: f64,
    /// Fraction of a true peak that appears one repeat longer
    pub plus: f64,
}

impl Default for StutterRatios {
    fn default() -> Self {
        Self {
            minus: 0.1,
            plus: 0.02,
        }
    }
}

impl StutterRatios {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("stutter.minus", self.minus)?;
        non_negative("stutter.plus", self.plus)?;
        let product = self.minus * self.plus;
        if (1.0 - product).abs() < f64::EPSILON {
            return Err(ConfigError::InvalidParameter {
                name: "stutter.minus * stutter.plus",
                value: product,
                reason: "must not equal 1",
            });
        }
        Ok(())
    }
}

/// All parameters of an interpretation run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpretationConfig {
    pub mixture: MixtureParams,
    pub stutter: StutterRatios,
    /// Population substructure correction for match statistics
    pub theta: f64,
}

impl InterpretationConfig {
    /// Parse and validate a configuration from JSON. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mixture.validate()?;
        self.stutter.validate()?;
        non_negative("theta", self.theta)?;
        if self.theta >= 1.0 {
            warn!("theta = {} is outside [0, 1)", self.theta);
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}
