//! Input validation shared by every component.
//!
//! Components default to [`ValidationMode::Permissive`]: malformed or
//! missing input is skipped and numeric edge cases flow through as
//! non-finite values. [`ValidationMode::Strict`] turns the same findings
//! into errors at the component boundary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AdornError, AdornResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Permissive,
    Strict,
}

impl ValidationMode {
    #[must_use]
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }

    /// Applies the mode to a validation outcome.
    ///
    /// Returns `Ok(true)` for valid input, `Ok(false)` for invalid input in
    /// permissive mode, and the error itself in strict mode.
    pub fn enforce(self, outcome: AdornResult<()>) -> AdornResult<bool> {
        match outcome {
            Ok(()) => Ok(true),
            Err(err) if self.is_strict() => Err(err),
            Err(err) => {
                debug!(error = %err, "permissive mode ignored invalid input");
                Ok(false)
            }
        }
    }
}

pub fn validate_finite_point(x: f64, y: f64) -> AdornResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(AdornError::InvalidData(format!(
            "point ({x}, {y}) must have finite coordinates"
        )));
    }
    Ok(())
}

pub fn validate_radius(radius: f64) -> AdornResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(AdornError::InvalidData(format!(
            "radius must be finite and > 0, got {radius}"
        )));
    }
    Ok(())
}

/// Checks that an axis has scale points and a usable scale interval.
pub fn validate_axis_data(axis: &str, data: &[f64], interval: f64) -> AdornResult<()> {
    if data.is_empty() {
        return Err(AdornError::InvalidData(format!(
            "{axis} axis needs at least one scale point"
        )));
    }
    if !interval.is_finite() || interval == 0.0 {
        return Err(AdornError::InvalidData(format!(
            "{axis} axis scale interval must be finite and non-zero, got {interval}"
        )));
    }
    Ok(())
}
