//! Optional alerting thresholds on a storage domain's available space.

use crate::core::domain::{
    error::ValidationError, model::check_result::ServiceState, model::perf_data::format_float,
};

/// Low-water marks, in GiB, on available space.
///
/// Available space strictly below `critical` is CRITICAL, otherwise strictly
/// below `warning` is WARNING. Unset thresholds never trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    warning: Option<f64>,
    critical: Option<f64>,
}

impl Thresholds {
    /// Creates thresholds without validation.
    pub(crate) fn new_unchecked(warning: Option<f64>, critical: Option<f64>) -> Self {
        Self { warning, critical }
    }

    pub fn warning(&self) -> Option<f64> {
        self.warning
    }

    pub fn critical(&self) -> Option<f64> {
        self.critical
    }

    /// Evaluates the state for a given amount of available space in GiB.
    pub fn evaluate(&self, available_gib: f64) -> ServiceState {
        if self.critical.is_some_and(|c| available_gib < c) {
            ServiceState::Critical
        } else if self.warning.is_some_and(|w| available_gib < w) {
            ServiceState::Warning
        } else {
            ServiceState::Ok
        }
    }

    /// Perf data warning range: alert when the value drops below the mark.
    pub fn warning_range(&self) -> Option<String> {
        self.warning.map(|w| format!("{}:", format_float(w)))
    }

    /// Perf data critical range: alert when the value drops below the mark.
    pub fn critical_range(&self) -> Option<String> {
        self.critical.map(|c| format!("{}:", format_float(c)))
    }
}

/// Validates a pair of available-space thresholds.
pub(crate) fn validate_thresholds(
    warning: Option<f64>,
    critical: Option<f64>,
) -> Result<(), ValidationError> {
    for (field, value) in [("warning", warning), ("critical", critical)] {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::Field {
                    field: field.to_string(),
                    message: format!("Threshold must be a non-negative number, got {value}"),
                });
            }
        }
    }
    if let (Some(w), Some(c)) = (warning, critical) {
        if c > w {
            return Err(ValidationError::ConstraintViolation(format!(
                "Critical threshold ({c} GB) must not exceed warning threshold ({w} GB)"
            )));
        }
    }
    Ok(())
}
