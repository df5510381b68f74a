//! Monitoring performance data (`label=valueUNIT;warn;crit;min;max`).

use std::fmt;

/// A single performance data tuple as appended after `|` on the status line.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfData {
    label: String,
    value: f64,
    unit: String,
    warning: Option<String>,
    critical: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
}

impl PerfData {
    pub fn new(label: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            unit: unit.into(),
            warning: None,
            critical: None,
            min: None,
            max: None,
        }
    }

    /// Sets the warning and critical range fields.
    pub fn with_ranges(mut self, warning: Option<String>, critical: Option<String>) -> Self {
        self.warning = warning;
        self.critical = critical;
        self
    }

    /// Sets the minimum and maximum fields.
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}{};{};{};{};{}",
            self.label,
            format_float(self.value),
            self.unit,
            self.warning.as_deref().unwrap_or_default(),
            self.critical.as_deref().unwrap_or_default(),
            self.min.map(format_float).unwrap_or_default(),
            self.max.map(format_float).unwrap_or_default(),
        )
    }
}

/// Formats a float the way the status line has always shown sizes.
///
/// Integral values keep a single decimal (`100.0`), anything else uses the
/// shortest representation that round-trips (`12.5`, `0.3333333333333333`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
