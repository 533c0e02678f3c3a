// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Selectors for the reference measure and the estimator.
//!
//! Both selectors accept the numeric codes `1` and `2` used throughout the IGCI
//! literature as well as names. Parsing never fails: anything unrecognized becomes
//! `Unknown`, and the pipeline decides what that means (passthrough with a warning for
//! the reference measure, an error for the estimator).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Reference measure used to normalize each variable before estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReferenceMeasure {
    /// Rescale to `[0, 1]` using the sample minimum and maximum.
    #[default]
    Uniform,
    /// Standardize to zero mean and unit (population) standard deviation.
    Gaussian,
    /// Leave the data unscaled.
    Unknown,
}

impl ReferenceMeasure {
    /// `1` is uniform, `2` is Gaussian.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ReferenceMeasure::Uniform,
            2 => ReferenceMeasure::Gaussian,
            _ => ReferenceMeasure::Unknown,
        }
    }
}

impl FromStr for ReferenceMeasure {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let measure = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "uniform" => ReferenceMeasure::Uniform,
            "2" | "gaussian" | "normal" => ReferenceMeasure::Gaussian,
            _ => ReferenceMeasure::Unknown,
        };
        Ok(measure)
    }
}

impl fmt::Display for ReferenceMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceMeasure::Uniform => "uniform",
            ReferenceMeasure::Gaussian => "gaussian",
            ReferenceMeasure::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Algorithm computing the causal score from the normalized variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EstimatorKind {
    /// Difference of spacing-based differential entropies.
    Entropy,
    /// Integral approximation of the log-slope.
    #[default]
    SlopeIntegral,
    Unknown,
}

impl EstimatorKind {
    /// `1` is entropy, `2` is the slope integral.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => EstimatorKind::Entropy,
            2 => EstimatorKind::SlopeIntegral,
            _ => EstimatorKind::Unknown,
        }
    }
}

impl FromStr for EstimatorKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "entropy" => EstimatorKind::Entropy,
            "2" | "slope" | "slope-integral" | "slope_integral" | "integral" => {
                EstimatorKind::SlopeIntegral
            }
            _ => EstimatorKind::Unknown,
        };
        Ok(kind)
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EstimatorKind::Entropy => "entropy",
            EstimatorKind::SlopeIntegral => "slope-integral",
            EstimatorKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
