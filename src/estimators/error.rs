// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed failures and non-fatal warnings of the IGCI pipeline.

use std::fmt;

use crate::estimators::config::ReferenceMeasure;

/// Which of the two input variables a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    Y,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::X => write!(f, "x"),
            Variable::Y => write!(f, "y"),
        }
    }
}

/// Fatal conditions. The pipeline stops at the first one detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IgciError {
    #[error("dimensionality of {variable} must be 1, got {columns} columns")]
    Shape { variable: Variable, columns: usize },

    #[error("not enough observations in {variable}: got {len}, need at least {min}")]
    InsufficientData { variable: Variable, len: usize, min: usize },

    #[error("lengths of x and y must be equal, got {x_len} and {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("unknown estimator")]
    UnknownEstimator,
}

/// Non-fatal conditions attached to a still computed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgciWarning {
    /// The variable has zero range or zero variance; its normalized values are non-finite.
    DegenerateInput { variable: Variable, measure: ReferenceMeasure },
    /// No scaling was applied, so the score is not backed by a reference measure.
    UnknownReferenceMeasure,
}

impl fmt::Display for IgciWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgciWarning::DegenerateInput { variable, measure } => write!(
                f,
                "{variable} is degenerate under the {measure} reference measure; normalized values are non-finite"
            ),
            IgciWarning::UnknownReferenceMeasure => {
                write!(f, "unknown reference measure - no scaling applied")
            }
        }
    }
}
