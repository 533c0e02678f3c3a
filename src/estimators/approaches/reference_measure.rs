// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Reference Measures
//!
//! IGCI compares the two variables relative to a reference measure. Before estimation,
//! each variable is rescaled with its own statistics so that it matches the chosen
//! reference:
//!
//! - **Uniform**: `s' = (s - min(s)) / (max(s) - min(s))`, mapping the sample onto `[0, 1]`
//! - **Gaussian**: `s' = (s - mean(s)) / std(s)` with the population standard deviation
//!
//! Constant sequences divide by zero. The resulting non-finite values are kept as they
//! are and the sequence is flagged as degenerate.

use ndarray::{Array1, ArrayView1};

use crate::estimators::config::ReferenceMeasure;

/// A sequence rescaled to a reference measure.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub data: Array1<f64>,
    /// Zero (or non-finite) range or standard deviation was encountered.
    pub degenerate: bool,
}

/// Rescale `data` to `measure`. `ReferenceMeasure::Unknown` returns an unscaled copy.
pub fn normalize(data: ArrayView1<'_, f64>, measure: ReferenceMeasure) -> Normalized {
    match measure {
        ReferenceMeasure::Uniform => to_uniform(data),
        ReferenceMeasure::Gaussian => to_gaussian(data),
        ReferenceMeasure::Unknown => Normalized {
            data: data.to_owned(),
            degenerate: false,
        },
    }
}

fn to_uniform(data: ArrayView1<'_, f64>) -> Normalized {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    Normalized {
        data: data.mapv(|v| (v - min) / range),
        degenerate: !(range.is_finite() && range != 0.0),
    }
}

fn to_gaussian(data: ArrayView1<'_, f64>) -> Normalized {
    if data.is_empty() {
        return Normalized {
            data: Array1::zeros(0),
            degenerate: true,
        };
    }
    let n = data.len() as f64;
    let mean = data.sum() / n;
    let var = data.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let std = var.sqrt();
    Normalized {
        data: data.mapv(|v| (v - mean) / std),
        degenerate: !(std.is_finite() && std != 0.0),
    }
}
