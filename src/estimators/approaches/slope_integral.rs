// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Slope Integral Estimator
//!
//! If Y = f(X) for a deterministic, invertible f, IGCI prefers X → Y when
//!
//! C(X→Y) = ∫ log |f'(x)| p(x) dx
//!
//! is smaller than the reverse C(Y→X) = ∫ log |(f⁻¹)'(y)| p(y) dy.
//! Both integrals are approximated from the data without a density estimate by walking each
//! variable's sorted order and summing the log of the finite-difference slopes:
//!
//! a = Σ ln |(y_{i+1} - y_i) / (x_{i+1} - x_i)|   (pairs in ascending X order)
//! b = Σ ln |(x_{i+1} - x_i) / (y_{i+1} - y_i)|   (pairs in ascending Y order)
//!
//! The score is `(a - b) / N`. Steps where either coordinate does not move are skipped.

use ndarray::{Array1, ArrayView1};
use tracing::trace;

use crate::estimators::traits::CausalScore;
use crate::estimators::utils::argsort::argsort;

/// IGCI slope-integral estimator on normalized data.
pub struct SlopeIntegralScore {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl SlopeIntegralScore {
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Self {
        assert!(x.len() == y.len(), "x and y must have equal length");
        Self { x, y }
    }

    /// Per-step log-slope terms `(a_i, b_i)` along X order and Y order respectively.
    ///
    /// Both arrays have length `N - 1`; skipped tie steps contribute 0.
    pub fn local_contributions(&self) -> (Array1<f64>, Array1<f64>) {
        let a = log_slopes(self.x.view(), self.y.view());
        let b = log_slopes(self.y.view(), self.x.view());
        (a, b)
    }
}

/// ln |d(dep)/d(indep)| for consecutive observations in ascending `indep` order.
fn log_slopes(indep: ArrayView1<'_, f64>, dep: ArrayView1<'_, f64>) -> Array1<f64> {
    let order = argsort(indep);
    let mut out = Array1::<f64>::zeros(order.len().saturating_sub(1));
    for (i, w) in order.windows(2).enumerate() {
        let (i1, i2) = (w[0], w[1]);
        let (x1, x2) = (indep[i1], indep[i2]);
        let (y1, y2) = (dep[i1], dep[i2]);
        if x1 != x2 && y1 != y2 {
            out[i] = ((y2 - y1) / (x2 - x1)).abs().ln();
        }
    }
    out
}

impl CausalScore for SlopeIntegralScore {
    fn score(&self) -> f64 {
        let n = self.x.len();
        if n == 0 {
            return 0.0;
        }
        let (a_terms, b_terms) = self.local_contributions();
        let a = a_terms.iter().fold(0.0_f64, |acc, v| acc + v);
        let b = b_terms.iter().fold(0.0_f64, |acc, v| acc + v);
        trace!(a, b, n, "slope integral sums");
        (a - b) / n as f64
    }
}
