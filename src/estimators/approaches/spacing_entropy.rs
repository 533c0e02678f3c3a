// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use statrs::function::gamma::digamma;

use crate::estimators::traits::{CausalScore, GlobalValue};
use crate::estimators::utils::argsort::sorted;

/// Spacing-based (Vasicek-type) differential entropy estimator for 1D data (natural log).
///
/// H_hat = (1/(N-1)) * sum_{i=1}^{N-1} ln|x_(i+1) - x_(i)| + psi(N) - psi(1)
///
/// where x_(i) is the i-th order statistic. Zero spacings from tied values are left out of
/// the sum but still count in the (N-1) divisor.
pub struct SpacingEntropy {
    pub data: Array1<f64>,
}

impl SpacingEntropy {
    pub fn new(data: Array1<f64>) -> Self {
        Self { data }
    }
}

impl GlobalValue for SpacingEntropy {
    fn global_value(&self) -> f64 {
        let n = self.data.len();
        if n < 2 {
            return 0.0;
        }
        let order = sorted(self.data.view());
        let mut sum_ln = 0.0_f64;
        for w in order.windows(2) {
            let delta = w[1] - w[0];
            // NaN spacings are kept so degenerate input stays visible downstream
            if delta != 0.0 {
                sum_ln += delta.abs().ln();
            }
        }
        let n_f = n as f64;
        sum_ln / (n_f - 1.0) + digamma(n_f) - digamma(1.0)
    }
}

/// IGCI entropy estimator: score = H(Y) - H(X) on normalized data.
pub struct EntropyScore {
    x: SpacingEntropy,
    y: SpacingEntropy,
}

impl EntropyScore {
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Self {
        Self {
            x: SpacingEntropy::new(x),
            y: SpacingEntropy::new(y),
        }
    }

    /// Entropy estimates `(H(X), H(Y))`.
    pub fn entropies(&self) -> (f64, f64) {
        (self.x.global_value(), self.y.global_value())
    }
}

impl CausalScore for EntropyScore {
    fn score(&self) -> f64 {
        let (hx, hy) = self.entropies();
        hy - hx
    }
}
