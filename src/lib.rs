// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # igci
//!
//! Information Geometric Causal Inference (IGCI) for pairs of scalar variables.
//!
//! Given paired observations of two variables X and Y, IGCI estimates which of the two
//! is the cause under the assumption of a deterministic, invertible relation between
//! them. The result is a single signed score:
//!
//! - `score < 0`: the method prefers the causal direction X → Y
//! - `score > 0`: the method prefers the causal direction Y → X
//! - `score == 0`: no preference
//!
//! Only the sign carries meaning. The magnitude is specific to the chosen estimator and
//! is not comparable across estimators.
//!
//! ## Quick Start
//!
//! ```rust
//! use igci::estimators::igci::{Igci, IgciConfig};
//! use igci::estimators::config::{EstimatorKind, ReferenceMeasure};
//! use ndarray::Array1;
//!
//! let x: Array1<f64> = Array1::linspace(0.01, 1.0, 50);
//! let y = x.mapv(|v| v.powi(3));
//!
//! let config = IgciConfig::default()
//!     .with_reference_measure(ReferenceMeasure::Uniform)
//!     .with_estimator(EstimatorKind::SlopeIntegral);
//! let outcome = Igci::estimate(x, y, &config).unwrap();
//! assert!(outcome.score < 0.0);
//! ```
//!
//! ## Pipeline
//!
//! 1. **Validation**: both inputs must be scalar per observation, hold at least 20
//!    observations and have equal length.
//! 2. **Reference measure**: each variable is rescaled to the uniform (`[0, 1]`) or
//!    Gaussian (zero mean, unit variance) reference measure.
//! 3. **Estimation**: either the spacing-based entropy difference or the slope integral
//!    approximation.
//!
//! ## Estimators
//!
//! ### Entropy
//! Differential entropies of both normalized variables are estimated from the spacings of
//! their order statistics; the score is `H(Y) - H(X)`.
//!
//! ### Slope Integral (default)
//! Approximates the integral of `log |f'(x)|` along the sorted order of each variable; the
//! score is the difference of the two directions' integrals.
//!
//! ## Reference
//!
//! P. Daniusis, D. Janzing, J. Mooij, J. Zscheischler, B. Steudel, K. Zhang,
//! B. Schölkopf: *Inferring deterministic causal relations*. UAI 2010.

pub mod estimators;

pub use estimators::igci::{Igci, IgciConfig, IgciOutcome};
pub use estimators::traits::{CausalDirection, CausalScore, GlobalValue};
