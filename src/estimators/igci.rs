// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::{debug, warn};

use crate::estimators::approaches::{EntropyScore, SlopeIntegralScore, normalize};
use crate::estimators::config::{EstimatorKind, ReferenceMeasure};
use crate::estimators::error::{IgciError, IgciWarning, Variable};
use crate::estimators::traits::{CausalDirection, CausalScore};
use crate::estimators::validation::{ObservationData, validate};

/// Settings for one IGCI run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IgciConfig {
    pub reference_measure: ReferenceMeasure,
    pub estimator: EstimatorKind,
}

impl IgciConfig {
    /// Set the reference measure (default uniform)
    pub fn with_reference_measure(mut self, measure: ReferenceMeasure) -> Self {
        self.reference_measure = measure;
        self
    }

    /// Set the estimator (default slope integral)
    pub fn with_estimator(mut self, estimator: EstimatorKind) -> Self {
        self.estimator = estimator;
        self
    }
}

/// Result of a successful IGCI run.
#[derive(Debug, Clone, PartialEq)]
pub struct IgciOutcome {
    /// Signed score. `< 0` prefers X → Y, `> 0` prefers Y → X, `0` is a tie.
    /// Non-finite when an input is degenerate.
    pub score: f64,
    pub direction: CausalDirection,
    pub warnings: Vec<IgciWarning>,
}

impl IgciOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Information Geometric Causal Inference for a pair of scalar variables.
///
/// This struct provides static methods running the full pipeline: validation,
/// normalization to the reference measure, and estimation.
pub struct Igci;

impl Igci {
    /// Infer the causal direction between `x` and `y`.
    ///
    /// # Arguments
    ///
    /// * `x` - Observations of the first variable (flat, or an `L x 1` column)
    /// * `y` - Paired observations of the second variable
    /// * `config` - Reference measure and estimator to use
    ///
    /// # Returns
    ///
    /// The signed score with its direction and any non-fatal warnings, or the first
    /// precondition that was violated.
    ///
    /// # Errors
    ///
    /// * `IgciError::Shape` - an input has more than one column
    /// * `IgciError::InsufficientData` - an input has fewer than 20 observations
    /// * `IgciError::LengthMismatch` - the inputs differ in length
    /// * `IgciError::UnknownEstimator` - `config.estimator` is `EstimatorKind::Unknown`
    pub fn estimate(
        x: impl Into<ObservationData>,
        y: impl Into<ObservationData>,
        config: &IgciConfig,
    ) -> Result<IgciOutcome, IgciError> {
        let (x, y) = validate(x, y)?;
        if config.estimator == EstimatorKind::Unknown {
            return Err(IgciError::UnknownEstimator);
        }

        let mut warnings = Vec::new();
        let measure = config.reference_measure;
        if measure == ReferenceMeasure::Unknown {
            warn!("unknown reference measure - no scaling applied");
            warnings.push(IgciWarning::UnknownReferenceMeasure);
        }

        let nx = normalize(x.view(), measure);
        let ny = normalize(y.view(), measure);
        for (variable, degenerate) in [(Variable::X, nx.degenerate), (Variable::Y, ny.degenerate)] {
            if degenerate {
                warn!(%variable, %measure, "degenerate input, normalized values are non-finite");
                warnings.push(IgciWarning::DegenerateInput { variable, measure });
            }
        }

        let score = match config.estimator {
            EstimatorKind::Entropy => EntropyScore::new(nx.data, ny.data).score(),
            EstimatorKind::SlopeIntegral => SlopeIntegralScore::new(nx.data, ny.data).score(),
            EstimatorKind::Unknown => return Err(IgciError::UnknownEstimator),
        };
        let direction = CausalDirection::from_score(score);
        debug!(estimator = %config.estimator, %measure, score, ?direction, "igci score");

        Ok(IgciOutcome {
            score,
            direction,
            warnings,
        })
    }

    /// Score with the default configuration (uniform reference measure, slope integral).
    pub fn score(
        x: impl Into<ObservationData>,
        y: impl Into<ObservationData>,
    ) -> Result<f64, IgciError> {
        Self::estimate(x, y, &IgciConfig::default()).map(|outcome| outcome.score)
    }
}
