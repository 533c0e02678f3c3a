// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Inferred causal direction between X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CausalDirection {
    /// Negative score.
    XCausesY,
    /// Positive score.
    YCausesX,
    /// Zero or NaN score.
    Undecided,
}

impl CausalDirection {
    /// Decision rule: `f < 0` means X → Y, `f > 0` means Y → X.
    pub fn from_score(score: f64) -> Self {
        if score < 0.0 {
            CausalDirection::XCausesY
        } else if score > 0.0 {
            CausalDirection::YCausesX
        } else {
            CausalDirection::Undecided
        }
    }
}

/// Interface for estimators producing a signed causal score for a pair (X, Y).
///
/// Implementations must be anti-symmetric: swapping X and Y flips the sign of the score.
pub trait CausalScore {
    /// Compute the score. Negative prefers X → Y, positive prefers Y → X.
    fn score(&self) -> f64;

    /// Apply the sign decision rule to [`CausalScore::score`].
    fn direction(&self) -> CausalDirection {
        CausalDirection::from_score(self.score())
    }
}
