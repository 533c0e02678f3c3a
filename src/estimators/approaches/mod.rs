// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod reference_measure;
pub mod slope_integral;
pub mod spacing_entropy;

// Re-exports so callers can import from approaches::* directly.
pub use reference_measure::{Normalized, normalize};
pub use slope_integral::SlopeIntegralScore;
pub use spacing_entropy::{EntropyScore, SpacingEntropy};
