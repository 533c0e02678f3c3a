// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input checks run before any normalization or estimation.

use ndarray::{Array1, Array2, Axis};

use crate::estimators::error::{IgciError, Variable};

/// Minimum number of observations per variable.
pub const MIN_OBSERVATIONS: usize = 20;

/// Observation sequence of one variable.
///
/// Accepts both a flat sequence and a two-dimensional `L x 1` column, the layout in which
/// paired observations are commonly stored. A two-dimensional array with any other number
/// of columns holds vector observations and is rejected by [`validate`].
#[derive(Debug, Clone)]
pub enum ObservationData {
    /// One-dimensional data: each element is one observation
    OneDimensional(Array1<f64>),

    /// Two-dimensional data: rows are observations, columns are components
    TwoDimensional(Array2<f64>),
}

impl From<Array1<f64>> for ObservationData {
    fn from(array: Array1<f64>) -> Self {
        ObservationData::OneDimensional(array)
    }
}

impl From<Array2<f64>> for ObservationData {
    fn from(array: Array2<f64>) -> Self {
        ObservationData::TwoDimensional(array)
    }
}

impl From<Vec<f64>> for ObservationData {
    fn from(values: Vec<f64>) -> Self {
        ObservationData::OneDimensional(Array1::from(values))
    }
}

impl From<&[f64]> for ObservationData {
    fn from(values: &[f64]) -> Self {
        ObservationData::OneDimensional(Array1::from(values.to_vec()))
    }
}

impl ObservationData {
    /// Number of observations (rows).
    pub fn len(&self) -> usize {
        match self {
            ObservationData::OneDimensional(a) => a.len(),
            ObservationData::TwoDimensional(a) => a.nrows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten to one scalar per observation.
    fn into_scalar(self, variable: Variable) -> Result<Array1<f64>, IgciError> {
        match self {
            ObservationData::OneDimensional(a) => Ok(a),
            ObservationData::TwoDimensional(a) if a.ncols() == 1 => {
                Ok(a.index_axis_move(Axis(1), 0))
            }
            ObservationData::TwoDimensional(a) => Err(IgciError::Shape {
                variable,
                columns: a.ncols(),
            }),
        }
    }
}

fn check_one(data: ObservationData, variable: Variable) -> Result<Array1<f64>, IgciError> {
    let values = data.into_scalar(variable)?;
    if values.len() < MIN_OBSERVATIONS {
        return Err(IgciError::InsufficientData {
            variable,
            len: values.len(),
            min: MIN_OBSERVATIONS,
        });
    }
    Ok(values)
}

/// Validate a pair of observation sequences.
///
/// Checks x (shape, length), then y (shape, length), then that the lengths match.
/// Returns both sequences flattened to one scalar per observation.
pub fn validate(
    x: impl Into<ObservationData>,
    y: impl Into<ObservationData>,
) -> Result<(Array1<f64>, Array1<f64>), IgciError> {
    let x = check_one(x.into(), Variable::X)?;
    let y = check_one(y.into(), Variable::Y)?;
    if x.len() != y.len() {
        return Err(IgciError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok((x, y))
}
