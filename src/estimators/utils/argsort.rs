// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::cmp::Ordering;

use ndarray::ArrayView1;

/// Total order on f64 used for sorting observations: NaN sorts after every number.
fn nan_last(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ord) => ord,
        None => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            _ => Ordering::Less,
        },
    }
}

/// Indices that would sort `data` in ascending order.
///
/// Ties keep their original index order (stable, like `numpy.argsort(kind="stable")`).
pub fn argsort(data: ArrayView1<'_, f64>) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..data.len()).collect();
    idx.sort_by(|&i, &j| nan_last(data[i], data[j]));
    idx
}

/// Ascending copy of `data` using the same ordering as [`argsort`].
pub fn sorted(data: ArrayView1<'_, f64>) -> Vec<f64> {
    let mut values = data.to_vec();
    values.sort_by(|a, b| nan_last(*a, *b));
    values
}
