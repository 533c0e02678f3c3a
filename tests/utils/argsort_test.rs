// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use igci::estimators::utils::argsort::{argsort, sorted};
use ndarray::{Array1, array};

#[test]
fn test_argsort_basic() {
    let data = array![3.0, 1.0, 4.0, 2.0];
    assert_eq!(argsort(data.view()), vec![1, 3, 0, 2]);
}

#[test]
fn test_argsort_stable_with_ties() {
    let data = array![1.0, 2.0, 1.0, 0.0];
    // Indices of 1.0 are 0 and 2; a stable sort keeps them in that order.
    assert_eq!(argsort(data.view()), vec![3, 0, 2, 1]);
}

#[test]
fn test_argsort_empty() {
    let data: Array1<f64> = Array1::zeros(0);
    assert!(argsort(data.view()).is_empty());
}

#[test]
fn test_argsort_nan_sorts_last() {
    let data = array![1.0, f64::NAN, 0.0];
    // 0.0 (idx 2) < 1.0 (idx 0) < NaN (idx 1)
    assert_eq!(argsort(data.view()), vec![2, 0, 1]);
}

#[test]
fn test_sorted_matches_argsort() {
    let data = array![0.5, -2.0, 7.25, 0.5, 3.0];
    let idx = argsort(data.view());
    let by_index: Vec<f64> = idx.iter().map(|&i| data[i]).collect();
    assert_eq!(sorted(data.view()), by_index);
    assert_eq!(sorted(data.view()), vec![-2.0, 0.5, 0.5, 3.0, 7.25]);
}
