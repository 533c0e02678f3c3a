// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use igci::estimators::approaches::SlopeIntegralScore;
use igci::estimators::{CausalDirection, CausalScore};
use ndarray::{Array1, array};

use crate::test_helpers::{cubic_pair, generate_uniform_data, noisy_pair};

#[test]
fn identity_relation_scores_zero() {
    let x = Array1::from_iter((0..30).map(|i| i as f64));
    let est = SlopeIntegralScore::new(x.clone(), x);
    assert_eq!(est.score(), 0.0);
    assert_eq!(est.direction(), CausalDirection::Undecided);
}

#[test]
fn hand_computed_small_example() {
    // X order and Y order coincide: slopes 1/1, 4/1 -> a = ln 4, b = -ln 4
    let x = array![0.0, 1.0, 2.0];
    let y = array![0.0, 1.0, 5.0];
    let est = SlopeIntegralScore::new(x, y);
    let (a, b) = est.local_contributions();
    assert_abs_diff_eq!(a[0], 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(a[1], 4.0f64.ln(), epsilon = 1e-15);
    assert_abs_diff_eq!(b[1], -(4.0f64.ln()), epsilon = 1e-15);
    assert_abs_diff_eq!(est.score(), 2.0 * 4.0f64.ln() / 3.0, epsilon = 1e-12);
}

#[test]
fn local_contributions_sum_to_score() {
    let (x, y) = noisy_pair(60, 8);
    let n = x.len() as f64;
    let est = SlopeIntegralScore::new(x, y);
    let (a, b) = est.local_contributions();
    assert_eq!(a.len(), 59);
    assert_eq!(b.len(), 59);
    assert_abs_diff_eq!((a.sum() - b.sum()) / n, est.score(), epsilon = 1e-12);
}

#[test]
fn score_is_exactly_antisymmetric() {
    let (x, y) = noisy_pair(75, 13);
    let forward = SlopeIntegralScore::new(x.clone(), y.clone()).score();
    let backward = SlopeIntegralScore::new(y, x).score();
    assert_eq!(forward, -backward);
}

#[test]
fn ties_are_skipped_without_log_zero() {
    let mut x = generate_uniform_data(40, 0.0, 1.0, 17);
    for i in [3, 4, 5, 20, 21] {
        x[i] = 0.5;
    }
    x[30] = x[31];
    let y = generate_uniform_data(40, 0.0, 1.0, 18);
    let est = SlopeIntegralScore::new(x, y);
    let (a, _b) = est.local_contributions();
    assert!(a.iter().all(|v| v.is_finite()));
    // five copies of 0.5 -> four tied steps, one more pair from x[30] == x[31]
    assert!(a.iter().filter(|&&v| v == 0.0).count() >= 5);
    assert!(est.score().is_finite());
}

#[test]
fn all_tied_steps_score_zero() {
    let x = Array1::from_elem(20, 1.0);
    let y = Array1::from_iter((0..20).map(|i| i as f64));
    assert_eq!(SlopeIntegralScore::new(x, y).score(), 0.0);
}

#[test]
fn nan_input_propagates() {
    let x = Array1::from_elem(20, f64::NAN);
    let y = Array1::from_iter((0..20).map(|i| i as f64));
    assert!(SlopeIntegralScore::new(x, y).score().is_nan());
}

#[test]
fn cubic_on_unit_interval_prefers_x_to_y() {
    let (x, y) = cubic_pair(50, 42);
    let est = SlopeIntegralScore::new(x, y);
    assert!(est.score() < 0.0);
    assert_eq!(est.direction(), CausalDirection::XCausesY);
}

#[test]
#[should_panic]
fn unequal_lengths_panic() {
    let _ = SlopeIntegralScore::new(Array1::zeros(3), Array1::zeros(4));
}
