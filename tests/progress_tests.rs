//! Integration tests for compute_progress

mod common;
use common::*;

use animation_progress::{TimingSnapshot, compute_progress};

#[test]
fn missing_current_time_is_undefined() {
    for end_time in [0.0, 1.0, 1000.0, f64::INFINITY] {
        assert_eq!(compute_progress(&snapshot(None, end_time)), None);
    }
}

#[test]
fn missing_effect_is_undefined_regardless_of_current_time() {
    for current_time in [None, Some(-5.0), Some(0.0), Some(500.0)] {
        let snapshot = TimingSnapshot::without_effect(current_time);
        assert_eq!(compute_progress(&snapshot), None);
    }
}

#[test]
fn zero_length_effect_before_start_is_zero() {
    assert_eq!(compute_progress(&snapshot(Some(-5.0), 0.0)), Some(0.0));
}

#[test]
fn zero_length_effect_at_or_after_start_is_one() {
    assert_eq!(compute_progress(&snapshot(Some(0.0), 0.0)), Some(1.0));
    assert_eq!(compute_progress(&snapshot(Some(5.0), 0.0)), Some(1.0));
}

#[test]
fn endless_effect_is_always_zero() {
    for current_time in [-1000.0, 0.0, 500.0, 1e15] {
        assert_eq!(
            compute_progress(&endless_snapshot(Some(current_time))),
            Some(0.0)
        );
    }
}

#[test]
fn halfway_through_is_one_half() {
    assert_eq!(compute_progress(&snapshot(Some(500.0), 1000.0)), Some(0.5));
}

#[test]
fn progress_clamps_below_zero_and_above_one() {
    assert_eq!(compute_progress(&snapshot(Some(-100.0), 1000.0)), Some(0.0));
    assert_eq!(compute_progress(&snapshot(Some(1500.0), 1000.0)), Some(1.0));
}

#[test]
fn progress_reaches_exactly_one_at_end_time() {
    assert_eq!(compute_progress(&snapshot(Some(1000.0), 1000.0)), Some(1.0));

    let just_before = compute_progress(&snapshot(Some(999.999), 1000.0)).unwrap();
    assert!(just_before < 1.0);
    assert!(just_before > 0.999);
}

#[test]
fn progress_is_monotonic_in_current_time() {
    let mut previous = 0.0;
    let mut current_time = -200.0;

    while current_time <= 1200.0 {
        let progress = compute_progress(&snapshot(Some(current_time), 1000.0)).unwrap();
        assert!(progress >= previous);
        assert!((0.0..=1.0).contains(&progress));
        previous = progress;
        current_time += 25.0;
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let snapshot = snapshot(Some(333.0), 1000.0);
    assert_eq!(compute_progress(&snapshot), compute_progress(&snapshot));
    assert!(progress_equal(compute_progress(&snapshot), 0.333));
}

#[test]
fn nan_current_time_is_treated_as_missing() {
    assert_eq!(compute_progress(&snapshot(Some(f64::NAN), 1000.0)), None);
    assert_eq!(compute_progress(&endless_snapshot(Some(f64::NAN))), None);
}
