//! Shared test infrastructure for animation-progress integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use animation_progress::{EffectTiming, EndTime, IterationCount, TimingSnapshot};

// ============================================================================
// Snapshot Helpers
// ============================================================================

/// Snapshot with an effect ending at `end_time` milliseconds
pub fn snapshot(current_time: Option<f64>, end_time: f64) -> TimingSnapshot {
    let end_time = EndTime::from_millis(end_time).unwrap();
    TimingSnapshot::new(current_time, end_time).unwrap()
}

/// Snapshot with an effect that never ends
pub fn endless_snapshot(current_time: Option<f64>) -> TimingSnapshot {
    TimingSnapshot::new(current_time, EndTime::Infinite).unwrap()
}

// ============================================================================
// Effect Helpers
// ============================================================================

/// Single 1000ms iteration, no delays
pub fn one_second() -> EffectTiming {
    EffectTiming::with_duration(1000.0).unwrap()
}

/// `count` iterations of 1000ms, wrapped in the given delays
pub fn repeated(count: f64, delay: f64, end_delay: f64) -> EffectTiming {
    EffectTiming::builder()
        .duration(1000.0)
        .iterations(IterationCount::Finite(count))
        .delay(delay)
        .end_delay(end_delay)
        .build()
        .unwrap()
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two progress values with floating-point tolerance
pub fn progress_equal(actual: Option<f64>, expected: f64) -> bool {
    const EPSILON: f64 = 1e-9;
    matches!(actual, Some(value) if (value - expected).abs() < EPSILON)
}
