//! Progress computation.
//!
//! Maps a [`TimingSnapshot`] to a value in `[0, 1]`, or `None` when progress
//! is undefined. `None` is not the same as zero: an animation without a
//! current time or without an effect has no progress at all.

use crate::snapshot::TimingSnapshot;
use crate::types::EndTime;

/// Which end time a progress value is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgressVariant {
    /// Position within the current iteration.
    Iteration,

    /// Position across all iterations, including delays.
    Overall,
}

/// Trait for the timing model that feeds the calculator.
///
/// Implementations fold start time and iteration offsets into the snapshot's
/// current time, and pick the end time matching `variant`.
pub trait TimingModel {
    /// Produces a fresh snapshot for this observation.
    fn snapshot(&self, variant: ProgressVariant) -> TimingSnapshot;
}

/// Computes progress for a single snapshot.
///
/// # Returns
/// * `None` - No current time (or a NaN one), or no effect
/// * `Some(0.0)` / `Some(1.0)` - Zero-length effect before / at-or-after its start
/// * `Some(0.0)` - Effect never ends
/// * `Some(p)` - `current_time / end_time` clamped to `[0, 1]`
pub fn compute_progress(snapshot: &TimingSnapshot) -> Option<f64> {
    let current_time = snapshot.current_time.filter(|time| !time.is_nan())?;
    let end_time = snapshot.end_time?;

    match end_time {
        // Division would yield NaN or infinity, so both cases short-circuit.
        EndTime::Finite(end) if end == 0.0 => Some(if current_time < 0.0 { 0.0 } else { 1.0 }),
        EndTime::Infinite => Some(0.0),
        EndTime::Finite(end) => Some((current_time / end).clamp(0.0, 1.0)),
    }
}

/// Evaluates progress of a [`TimingModel`] for one [`ProgressVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgressCalculator {
    variant: ProgressVariant,
}

impl ProgressCalculator {
    /// Creates a calculator for the given variant.
    #[inline]
    pub const fn new(variant: ProgressVariant) -> Self {
        Self { variant }
    }

    /// Calculator for overall progress.
    #[inline]
    pub const fn overall() -> Self {
        Self::new(ProgressVariant::Overall)
    }

    /// Calculator for per-iteration progress.
    #[inline]
    pub const fn iteration() -> Self {
        Self::new(ProgressVariant::Iteration)
    }

    /// Returns the variant this calculator measures.
    #[inline]
    pub fn variant(&self) -> ProgressVariant {
        self.variant
    }

    /// Requests a snapshot from `model` and computes its progress.
    pub fn progress<M: TimingModel + ?Sized>(&self, model: &M) -> Option<f64> {
        compute_progress(&model.snapshot(self.variant))
    }
}
