//! Read-only view of an animation's timing at a single observation.

use crate::types::{EndTime, TimingError};

/// The inputs a progress computation reads.
///
/// A snapshot is produced by the timing model for one observation and is never
/// mutated afterwards. The current time must already be expressed in the same
/// unit as the end time and relative to the effect's start.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingSnapshot {
    pub(crate) current_time: Option<f64>,
    pub(crate) end_time: Option<EndTime>,
}

impl TimingSnapshot {
    /// Creates a snapshot for an animation with an associated effect.
    ///
    /// # Errors
    /// * `NotANumber` - `end_time` is `Finite(NaN)`
    /// * `NegativeEndTime` - `end_time` is below zero
    pub fn new(current_time: Option<f64>, end_time: EndTime) -> Result<Self, TimingError> {
        Ok(Self {
            current_time,
            end_time: Some(end_time.validate()?),
        })
    }

    /// Creates a snapshot for an animation with no associated effect.
    #[inline]
    pub fn without_effect(current_time: Option<f64>) -> Self {
        Self {
            current_time,
            end_time: None,
        }
    }

    /// Returns the current time, if any.
    #[inline]
    pub fn current_time(&self) -> Option<f64> {
        self.current_time
    }

    /// Returns true if the animation has an associated effect.
    #[inline]
    pub fn has_effect(&self) -> bool {
        self.end_time.is_some()
    }

    /// Returns the effect's end time, or `None` without an effect.
    #[inline]
    pub fn end_time(&self) -> Option<EndTime> {
        self.end_time
    }
}
