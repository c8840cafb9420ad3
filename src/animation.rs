//! Host-facing animation object exposing the progress accessor.
//!
//! [`Animation`] does not drive a clock or manage a play state. The host timeline
//! pushes the current time in, and the animation answers progress queries from
//! whatever timing it holds at that moment.

use crate::effect::EffectTiming;
use crate::progress::{ProgressCalculator, ProgressVariant, TimingModel};
use crate::snapshot::TimingSnapshot;

/// An animation: an optional effect observed at an optional current time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animation {
    effect: Option<EffectTiming>,
    current_time: Option<f64>,
}

impl Animation {
    /// Creates an animation with no effect and no current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an animation driving `effect`, with no current time yet.
    pub fn with_effect(effect: EffectTiming) -> Self {
        Self {
            effect: Some(effect),
            current_time: None,
        }
    }

    /// Replaces the associated effect.
    pub fn set_effect(&mut self, effect: EffectTiming) {
        self.effect = Some(effect);
    }

    /// Detaches the effect, returning it if one was set.
    pub fn clear_effect(&mut self) -> Option<EffectTiming> {
        self.effect.take()
    }

    /// Sets the current time, measured from the start of the effect.
    ///
    /// `None` means the timeline is inactive or the animation is idle.
    pub fn set_current_time(&mut self, current_time: Option<f64>) {
        self.current_time = current_time;
    }

    /// Returns the current time, if any.
    pub fn current_time(&self) -> Option<f64> {
        self.current_time
    }

    /// Returns the associated effect, if any.
    pub fn effect(&self) -> Option<&EffectTiming> {
        self.effect.as_ref()
    }

    /// Returns true if an effect is associated.
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    /// Returns how far the animation has advanced across its whole effect.
    ///
    /// # Returns
    /// * `Some(p)` with `p` in `[0, 1]`
    /// * `None` - No current time or no effect; progress is undefined
    pub fn overall_progress(&self) -> Option<f64> {
        ProgressCalculator::overall().progress(self)
    }
}

impl TimingModel for Animation {
    fn snapshot(&self, variant: ProgressVariant) -> TimingSnapshot {
        let Some(effect) = self.effect else {
            return TimingSnapshot::without_effect(self.current_time);
        };

        // EffectTiming only yields validated end times.
        match variant {
            ProgressVariant::Overall => TimingSnapshot {
                current_time: self.current_time,
                end_time: Some(effect.end_time()),
            },
            ProgressVariant::Iteration => TimingSnapshot {
                current_time: self.current_time.map(|time| effect.iteration_time(time)),
                end_time: Some(effect.iteration_duration()),
            },
        }
    }
}
