#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimingSnapshot`**: Read-only current time and end time for one observation
//! - **`EndTime`**: Finite or infinite end of an effect's active interval
//! - **`compute_progress`**: Maps a snapshot to `Some(p)` with `p` in `[0, 1]`, or `None`
//! - **`ProgressCalculator`**: Runs `compute_progress` against any `TimingModel`
//! - **`ProgressVariant`**: Per-iteration or overall progress
//! - **`TimingModel`**: Trait to implement for your animation timing system
//! - **`EffectTiming`**: Duration, iterations and delays of an effect
//! - **`Animation`**: Effect plus current time, exposing `overall_progress()`
//! - **`AnimationCollection`**: Fixed-capacity set of animations sampled together
//! - **`AnimationAction`**: Commands that can be sent to update animations
//!
//! Progress is `None` when the animation has no current time or no effect.
//! Callers must keep that apart from `Some(0.0)`.

pub mod time;
pub mod types;
pub mod snapshot;
pub mod progress;
pub mod effect;
pub mod animation;
pub mod command;
pub mod collection;

pub use animation::Animation;
pub use collection::{AnimationCollection, AnimationId, CollectionError};
pub use command::{AnimationAction, AnimationCommand};
pub use effect::{EffectTiming, EffectTimingBuilder};
pub use progress::{ProgressCalculator, ProgressVariant, TimingModel, compute_progress};
pub use snapshot::TimingSnapshot;
pub use time::TimeDuration;
pub use types::{EndTime, IterationCount, TimingError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_progress_is_not_zero() {
        let snapshot = TimingSnapshot::without_effect(Some(0.0));
        assert_ne!(compute_progress(&snapshot), Some(0.0));
        assert_eq!(compute_progress(&snapshot), None);
    }
}
