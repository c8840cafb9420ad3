//! Duration abstraction for platform-agnostic effect timing.

/// Trait abstraction for duration types.
///
/// Implement this for your platform's duration type to pass it straight into
/// [`EffectTimingBuilder`](crate::effect::EffectTimingBuilder).
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_fractional_millis(&self) -> f64;
}

impl TimeDuration for core::time::Duration {
    fn as_fractional_millis(&self) -> f64 {
        self.as_secs_f64() * 1000.0
    }
}
