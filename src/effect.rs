use crate::time::TimeDuration;
use crate::types::{EndTime, IterationCount, TimingError};

/// Timing of an animation effect.
///
/// Describes one effect as an iteration duration repeated a number of times,
/// surrounded by a start delay and an end delay. All values are milliseconds
/// (or the host timeline's normalized unit, as long as it is used consistently).
///
/// Construct through [`EffectTiming::builder`], which validates the values so
/// that every derived end time is non-negative and never NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EffectTiming {
    duration: EndTime,
    iterations: IterationCount,
    delay: f64,
    end_delay: f64,
}

impl EffectTiming {
    /// Creates a new effect timing builder.
    pub fn builder() -> EffectTimingBuilder {
        EffectTimingBuilder::new()
    }

    /// Creates a single-iteration effect with no delays.
    ///
    /// # Errors
    /// Same as [`EffectTimingBuilder::build`].
    pub fn with_duration(duration: f64) -> Result<Self, TimingError> {
        Self::builder().duration(duration).build()
    }

    /// Returns the duration of one iteration.
    pub fn iteration_duration(&self) -> EndTime {
        self.duration
    }

    /// Returns the iteration count.
    pub fn iterations(&self) -> IterationCount {
        self.iterations
    }

    /// Returns the start delay.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Returns the end delay.
    pub fn end_delay(&self) -> f64 {
        self.end_delay
    }

    /// Calculates the length of the active interval (all iterations).
    ///
    /// A zero factor wins over an infinite one: zero iterations of an endless
    /// duration, and endless iterations of a zero duration, are both zero.
    /// A product too large for `f64` saturates to [`EndTime::Infinite`].
    pub fn active_duration(&self) -> EndTime {
        match (self.duration, self.iterations) {
            (duration, _) if duration.is_zero() => EndTime::ZERO,
            (_, IterationCount::Finite(count)) if count == 0.0 => EndTime::ZERO,
            (EndTime::Infinite, _) | (_, IterationCount::Infinite) => EndTime::Infinite,
            (EndTime::Finite(duration), IterationCount::Finite(count)) => {
                finite_or_infinite(duration * count)
            }
        }
    }

    /// Calculates the end time of the whole effect, delays included.
    ///
    /// Negative totals (large negative delays) are clamped to zero. Delays
    /// whose sum would overflow are rejected by the builder, so a finite active
    /// interval always yields a finite end time.
    pub fn end_time(&self) -> EndTime {
        match self.active_duration() {
            EndTime::Infinite => EndTime::Infinite,
            EndTime::Finite(active) => {
                finite_or_infinite((self.delay + active + self.end_delay).max(0.0))
            }
        }
    }

    /// Folds a current time into the current iteration.
    ///
    /// `current_time` is measured from the effect's start, before the delay.
    /// The result is measured from the start of the iteration that is current
    /// at that time:
    /// * before the active interval, the (negative) offset to its start
    /// * inside it, the offset into the running iteration
    /// * after it, the position the final iteration finished at
    pub fn iteration_time(&self, current_time: f64) -> f64 {
        let local_time = current_time - self.delay;

        let duration = match self.duration {
            EndTime::Finite(duration) if duration > 0.0 => duration,
            _ => return local_time,
        };

        if local_time < 0.0 {
            return local_time;
        }
        if local_time.is_infinite() {
            return duration;
        }

        match self.iterations {
            IterationCount::Infinite => local_time % duration,
            IterationCount::Finite(count) => {
                if local_time < duration * count {
                    return local_time % duration;
                }
                if count == 0.0 {
                    return 0.0;
                }

                let partial = count % 1.0;
                if partial == 0.0 {
                    duration
                } else {
                    partial * duration
                }
            }
        }
    }
}

fn finite_or_infinite(millis: f64) -> EndTime {
    if millis.is_infinite() {
        EndTime::Infinite
    } else {
        EndTime::Finite(millis)
    }
}

/// Builder for constructing validated effect timings.
#[derive(Debug, Clone, Copy)]
pub struct EffectTimingBuilder {
    duration: f64,
    iterations: IterationCount,
    delay: f64,
    end_delay: f64,
}

impl EffectTimingBuilder {
    /// Creates a builder for a zero-length, single-iteration effect.
    pub fn new() -> Self {
        Self {
            duration: 0.0,
            iterations: IterationCount::default(),
            delay: 0.0,
            end_delay: 0.0,
        }
    }

    /// Sets the iteration duration in milliseconds.
    ///
    /// `f64::INFINITY` makes each iteration endless.
    pub fn duration(mut self, millis: f64) -> Self {
        self.duration = millis;
        self
    }

    /// Sets the iteration duration from a platform duration type.
    pub fn duration_from<D: TimeDuration>(self, duration: D) -> Self {
        self.duration(duration.as_fractional_millis())
    }

    /// Sets how many times the effect iterates.
    ///
    /// Default is `IterationCount::Finite(1.0)`.
    pub fn iterations(mut self, iterations: IterationCount) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the start delay in milliseconds. May be negative.
    pub fn delay(mut self, millis: f64) -> Self {
        self.delay = millis;
        self
    }

    /// Sets the end delay in milliseconds. May be negative.
    pub fn end_delay(mut self, millis: f64) -> Self {
        self.end_delay = millis;
        self
    }

    /// Builds and validates the effect timing.
    ///
    /// # Errors
    /// * `NotANumber` - A value is NaN, or a delay is infinite
    /// * `NegativeDuration` - Duration is below zero
    /// * `NegativeIterations` - Iteration count is below zero
    /// * `EndTimeOverflow` - Delays plus a finite active interval exceed `f64`
    pub fn build(self) -> Result<EffectTiming, TimingError> {
        if self.duration.is_nan() || !self.delay.is_finite() || !self.end_delay.is_finite() {
            return Err(TimingError::NotANumber);
        }
        if self.duration < 0.0 {
            return Err(TimingError::NegativeDuration);
        }
        if let IterationCount::Finite(count) = self.iterations {
            if count.is_nan() {
                return Err(TimingError::NotANumber);
            }
            if count < 0.0 {
                return Err(TimingError::NegativeIterations);
            }
        }

        let iterations = match self.iterations {
            IterationCount::Finite(count) if count.is_infinite() => IterationCount::Infinite,
            iterations => iterations,
        };

        let effect = EffectTiming {
            duration: finite_or_infinite(self.duration),
            iterations,
            delay: self.delay,
            end_delay: self.end_delay,
        };

        if let EndTime::Finite(active) = effect.active_duration() {
            if effect.delay + active + effect.end_delay == f64::INFINITY {
                return Err(TimingError::EndTimeOverflow);
            }
        }

        Ok(effect)
    }
}

impl Default for EffectTimingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_invalid_values() {
        assert_eq!(
            EffectTiming::builder().duration(-1.0).build(),
            Err(TimingError::NegativeDuration)
        );
        assert_eq!(
            EffectTiming::builder().duration(f64::NAN).build(),
            Err(TimingError::NotANumber)
        );
        assert_eq!(
            EffectTiming::builder()
                .iterations(IterationCount::Finite(-2.0))
                .build(),
            Err(TimingError::NegativeIterations)
        );
        assert_eq!(
            EffectTiming::builder().delay(f64::INFINITY).build(),
            Err(TimingError::NotANumber)
        );
    }

    #[test]
    fn build_rejects_delays_that_overflow_end_time() {
        let result = EffectTiming::builder()
            .duration(1000.0)
            .delay(f64::MAX)
            .end_delay(f64::MAX)
            .build();
        assert_eq!(result, Err(TimingError::EndTimeOverflow));

        // Overflow towards negative infinity still clamps to zero
        let effect = EffectTiming::builder()
            .duration(1000.0)
            .delay(-f64::MAX)
            .end_delay(-f64::MAX)
            .build()
            .unwrap();
        assert_eq!(effect.end_time(), EndTime::ZERO);
    }

    #[test]
    fn endless_iterations_at_infinite_time_hold_full_iteration() {
        let effect = EffectTiming::builder()
            .duration(1000.0)
            .iterations(IterationCount::Infinite)
            .build()
            .unwrap();

        assert_eq!(effect.iteration_time(f64::INFINITY), 1000.0);
        assert_eq!(effect.iteration_time(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn infinite_finite_iterations_normalize() {
        let effect = EffectTiming::builder()
            .duration(100.0)
            .iterations(IterationCount::Finite(f64::INFINITY))
            .build()
            .unwrap();

        assert_eq!(effect.iterations(), IterationCount::Infinite);
        assert_eq!(effect.end_time(), EndTime::Infinite);
    }

    #[test]
    fn zero_factor_wins_over_infinite_factor() {
        let endless_zero = EffectTiming::builder()
            .duration(0.0)
            .iterations(IterationCount::Infinite)
            .build()
            .unwrap();
        assert_eq!(endless_zero.active_duration(), EndTime::ZERO);

        let no_iterations = EffectTiming::builder()
            .duration(f64::INFINITY)
            .iterations(IterationCount::Finite(0.0))
            .build()
            .unwrap();
        assert_eq!(no_iterations.active_duration(), EndTime::ZERO);
    }

    #[test]
    fn duration_from_converts_core_duration() {
        let effect = EffectTiming::builder()
            .duration_from(core::time::Duration::from_millis(1500))
            .build()
            .unwrap();

        assert_eq!(effect.iteration_duration(), EndTime::Finite(1500.0));
    }
}
