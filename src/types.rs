//! Core value types shared by snapshots, effects and the calculator.

/// The end point of an effect's active interval, in milliseconds.
///
/// Scroll-driven timelines use the same representation; the host is expected
/// to have normalized the current time into the same unit before it reaches
/// this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EndTime {
    /// A finite, non-negative end time.
    Finite(f64),

    /// The effect never ends.
    Infinite,
}

impl EndTime {
    /// Zero end time constant.
    pub const ZERO: Self = EndTime::Finite(0.0);

    /// Creates an end time from milliseconds.
    ///
    /// `f64::INFINITY` maps to [`EndTime::Infinite`].
    ///
    /// # Errors
    /// * `NotANumber` - `millis` is NaN
    /// * `NegativeEndTime` - `millis` is below zero (including negative infinity)
    pub fn from_millis(millis: f64) -> Result<Self, TimingError> {
        if millis.is_nan() {
            return Err(TimingError::NotANumber);
        }
        if millis < 0.0 {
            return Err(TimingError::NegativeEndTime);
        }
        if millis.is_infinite() {
            return Ok(EndTime::Infinite);
        }
        Ok(EndTime::Finite(millis))
    }

    /// Returns the end time as milliseconds, `f64::INFINITY` when unbounded.
    #[inline]
    pub fn as_millis(&self) -> f64 {
        match self {
            EndTime::Finite(millis) => *millis,
            EndTime::Infinite => f64::INFINITY,
        }
    }

    /// Returns true for a zero-length effect.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, EndTime::Finite(millis) if *millis == 0.0)
    }

    /// Returns true if the effect never ends.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, EndTime::Infinite)
    }

    fn is_valid(&self) -> bool {
        match self {
            EndTime::Finite(millis) => *millis >= 0.0 && millis.is_finite(),
            EndTime::Infinite => true,
        }
    }

    pub(crate) fn validate(self) -> Result<Self, TimingError> {
        if self.is_valid() {
            return Ok(self);
        }
        match self {
            EndTime::Finite(millis) if millis.is_nan() => Err(TimingError::NotANumber),
            EndTime::Finite(millis) if millis == f64::INFINITY => Ok(EndTime::Infinite),
            _ => Err(TimingError::NegativeEndTime),
        }
    }
}

/// How many times an effect iterates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IterationCount {
    /// Iterate a specific, possibly fractional, number of times.
    Finite(f64),

    /// Iterate indefinitely.
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Finite(1.0)
    }
}

/// Timing validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// A timing value was NaN.
    NotANumber,

    /// End time below zero.
    NegativeEndTime,

    /// Iteration duration below zero.
    NegativeDuration,

    /// Iteration count below zero.
    NegativeIterations,

    /// End time of a finite effect too large to represent.
    EndTimeOverflow,
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::NotANumber => {
                write!(f, "timing values must not be NaN")
            }
            TimingError::NegativeEndTime => {
                write!(f, "end time must be zero or greater")
            }
            TimingError::NegativeDuration => {
                write!(f, "iteration duration must be zero or greater")
            }
            TimingError::NegativeIterations => {
                write!(f, "iteration count must be zero or greater")
            }
            TimingError::EndTimeOverflow => {
                write!(f, "delays and active duration overflow the end time")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}
