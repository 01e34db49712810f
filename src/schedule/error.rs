//! Error types for schedules and repeat runners.

use std::time::Duration;

/// Error returned by [`repeat`](crate::effect::repeat::repeat) when an
/// attempt fails before the schedule is exhausted.
///
/// Carries the failing attempt's error together with how far the run got.
///
/// # Examples
///
/// ```rust
/// use eddy::effect::prelude::*;
/// use eddy::Schedule;
///
/// # tokio_test::block_on(async {
/// let effect = repeat(|| fail::<(), _, ()>("always fails"), Schedule::recurs(3));
///
/// let failure = effect.execute(&()).await.unwrap_err();
/// assert_eq!(failure.error, "always fails");
/// assert_eq!(failure.successes, 0);
/// # });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatFailure<E> {
    /// The error from the failing attempt.
    pub error: E,
    /// Number of attempts that succeeded before the failure.
    pub successes: u32,
    /// Time spent from the first attempt to the failure.
    pub elapsed: Duration,
}

impl<E> RepeatFailure<E> {
    /// Create a new RepeatFailure.
    pub fn new(error: E, successes: u32, elapsed: Duration) -> Self {
        Self {
            error,
            successes,
            elapsed,
        }
    }

    /// Extract the error, discarding metadata.
    pub fn into_error(self) -> E {
        self.error
    }

    /// Get a reference to the error.
    pub fn error(&self) -> &E {
        &self.error
    }
}

impl<E: std::fmt::Display> std::fmt::Display for RepeatFailure<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "repeat failed after {} successful attempts ({:?}): {}",
            self.successes, self.elapsed, self.error
        )
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RepeatFailure<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Error returned when a schedule or its configuration is unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// No repetition limit was set.
    Unbounded,
    /// A jitter factor outside `[0.0, 1.0]`.
    InvalidJitter(f64),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(
                f,
                "schedule has no max_recurrences; max_delay caps each delay but does not end the run"
            ),
            Self::InvalidJitter(factor) => {
                write!(f, "jitter factor {} is outside [0.0, 1.0]", factor)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}
