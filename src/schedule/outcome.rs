//! What a repeat run ends with, and what hooks observe along the way.

use std::time::Duration;

/// How a repeat run ended, handed to the fallback.
///
/// Failure and exhaustion both end in the fallback; this value tells them
/// apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatOutcome<T, E> {
    /// An attempt failed; remaining repetitions were abandoned.
    Failed {
        /// The error from the failing attempt.
        error: E,
        /// Number of attempts that succeeded before it.
        successes: u32,
    },
    /// Every permitted attempt succeeded.
    Exhausted {
        /// The value from the last attempt.
        last: T,
        /// Number of attempts, all successful.
        successes: u32,
    },
}

impl<T, E> RepeatOutcome<T, E> {
    /// Number of successful attempts, whichever way the run ended.
    pub fn successes(&self) -> u32 {
        match self {
            Self::Failed { successes, .. } | Self::Exhausted { successes, .. } => *successes,
        }
    }

    /// Returns true if an attempt failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns true if the schedule ran out without a failure.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// The failing attempt's error, if any.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failed { error, .. } => Some(error),
            Self::Exhausted { .. } => None,
        }
    }

    /// The last successful value, if the run was exhausted.
    pub fn into_last(self) -> Option<T> {
        match self {
            Self::Exhausted { last, .. } => Some(last),
            Self::Failed { .. } => None,
        }
    }

    pub(crate) fn path(&self) -> &'static str {
        match self {
            Self::Failed { .. } => "failed",
            Self::Exhausted { .. } => "exhausted",
        }
    }
}

/// Information about an upcoming repetition, passed to hooks.
#[derive(Debug, Clone)]
pub struct RepeatEvent<'a, T> {
    /// Which repetition is about to run (1-indexed).
    pub repetition: u32,
    /// The value produced by the attempt that just succeeded.
    pub value: &'a T,
    /// How long the runner will sleep before the repetition.
    pub next_delay: Duration,
    /// Total elapsed time since the first attempt.
    pub elapsed: Duration,
}

/// Result of [`repeat`](crate::effect::repeat::repeat) when the schedule is
/// exhausted without failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeated<T> {
    /// The value from the last attempt.
    pub value: T,
    /// Number of attempts made, all successful.
    pub successes: u32,
    /// Time spent across all attempts and delays.
    pub elapsed: Duration,
}

impl<T> Repeated<T> {
    /// Extract the last value, discarding metadata.
    pub fn into_value(self) -> T {
        self.value
    }
}
