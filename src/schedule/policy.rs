//! Repetition schedule types and configuration.

use std::time::Duration;

use crate::schedule::error::ScheduleError;

/// A repetition policy: how many times to repeat, and how long to wait.
///
/// A schedule is pure data. It never sleeps or runs anything itself; the
/// repeat runners in [`crate::effect::repeat`] ask it for the delay before
/// each repetition and stop when it answers `None`.
///
/// Repetition `k` is the `(k + 1)`-th run after the first one, so
/// `recurs(2)` allows three runs in total.
///
/// # Examples
///
/// ```rust
/// use eddy::Schedule;
/// use std::time::Duration;
///
/// // Repeat at most twice, waiting 100ms between runs
/// let policy = Schedule::recurs(2).add_delay(Duration::from_millis(100));
///
/// assert_eq!(policy.delay_for_repetition(0), Some(Duration::from_millis(100)));
/// assert_eq!(policy.delay_for_repetition(1), Some(Duration::from_millis(100)));
/// assert_eq!(policy.delay_for_repetition(2), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    strategy: DelayStrategy,
    added_delay: Duration,
    max_recurrences: Option<u32>,
    max_delay: Option<Duration>,
    jitter: JitterStrategy,
}

/// How the delay grows from one repetition to the next.
#[derive(Debug, Clone, PartialEq)]
pub enum DelayStrategy {
    /// No delay of its own; only delays added with `add_delay` apply.
    None,
    /// The same delay before every repetition.
    Fixed(Duration),
    /// Delay increases linearly: base * (k + 1).
    Linear {
        /// Base delay duration.
        base: Duration,
    },
    /// Delay doubles: base * 2^k.
    Exponential {
        /// Base delay duration.
        base: Duration,
    },
    /// Delay follows the Fibonacci sequence: base * fib(k + 1).
    Fibonacci {
        /// Base delay duration.
        base: Duration,
    },
}

/// Randomness applied to delays.
///
/// Only takes effect with the `jitter` feature; without it every strategy
/// returns the base delay unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JitterStrategy {
    /// No jitter applied.
    #[default]
    None,
    /// Add ±factor randomness to the delay.
    Proportional(f64),
    /// Random delay between zero and the calculated delay.
    Full,
}

impl Schedule {
    pub(crate) fn with_strategy(strategy: DelayStrategy) -> Self {
        Self {
            strategy,
            added_delay: Duration::ZERO,
            max_recurrences: None,
            max_delay: None,
            jitter: JitterStrategy::None,
        }
    }

    /// Repeat up to `n` times after the first run, with no delay.
    ///
    /// ```rust
    /// use eddy::Schedule;
    /// use std::time::Duration;
    ///
    /// let policy = Schedule::recurs(1);
    /// assert_eq!(policy.delay_for_repetition(0), Some(Duration::ZERO));
    /// assert_eq!(policy.delay_for_repetition(1), None);
    /// ```
    pub fn recurs(n: u32) -> Self {
        Self::with_strategy(DelayStrategy::None).with_max_recurrences(n)
    }

    /// Repeat with a fixed delay between runs.
    ///
    /// Unbounded until `with_max_recurrences` is set.
    pub fn spaced(delay: Duration) -> Self {
        Self::with_strategy(DelayStrategy::Fixed(delay))
    }

    /// Repeat with a linearly increasing delay: base, 2*base, 3*base, ...
    ///
    /// ```rust
    /// use eddy::Schedule;
    /// use std::time::Duration;
    ///
    /// let policy = Schedule::linear(Duration::from_millis(100)).with_max_recurrences(5);
    /// assert_eq!(policy.delay_for_repetition(0), Some(Duration::from_millis(100)));
    /// assert_eq!(policy.delay_for_repetition(2), Some(Duration::from_millis(300)));
    /// ```
    pub fn linear(base: Duration) -> Self {
        Self::with_strategy(DelayStrategy::Linear { base })
    }

    /// Repeat with a doubling delay: base, 2*base, 4*base, ...
    ///
    /// ```rust
    /// use eddy::Schedule;
    /// use std::time::Duration;
    ///
    /// let policy = Schedule::exponential(Duration::from_millis(100)).with_max_recurrences(3);
    /// assert_eq!(policy.delay_for_repetition(1), Some(Duration::from_millis(200)));
    /// assert_eq!(policy.delay_for_repetition(2), Some(Duration::from_millis(400)));
    /// assert_eq!(policy.delay_for_repetition(3), None);
    /// ```
    pub fn exponential(base: Duration) -> Self {
        Self::with_strategy(DelayStrategy::Exponential { base })
    }

    /// Repeat with a Fibonacci delay: base, base, 2*base, 3*base, 5*base, ...
    pub fn fibonacci(base: Duration) -> Self {
        Self::with_strategy(DelayStrategy::Fibonacci { base })
    }

    /// Add a fixed delay before every repetition.
    ///
    /// The delay is added on top of whatever the strategy computes, so
    /// `Schedule::recurs(2).add_delay(d)` waits exactly `d` each time.
    /// Calling it twice adds both delays.
    pub fn add_delay(mut self, delay: Duration) -> Self {
        self.added_delay = self.added_delay.saturating_add(delay);
        self
    }

    /// Set the maximum number of repetitions (not counting the first run).
    pub fn with_max_recurrences(mut self, n: u32) -> Self {
        self.max_recurrences = Some(n);
        self
    }

    /// Cap every delay at `d`, whatever the strategy computes.
    pub fn with_max_delay(mut self, d: Duration) -> Self {
        self.max_delay = Some(d);
        self
    }

    /// Add ±`factor` proportional jitter, clamped to `[0.0, 1.0]`.
    pub fn with_jitter(mut self, factor: f64) -> Self {
        self.jitter = JitterStrategy::Proportional(factor.clamp(0.0, 1.0));
        self
    }

    /// Use full jitter: a random delay between zero and the computed delay.
    pub fn with_full_jitter(mut self) -> Self {
        self.jitter = JitterStrategy::Full;
        self
    }

    /// Get the maximum number of repetitions.
    pub fn max_recurrences(&self) -> Option<u32> {
        self.max_recurrences
    }

    /// Get the maximum delay cap.
    pub fn max_delay(&self) -> Option<Duration> {
        self.max_delay
    }

    /// Get the delay added on top of the strategy.
    pub fn added_delay(&self) -> Duration {
        self.added_delay
    }

    /// Get the delay strategy.
    pub fn strategy(&self) -> &DelayStrategy {
        &self.strategy
    }

    /// Get the jitter strategy.
    pub fn jitter(&self) -> &JitterStrategy {
        &self.jitter
    }

    /// Calculate the delay before repetition `k` (0-indexed), without jitter.
    ///
    /// Returns `None` once the repetition budget is spent.
    pub fn delay_for_repetition(&self, k: u32) -> Option<Duration> {
        if let Some(max) = self.max_recurrences {
            if k >= max {
                return None;
            }
        }

        let base_delay = match &self.strategy {
            DelayStrategy::None => Duration::ZERO,
            DelayStrategy::Fixed(d) => *d,
            DelayStrategy::Linear { base } => base.saturating_mul(k.saturating_add(1)),
            DelayStrategy::Exponential { base } => base.saturating_mul(2u32.saturating_pow(k)),
            DelayStrategy::Fibonacci { base } => {
                base.saturating_mul(fibonacci(k.saturating_add(1)))
            }
        };
        let delay = base_delay.saturating_add(self.added_delay);

        Some(match self.max_delay {
            Some(max) => delay.min(max),
            None => delay,
        })
    }

    /// Calculate the delay before repetition `k` with jitter applied.
    ///
    /// This is what the repeat runners sleep for.
    pub fn next_delay(&self, k: u32) -> Option<Duration> {
        let base_delay = self.delay_for_repetition(k)?;
        Some(self.jitter.apply(base_delay, self.max_delay))
    }

    /// Check that the schedule is bounded.
    ///
    /// Only a repetition limit bounds a schedule. `max_delay` caps each
    /// delay but never ends the run, so an unbounded schedule repeats until
    /// the action fails.
    ///
    /// ```rust
    /// use eddy::{Schedule, ScheduleError};
    /// use std::time::Duration;
    ///
    /// assert!(Schedule::recurs(3).validate().is_ok());
    /// assert_eq!(
    ///     Schedule::spaced(Duration::from_millis(10))
    ///         .with_max_delay(Duration::from_secs(1))
    ///         .validate(),
    ///     Err(ScheduleError::Unbounded)
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.max_recurrences.is_none() {
            Err(ScheduleError::Unbounded)
        } else {
            Ok(())
        }
    }
}

impl JitterStrategy {
    /// Apply jitter to a base delay, then cap it at `max_delay`.
    pub fn apply(&self, base_delay: Duration, max_delay: Option<Duration>) -> Duration {
        let jittered = match self {
            JitterStrategy::None => base_delay,
            #[cfg(feature = "jitter")]
            JitterStrategy::Proportional(factor) => {
                use rand::Rng;
                let base_millis = base_delay.as_millis() as f64;
                let range = base_millis * factor;
                let min = (base_millis - range).max(0.0);
                let max = base_millis + range;
                Duration::from_millis(rand::rng().random_range(min..=max) as u64)
            }
            #[cfg(not(feature = "jitter"))]
            JitterStrategy::Proportional(_) => base_delay,
            #[cfg(feature = "jitter")]
            JitterStrategy::Full => {
                use rand::Rng;
                let max_millis = base_delay.as_millis() as u64;
                if max_millis == 0 {
                    Duration::ZERO
                } else {
                    Duration::from_millis(rand::rng().random_range(0..=max_millis))
                }
            }
            #[cfg(not(feature = "jitter"))]
            JitterStrategy::Full => base_delay,
        };

        match max_delay {
            Some(max) => jittered.min(max),
            None => jittered,
        }
    }
}

fn fibonacci(n: u32) -> u32 {
    if n == 0 {
        return 0;
    }
    let mut a = 0u32;
    let mut b = 1u32;
    for _ in 1..n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    b
}
