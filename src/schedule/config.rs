//! Schedules as configuration (feature-gated).
//!
//! With the `serde` feature a [`ScheduleConfig`] can be read from any serde
//! format and turned into a validated [`Schedule`].
//!
//! ```rust
//! use eddy::{Schedule, ScheduleConfig};
//! use std::time::Duration;
//!
//! let config: ScheduleConfig =
//!     serde_json::from_str(r#"{"max_recurrences": 2, "delay_ms": 100}"#).unwrap();
//! let schedule = Schedule::try_from(config).unwrap();
//!
//! assert_eq!(schedule, Schedule::recurs(2).add_delay(Duration::from_millis(100)));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::schedule::error::ScheduleError;
use crate::schedule::policy::{DelayStrategy, Schedule};

/// Which delay strategy a configured schedule uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// `delay_ms` is added to every repetition and nothing else.
    #[default]
    None,
    /// `delay_ms` as a fixed spacing.
    Fixed,
    /// `delay_ms` as the base of a linear backoff.
    Linear,
    /// `delay_ms` as the base of an exponential backoff.
    Exponential,
    /// `delay_ms` as the base of a Fibonacci backoff.
    Fibonacci,
}

/// Plain-data description of a [`Schedule`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Delay strategy.
    #[serde(default)]
    pub strategy: StrategyKind,
    /// Delay (or base delay) in milliseconds.
    #[serde(default)]
    pub delay_ms: u64,
    /// Maximum number of repetitions after the first run.
    #[serde(default)]
    pub max_recurrences: Option<u32>,
    /// Cap on any single delay, in milliseconds.
    #[serde(default)]
    pub max_delay_ms: Option<u64>,
    /// Proportional jitter factor in `[0.0, 1.0]`.
    #[serde(default)]
    pub jitter: Option<f64>,
}

impl TryFrom<ScheduleConfig> for Schedule {
    type Error = ScheduleError;

    fn try_from(config: ScheduleConfig) -> Result<Self, Self::Error> {
        let delay = Duration::from_millis(config.delay_ms);
        let mut schedule = match config.strategy {
            StrategyKind::None => Schedule::with_strategy(DelayStrategy::None).add_delay(delay),
            StrategyKind::Fixed => Schedule::spaced(delay),
            StrategyKind::Linear => Schedule::linear(delay),
            StrategyKind::Exponential => Schedule::exponential(delay),
            StrategyKind::Fibonacci => Schedule::fibonacci(delay),
        };

        if let Some(n) = config.max_recurrences {
            schedule = schedule.with_max_recurrences(n);
        }
        if let Some(ms) = config.max_delay_ms {
            schedule = schedule.with_max_delay(Duration::from_millis(ms));
        }
        if let Some(factor) = config.jitter {
            if !(0.0..=1.0).contains(&factor) {
                return Err(ScheduleError::InvalidJitter(factor));
            }
            schedule = schedule.with_jitter(factor);
        }

        schedule.validate()?;
        Ok(schedule)
    }
}
