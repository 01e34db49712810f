//! Repetition schedules for effect-based computations.
//!
//! A [`Schedule`] is pure data: it says how many times an action may run
//! again and how long to wait in between. The runners in
//! [`crate::effect::repeat`] interpret it.
//!
//! # Quick Start
//!
//! ```rust
//! use eddy::Schedule;
//! use std::time::Duration;
//!
//! // Up to 2 repetitions after the first run, 100ms apart
//! let policy = Schedule::recurs(2).add_delay(Duration::from_millis(100));
//! assert_eq!(policy.max_recurrences(), Some(2));
//! ```
//!
//! # Strategies
//!
//! - **recurs**: no delay of its own
//! - **spaced**: fixed delay
//! - **linear**: 100ms, 200ms, 300ms, ...
//! - **exponential**: 100ms, 200ms, 400ms, ...
//! - **fibonacci**: 100ms, 100ms, 200ms, 300ms, 500ms, ...
//!
//! Jitter is available behind the `jitter` feature, and [`ScheduleConfig`]
//! behind the `serde` feature.

#[cfg(feature = "serde")]
mod config;
mod error;
mod outcome;
mod policy;

#[cfg(feature = "serde")]
pub use config::{ScheduleConfig, StrategyKind};
pub use error::{RepeatFailure, ScheduleError};
pub use outcome::{RepeatEvent, RepeatOutcome, Repeated};
pub use policy::{DelayStrategy, JitterStrategy, Schedule};
