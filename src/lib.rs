//! # Eddy
//!
//! > *Water that circles back before it moves on.*
//!
//! A Rust library for composing deferred effects and repeating them on a
//! schedule, with a fallback when the repetition ends.
//!
//! ## Philosophy
//!
//! Policies are pure data and runners are imperative:
//! - A [`Schedule`] only describes how many times to go around again and how
//!   long to wait in between.
//! - An [`Effect`] is a description of work. Nothing happens until it is run.
//! - [`repeat_or_else`](effect::repeat_or_else) interprets the two together.
//!
//! ## Quick Example
//!
//! ```rust
//! use eddy::prelude::*;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let count = Arc::new(AtomicU32::new(0));
//!
//! // Succeeds twice, then fails
//! let action = move || {
//!     let count = count.clone();
//!     from_fn(move |_: &()| {
//!         if count.load(Ordering::SeqCst) > 1 {
//!             Err("failure")
//!         } else {
//!             count.fetch_add(1, Ordering::SeqCst);
//!             Ok("yay!")
//!         }
//!     })
//!     .boxed()
//! };
//!
//! let program = repeat_or_else(
//!     action,
//!     Schedule::recurs(2).add_delay(Duration::from_millis(1)),
//!     |outcome| sync::<_, &str, ()>(move || i64::from(outcome.successes()) - 1),
//! );
//!
//! assert_eq!(program.run_standalone().await, Ok(1));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chunk;
pub mod effect;
pub mod either;
pub mod schedule;
pub mod tagged;
pub mod testing;

// Re-exports
pub use chunk::{Chunk, NonEmptyChunk};
pub use effect::{BoxedEffect, Effect, EffectExt, RunStandalone};
pub use either::Either;
#[cfg(feature = "serde")]
pub use schedule::{ScheduleConfig, StrategyKind};
pub use schedule::{
    DelayStrategy, JitterStrategy, RepeatEvent, RepeatFailure, RepeatOutcome, Repeated, Schedule,
    ScheduleError,
};
pub use tagged::Tagged;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chunk::{Chunk, NonEmptyChunk};
    pub use crate::effect::prelude::*;
    pub use crate::either::Either;
    pub use crate::schedule::{RepeatEvent, RepeatFailure, RepeatOutcome, Repeated, Schedule};
    pub use crate::tagged::Tagged;
}
