//! Prelude module for convenient imports.
//!
//! ```rust
//! use eddy::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = pure::<_, String, ()>(42).map(|x| x * 2);
//! assert_eq!(effect.run_standalone().await, Ok(84));
//! # });
//! ```

// Traits
pub use crate::effect::ext::{EffectExt, RunStandalone};
pub use crate::effect::logging::EffectTracingExt;
pub use crate::effect::trait_def::Effect;

// Boxed Effect
pub use crate::effect::boxed::BoxedEffect;

// Constructors
pub use crate::effect::constructors::{fail, from_async, from_fn, from_result, pure, sleep, sync};

// Logging
pub use crate::effect::logging::{log, log_at, log_debug, log_error, log_warning};

// Repetition
pub use crate::effect::repeat::{repeat, repeat_or_else, repeat_or_else_with_hooks};
