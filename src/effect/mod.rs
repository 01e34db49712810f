//! Deferred computations and the combinators that compose them.
//!
//! An effect is built first and run later. Combinators return concrete
//! types, so composing effects allocates nothing; `.boxed()` erases the type
//! when a collection, recursion or the repeat runners need it.
//!
//! ```rust
//! use eddy::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = pure::<_, String, ()>(42)
//!     .map(|x| x + 1)
//!     .and_then(|x| pure(x * 2))
//!     .map(|x| x.to_string());
//!
//! assert_eq!(effect.execute(&()).await, Ok("86".to_string()));
//! # });
//! ```
//!
//! # Environment
//!
//! `Env` carries dependencies and must be `Clone`; boxed effects clone it
//! into their future. Effects that need nothing use `()` and can be run with
//! [`RunStandalone::run_standalone`].

pub mod boxed;
pub mod combinators;
pub mod constructors;
pub mod ext;
pub mod logging;
pub mod prelude;
pub mod repeat;
mod trait_def;

pub use trait_def::Effect;

pub use ext::{EffectExt, RunStandalone};

pub use boxed::BoxedEffect;

pub use combinators::{
    AndThen, CatchTag, EitherOf, Fail, FromAsync, FromFn, FromResult, Map, MapErr, OrElse, Pure,
    Tap,
};

pub use constructors::{fail, from_async, from_fn, from_result, pure, sleep, sync};

pub use logging::{
    log, log_at, log_debug, log_error, log_warning, EffectTracingExt, Instrument, Log,
};

pub use repeat::{repeat, repeat_or_else, repeat_or_else_with_hooks};

#[cfg(test)]
mod tests;
