//! Effect trait definition - the core abstraction for deferred computations.
//!
//! An effect is a description of work. Building one does nothing; the work
//! happens only when [`Effect::run`] is awaited with an environment. Repeat
//! runners rely on this: the same action can be described once and driven
//! several times through a factory.

use std::future::Future;

/// A deferred computation that may fail.
///
/// # Type Parameters
///
/// * `Output` - The success type produced by this effect
/// * `Error` - The error type that may be produced
/// * `Env` - The environment required to run this effect (`()` when none)
///
/// Effects are consumed when run. To run "the same" effect again, build a
/// fresh one, usually from a factory closure.
///
/// # Example
///
/// ```rust
/// use eddy::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = pure::<_, String, ()>(21).map(|x| x * 2);
/// assert_eq!(effect.execute(&()).await, Ok(42));
/// # });
/// ```
pub trait Effect: Sized + Send {
    /// The success type produced by this effect.
    type Output: Send;

    /// The error type that may be produced.
    type Error: Send;

    /// The environment type required to run this effect.
    ///
    /// Must be `Clone` so boxed effects can own a copy.
    type Env: Clone + Send + Sync;

    /// Execute this effect with the given environment.
    fn run(self, env: &Self::Env)
        -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
