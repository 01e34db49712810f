//! Constructor functions for creating effects.
//!
//! These build effects without naming the combinator types directly.

use std::future::Future;
use std::time::Duration;

use crate::effect::combinators::{Fail, FromAsync, FromFn, FromResult, Pure};
use crate::effect::trait_def::Effect;

/// Create an effect that succeeds with the given value.
///
/// ```rust
/// use eddy::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = pure::<_, String, ()>(42);
/// assert_eq!(effect.execute(&()).await, Ok(42));
/// # });
/// ```
pub fn pure<T, E, Env>(value: T) -> Pure<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Pure::new(value)
}

/// Create an effect that fails with the given error.
pub fn fail<T, E, Env>(error: E) -> Fail<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Fail::new(error)
}

/// Create an effect from a `Result`.
pub fn from_result<T, E, Env>(result: Result<T, E>) -> FromResult<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromResult::new(result)
}

/// Create an effect from a synchronous function of the environment.
pub fn from_fn<T, E, Env, F>(f: F) -> FromFn<F, Env>
where
    F: FnOnce(&Env) -> Result<T, E> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromFn::new(f)
}

/// Create an effect from an async function of the environment.
///
/// ```rust
/// use eddy::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = from_async(|_: &()| async { Ok::<_, String>(42) });
/// assert_eq!(effect.execute(&()).await, Ok(42));
/// # });
/// ```
pub fn from_async<T, E, Env, F, Fut>(f: F) -> FromAsync<F, Env>
where
    F: FnOnce(&Env) -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromAsync::new(f)
}

/// Create an effect from an infallible thunk.
///
/// The thunk runs when the effect runs, not when it is built.
///
/// ```rust
/// use eddy::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = sync::<_, String, ()>(|| 40 + 2);
/// assert_eq!(effect.execute(&()).await, Ok(42));
/// # });
/// ```
pub fn sync<T, E, Env>(
    f: impl FnOnce() -> T + Send,
) -> impl Effect<Output = T, Error = E, Env = Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromFn::new(move |_: &Env| Ok::<T, E>(f()))
}

/// Create an effect that suspends for `duration` without blocking the thread.
pub fn sleep<E, Env>(duration: Duration) -> impl Effect<Output = (), Error = E, Env = Env>
where
    E: Send,
    Env: Clone + Send + Sync,
{
    FromAsync::new(move |_: &Env| async move {
        tokio::time::sleep(duration).await;
        Ok::<(), E>(())
    })
}
