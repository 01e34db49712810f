//! Repeat an effect under a [`Schedule`], then hand the outcome to a fallback.
//!
//! Each attempt builds a fresh effect from a factory. This is what "run it
//! again" means for values that are consumed when they run: the factory owns
//! whatever state the attempts share, and nothing else can see it.
//!
//! A run ends in one of two ways:
//!
//! - an attempt fails, which abandons the remaining repetitions at once, or
//! - every attempt the schedule permits succeeds.
//!
//! [`repeat_or_else`] sends both endings to the same fallback, exactly once,
//! as a [`RepeatOutcome`]. [`repeat`] has no fallback and reports them as
//! `Ok(Repeated)` and `Err(RepeatFailure)`.

use std::time::Duration;

use tokio::time::Instant;

use crate::effect::boxed::BoxedEffect;
use crate::effect::constructors::from_async;
use crate::effect::ext::EffectExt;
use crate::effect::trait_def::Effect;
use crate::schedule::{RepeatEvent, RepeatFailure, RepeatOutcome, Repeated, Schedule};

/// Repeat an action under `schedule`, then run `or_else` with the outcome.
///
/// 1. Run a fresh action.
/// 2. On success, if the schedule permits another repetition, sleep for its
///    delay and go back to 1.
/// 3. On failure, stop and call `or_else(RepeatOutcome::Failed { .. })`.
/// 4. Once the schedule is spent, call `or_else(RepeatOutcome::Exhausted { .. })`.
///
/// The fallback runs exactly once per run and its result is the result of
/// the whole effect. Its output type is unrelated to the action's.
///
/// The schedule is not validated here. One without a repetition limit
/// repeats until the action fails; check it with [`Schedule::validate`]
/// first when that matters.
///
/// # Example
///
/// ```rust
/// use eddy::effect::prelude::*;
/// use eddy::Schedule;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # tokio_test::block_on(async {
/// let count = Arc::new(AtomicU32::new(0));
/// let action = move || {
///     let count = count.clone();
///     from_fn(move |_: &()| {
///         if count.load(Ordering::SeqCst) > 1 {
///             Err("failure")
///         } else {
///             count.fetch_add(1, Ordering::SeqCst);
///             Ok("yay!")
///         }
///     })
/// };
///
/// let program = repeat_or_else(
///     action,
///     Schedule::recurs(2).add_delay(Duration::from_millis(1)),
///     |outcome| sync::<_, String, ()>(move || i64::from(outcome.successes()) - 1),
/// );
///
/// assert_eq!(program.execute(&()).await, Ok(1));
/// # });
/// ```
pub fn repeat_or_else<T, E, B, E2, Env, F, Eff, G, Fb>(
    make_action: F,
    schedule: Schedule,
    or_else: G,
) -> BoxedEffect<B, E2, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    B: Send + 'static,
    E2: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    F: FnMut() -> Eff + Send + 'static,
    Eff: Effect<Output = T, Error = E, Env = Env> + 'static,
    G: FnOnce(RepeatOutcome<T, E>) -> Fb + Send + 'static,
    Fb: Effect<Output = B, Error = E2, Env = Env> + 'static,
{
    repeat_or_else_with_hooks(make_action, schedule, or_else, |_: &RepeatEvent<'_, T>| {})
}

/// [`repeat_or_else`] with a hook called before each inter-attempt sleep.
///
/// The hook is synchronous and should not block; use it for logging or
/// metrics.
///
/// ```rust
/// use eddy::effect::prelude::*;
/// use eddy::{RepeatEvent, Schedule};
///
/// # tokio_test::block_on(async {
/// let program = repeat_or_else_with_hooks(
///     || pure::<_, String, ()>("tick"),
///     Schedule::recurs(2),
///     |outcome| pure::<_, String, ()>(outcome.successes()),
///     |event: &RepeatEvent<'_, &str>| {
///         println!("repetition {} after {:?}", event.repetition, event.value);
///     },
/// );
///
/// assert_eq!(program.execute(&()).await, Ok(3));
/// # });
/// ```
pub fn repeat_or_else_with_hooks<T, E, B, E2, Env, F, Eff, G, Fb, H>(
    make_action: F,
    schedule: Schedule,
    or_else: G,
    on_repeat: H,
) -> BoxedEffect<B, E2, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    B: Send + 'static,
    E2: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    F: FnMut() -> Eff + Send + 'static,
    Eff: Effect<Output = T, Error = E, Env = Env> + 'static,
    G: FnOnce(RepeatOutcome<T, E>) -> Fb + Send + 'static,
    Fb: Effect<Output = B, Error = E2, Env = Env> + 'static,
    H: Fn(&RepeatEvent<'_, T>) + Send + Sync + 'static,
{
    from_async(move |env: &Env| {
        let env = env.clone();
        let mut make_action = make_action;
        async move {
            let (outcome, elapsed) = drive(&mut make_action, &schedule, &env, &on_repeat).await;
            tracing::debug!(
                path = outcome.path(),
                successes = outcome.successes(),
                ?elapsed,
                "repetition ended, running fallback"
            );
            or_else(outcome).run(&env).await
        }
    })
    .boxed()
}

/// Repeat an action under `schedule` without a fallback.
///
/// Exhausting the schedule is success and yields the last value; the first
/// failure ends the run with a [`RepeatFailure`]. As with
/// [`repeat_or_else`], a schedule without a repetition limit runs until the
/// action fails.
///
/// ```rust
/// use eddy::effect::prelude::*;
/// use eddy::Schedule;
///
/// # tokio_test::block_on(async {
/// let effect = repeat(|| pure::<_, String, ()>(7), Schedule::recurs(3));
///
/// let repeated = effect.execute(&()).await.unwrap();
/// assert_eq!(repeated.successes, 4);
/// assert_eq!(repeated.into_value(), 7);
/// # });
/// ```
pub fn repeat<T, E, Env, F, Eff>(
    make_action: F,
    schedule: Schedule,
) -> BoxedEffect<Repeated<T>, RepeatFailure<E>, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    F: FnMut() -> Eff + Send + 'static,
    Eff: Effect<Output = T, Error = E, Env = Env> + 'static,
{
    from_async(move |env: &Env| {
        let env = env.clone();
        let mut make_action = make_action;
        async move {
            let no_hook = |_: &RepeatEvent<'_, T>| {};
            let (outcome, elapsed) = drive(&mut make_action, &schedule, &env, &no_hook).await;
            match outcome {
                RepeatOutcome::Exhausted { last, successes } => Ok(Repeated {
                    value: last,
                    successes,
                    elapsed,
                }),
                RepeatOutcome::Failed { error, successes } => {
                    Err(RepeatFailure::new(error, successes, elapsed))
                }
            }
        }
    })
    .boxed()
}

async fn drive<T, E, Env, F, Eff, H>(
    make_action: &mut F,
    schedule: &Schedule,
    env: &Env,
    on_repeat: &H,
) -> (RepeatOutcome<T, E>, Duration)
where
    F: FnMut() -> Eff,
    Eff: Effect<Output = T, Error = E, Env = Env>,
    H: Fn(&RepeatEvent<'_, T>),
{
    let start = Instant::now();
    let mut successes = 0u32;

    loop {
        tracing::trace!(attempt = successes.saturating_add(1), "running attempt");
        match make_action().run(env).await {
            Ok(value) => {
                successes = successes.saturating_add(1);
                match schedule.next_delay(successes - 1) {
                    Some(delay) => {
                        tracing::debug!(successes, ?delay, "attempt succeeded, repeating");
                        on_repeat(&RepeatEvent {
                            repetition: successes,
                            value: &value,
                            next_delay: delay,
                            elapsed: start.elapsed(),
                        });
                        drop(value);
                        tokio::time::sleep(delay).await;
                    }
                    None => {
                        tracing::debug!(successes, "schedule exhausted");
                        let outcome = RepeatOutcome::Exhausted {
                            last: value,
                            successes,
                        };
                        return (outcome, start.elapsed());
                    }
                }
            }
            Err(error) => {
                tracing::debug!(successes, "attempt failed, abandoning repetitions");
                return (RepeatOutcome::Failed { error, successes }, start.elapsed());
            }
        }
    }
}
