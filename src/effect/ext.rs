//! Extension traits providing combinator methods for all effects.
//!
//! `EffectExt` is implemented for every type that implements `Effect`.
//! Combinators only describe work; nothing runs until the result is
//! awaited through [`EffectExt::execute`] or [`Effect::run`].

use crate::effect::boxed::BoxedEffect;
use crate::effect::combinators::{AndThen, CatchTag, EitherOf, Map, MapErr, OrElse, Tap};
use crate::effect::trait_def::Effect;
use crate::tagged::Tagged;

/// Extension trait providing combinator methods for all effects.
///
/// # Example
///
/// ```rust
/// use eddy::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = pure::<_, String, ()>(21)
///     .map(|x| x * 2)
///     .and_then(|x| pure(x + 1))
///     .map_err(|e| format!("Error: {}", e));
///
/// assert_eq!(effect.execute(&()).await, Ok(43));
/// # });
/// ```
pub trait EffectExt: Effect {
    /// Transform the success value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U + Send,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the error value.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnOnce(Self::Error) -> E2 + Send,
        E2: Send,
    {
        MapErr { inner: self, f }
    }

    /// Chain a dependent effect.
    ///
    /// The chained effect must share the error type; use `map_err` first
    /// when it does not.
    fn and_then<E2, F>(self, f: F) -> AndThen<Self, F>
    where
        E2: Effect<Error = Self::Error, Env = Self::Env>,
        F: FnOnce(Self::Output) -> E2 + Send,
    {
        AndThen { inner: self, f }
    }

    /// Recover from any error by running another effect.
    ///
    /// ```rust
    /// use eddy::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = fail::<i32, _, ()>("error").or_else(|_| pure::<_, String, ()>(42));
    /// assert_eq!(effect.execute(&()).await, Ok(42));
    /// # });
    /// ```
    fn or_else<E2, F>(self, f: F) -> OrElse<Self, F>
    where
        E2: Effect<Output = Self::Output, Env = Self::Env>,
        F: FnOnce(Self::Error) -> E2 + Send,
    {
        OrElse { inner: self, f }
    }

    /// Run a side effect on success and keep the original value.
    ///
    /// The side effect's own failure fails the whole effect.
    fn tap<E2, F>(self, f: F) -> Tap<Self, F>
    where
        E2: Effect<Output = (), Error = Self::Error, Env = Self::Env>,
        F: FnOnce(&Self::Output) -> E2 + Send,
    {
        Tap { inner: self, f }
    }

    /// Recover only from errors carrying the given tag.
    ///
    /// Errors with any other tag pass through untouched, so calls can be
    /// chained to handle several tags in turn.
    ///
    /// ```rust
    /// use eddy::effect::prelude::*;
    /// use eddy::Tagged;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum ProgramError { Foo, Bar }
    ///
    /// impl Tagged for ProgramError {
    ///     fn tag(&self) -> &'static str {
    ///         match self {
    ///             ProgramError::Foo => "FooError",
    ///             ProgramError::Bar => "BarError",
    ///         }
    ///     }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let recovered = fail::<String, _, ()>(ProgramError::Bar)
    ///     .catch_tag("FooError", |_| pure("Recovering from FooError".to_string()))
    ///     .catch_tag("BarError", |_| pure("Recovering from BarError".to_string()));
    ///
    /// assert_eq!(recovered.execute(&()).await, Ok("Recovering from BarError".to_string()));
    /// # });
    /// ```
    fn catch_tag<E2, F>(self, tag: &'static str, f: F) -> CatchTag<Self, F>
    where
        Self::Error: Tagged,
        E2: Effect<Output = Self::Output, Error = Self::Error, Env = Self::Env>,
        F: FnOnce(Self::Error) -> E2 + Send,
    {
        CatchTag { inner: self, tag, f }
    }

    /// Move both outcomes into the success channel.
    ///
    /// Failures become `Either::Left`, successes `Either::Right`, and the
    /// resulting effect can no longer fail.
    fn either(self) -> EitherOf<Self> {
        EitherOf { inner: self }
    }

    /// Convert to a boxed effect for type erasure.
    fn boxed(self) -> BoxedEffect<Self::Output, Self::Error, Self::Env>
    where
        Self: 'static,
    {
        BoxedEffect::new(self)
    }

    /// Run and await the effect.
    #[allow(async_fn_in_trait)]
    async fn execute(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.run(env).await
    }
}

impl<E: Effect> EffectExt for E {}

/// Run effects that need no environment.
pub trait RunStandalone: Effect<Env = ()> {
    /// Run an effect with the unit environment.
    #[allow(async_fn_in_trait)]
    async fn run_standalone(self) -> Result<Self::Output, Self::Error>;
}

impl<E: Effect<Env = ()>> RunStandalone for E {
    async fn run_standalone(self) -> Result<Self::Output, Self::Error> {
        self.run(&()).await
    }
}
