//! Logging effects and span instrumentation.
//!
//! Log effects emit a `tracing` event when they run, so a log line lands in
//! program order with the surrounding effects rather than at construction
//! time. Installing a subscriber is left to the binary.
//!
//! ```rust
//! use eddy::effect::prelude::*;
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let task = sleep::<String, ()>(Duration::from_millis(1))
//!     .and_then(|_| log_debug("task done"));
//!
//! let program = log::<String, ()>("start")
//!     .and_then(|_| task)
//!     .and_then(|_| log("done"));
//!
//! assert_eq!(program.execute(&()).await, Ok(()));
//! # });
//! ```

use std::marker::PhantomData;

use tracing::Level;

use crate::effect::trait_def::Effect;

/// An effect that emits one `tracing` event when run.
///
/// Created by [`log`], [`log_debug`], [`log_warning`], [`log_error`] and
/// [`log_at`].
#[derive(Debug, Clone)]
pub struct Log<E, Env> {
    level: Level,
    message: String,
    _phantom: PhantomData<fn() -> (E, Env)>,
}

impl<E, Env> Log<E, Env> {
    /// Create a log effect at the given level.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Log {
            level,
            message: message.into(),
            _phantom: PhantomData,
        }
    }

    /// The level the event is emitted at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The message carried by the event.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<E, Env> Effect for Log<E, Env>
where
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = ();
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Env) -> Result<(), E> {
        let message = self.message;
        if self.level == Level::ERROR {
            tracing::error!("{}", message);
        } else if self.level == Level::WARN {
            tracing::warn!("{}", message);
        } else if self.level == Level::INFO {
            tracing::info!("{}", message);
        } else if self.level == Level::DEBUG {
            tracing::debug!("{}", message);
        } else {
            tracing::trace!("{}", message);
        }
        Ok(())
    }
}

/// Log a message at info level.
pub fn log<E, Env>(message: impl Into<String>) -> Log<E, Env> {
    Log::new(Level::INFO, message)
}

/// Log a message at debug level.
pub fn log_debug<E, Env>(message: impl Into<String>) -> Log<E, Env> {
    Log::new(Level::DEBUG, message)
}

/// Log a message at warn level.
pub fn log_warning<E, Env>(message: impl Into<String>) -> Log<E, Env> {
    Log::new(Level::WARN, message)
}

/// Log a message at error level.
pub fn log_error<E, Env>(message: impl Into<String>) -> Log<E, Env> {
    Log::new(Level::ERROR, message)
}

/// Log a message at an explicit level.
pub fn log_at<E, Env>(level: Level, message: impl Into<String>) -> Log<E, Env> {
    Log::new(level, message)
}

/// An effect wrapped in a tracing span.
///
/// Created by [`EffectTracingExt::instrument`].
#[derive(Debug)]
pub struct Instrument<E> {
    pub(crate) inner: E,
    pub(crate) span: tracing::Span,
}

impl<E> Effect for Instrument<E>
where
    E: Effect,
{
    type Output = E::Output;
    type Error = E::Error;
    type Env = E::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.run(env).instrument(self.span).await
    }
}

/// Adds span instrumentation to effects.
pub trait EffectTracingExt: Effect {
    /// Run this effect inside `span`.
    ///
    /// The span is entered each time the effect is polled and closed when
    /// it completes.
    ///
    /// ```rust
    /// use eddy::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = pure::<_, String, ()>(42).instrument(tracing::info_span!("answer"));
    /// assert_eq!(effect.execute(&()).await, Ok(42));
    /// # });
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<E: Effect> EffectTracingExt for E {}
