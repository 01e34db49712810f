//! EitherOf combinator - folds both outcomes into the success channel.

use std::convert::Infallible;

use crate::effect::trait_def::Effect;
use crate::either::Either;

/// An effect that cannot fail: errors arrive as `Either::Left`.
///
/// Created by [`EffectExt::either`](crate::effect::EffectExt::either).
///
/// # Example
///
/// ```rust
/// use eddy::effect::prelude::*;
/// use eddy::Either;
///
/// # tokio_test::block_on(async {
/// let outcome = fail::<i32, _, ()>("boom").either().execute(&()).await;
/// assert_eq!(outcome, Ok(Either::Left("boom")));
/// # });
/// ```
pub struct EitherOf<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner> std::fmt::Debug for EitherOf<Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EitherOf")
            .field("inner", &"<effect>")
            .finish()
    }
}

impl<Inner> Effect for EitherOf<Inner>
where
    Inner: Effect,
{
    type Output = Either<Inner::Error, Inner::Output>;
    type Error = Infallible;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Infallible> {
        Ok(Either::from_result(self.inner.run(env).await))
    }
}
