//! Tap combinator - perform a side effect and keep the original value.

use crate::effect::trait_def::Effect;

/// Runs a side effect on the success value and returns that value.
///
/// Created by [`EffectExt::tap`](crate::effect::EffectExt::tap).
pub struct Tap<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Tap<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tap")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for Tap<Inner, F>
where
    Inner: Effect,
    E2: Effect<Output = (), Error = Inner::Error, Env = Inner::Env>,
    F: FnOnce(&Inner::Output) -> E2 + Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env).await?;
        (self.f)(&value).run(env).await?;
        Ok(value)
    }
}
