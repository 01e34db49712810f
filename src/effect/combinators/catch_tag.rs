//! CatchTag combinator - recovers from errors with a matching tag.

use crate::effect::trait_def::Effect;
use crate::tagged::Tagged;

/// Recovers from errors whose [`Tagged::tag`] equals `tag`.
///
/// Other errors propagate unchanged. The handler is only called for a
/// match, so no clone of the error is needed.
pub struct CatchTag<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) tag: &'static str,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for CatchTag<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatchTag")
            .field("inner", &"<effect>")
            .field("tag", &self.tag)
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for CatchTag<Inner, F>
where
    Inner: Effect,
    Inner::Error: Tagged,
    E2: Effect<Output = Inner::Output, Error = Inner::Error, Env = Inner::Env>,
    F: FnOnce(Inner::Error) -> E2 + Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        match self.inner.run(env).await {
            Ok(value) => Ok(value),
            Err(error) if error.tag() == self.tag => (self.f)(error).run(env).await,
            Err(error) => Err(error),
        }
    }
}
