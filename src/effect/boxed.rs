//! BoxedEffect - type-erased effect for opt-in boxing.
//!
//! Repeat runners return `BoxedEffect` because their loop cannot be
//! expressed as a fixed combinator type. Boxing clones the environment so
//! the boxed future can be `'static`.

use std::future::Future;
use std::marker::PhantomData;

use futures::future::BoxFuture;

use crate::effect::trait_def::Effect;

/// A type-erased effect.
///
/// Use it to store different effect types in one collection, return
/// different effects from match arms, or build recursive effects.
///
/// # Example
///
/// ```rust
/// use eddy::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effects: Vec<BoxedEffect<i32, String, ()>> = vec![
///     pure(1).boxed(),
///     pure(2).map(|x| x * 2).boxed(),
/// ];
///
/// let mut total = 0;
/// for effect in effects {
///     total += effect.execute(&()).await.unwrap();
/// }
/// assert_eq!(total, 5);
/// # });
/// ```
pub struct BoxedEffect<T, E, Env> {
    run_fn: Box<dyn FnOnce(Env) -> BoxFuture<'static, Result<T, E>> + Send>,
    _phantom: PhantomData<Env>,
}

impl<T, E, Env> std::fmt::Debug for BoxedEffect<T, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedEffect")
            .field("run_fn", &"<function>")
            .finish()
    }
}

impl<T, E, Env> BoxedEffect<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Box any effect. The environment is cloned when the effect runs.
    pub fn new<Eff>(effect: Eff) -> Self
    where
        Eff: Effect<Output = T, Error = E, Env = Env> + 'static,
    {
        BoxedEffect {
            run_fn: Box::new(move |env: Env| Box::pin(async move { effect.run(&env).await })),
            _phantom: PhantomData,
        }
    }
}

impl<T, E, Env> Effect for BoxedEffect<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    fn run(self, env: &Env) -> impl Future<Output = Result<T, E>> + Send {
        (self.run_fn)(env.clone())
    }
}
