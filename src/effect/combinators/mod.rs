//! Combinator types for effect composition.
//!
//! These are the concrete types returned by the methods on `EffectExt` and
//! by the constructors. They do not allocate; most code sees them only
//! behind `impl Effect<...>`.

mod and_then;
mod catch_tag;
mod either;
mod fail;
mod from_async;
mod from_fn;
mod from_result;
mod map;
mod map_err;
mod or_else;
mod pure;
mod tap;

pub use and_then::AndThen;
pub use catch_tag::CatchTag;
pub use either::EitherOf;
pub use fail::Fail;
pub use from_async::FromAsync;
pub use from_fn::FromFn;
pub use from_result::FromResult;
pub use map::Map;
pub use map_err::MapErr;
pub use or_else::OrElse;
pub use pure::Pure;
pub use tap::Tap;
