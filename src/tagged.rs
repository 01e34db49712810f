//! Tagged errors for tag-dispatched recovery.
//!
//! A tag is a stable, static name for a kind of error. It lets
//! [`EffectExt::catch_tag`](crate::effect::EffectExt::catch_tag) pick out
//! one kind of failure and leave the rest alone.
//!
//! ```rust
//! use eddy::Tagged;
//!
//! #[derive(Debug)]
//! struct FooError;
//!
//! impl Tagged for FooError {
//!     fn tag(&self) -> &'static str {
//!         "FooError"
//!     }
//! }
//!
//! assert_eq!(FooError.tag(), "FooError");
//! assert_eq!(Box::new(FooError).tag(), "FooError");
//! ```

/// An error that names its own kind.
pub trait Tagged {
    /// The tag identifying this kind of error.
    fn tag(&self) -> &'static str;
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tag(&self) -> &'static str {
        (**self).tag()
    }
}

impl<T: Tagged + ?Sized> Tagged for Box<T> {
    fn tag(&self) -> &'static str {
        (**self).tag()
    }
}
