//! Testing utilities for effect programs
//!
//! Effects are usually observed through the side effects they perform. This
//! module provides [`TraceLog`], a cloneable recorder that actions can write
//! to, and [`assert_trace!`](crate::assert_trace) for comparing what was
//! recorded against an expected sequence.
//!
//! # Examples
//!
//! ```rust
//! use eddy::prelude::*;
//! use eddy::testing::TraceLog;
//! use eddy::assert_trace;
//!
//! # tokio_test::block_on(async {
//! let trace = TraceLog::new();
//! let recorder = trace.clone();
//!
//! let effect = sync::<_, String, ()>(move || recorder.record("ran"));
//! assert_trace!(trace, []);
//!
//! effect.run_standalone().await.unwrap();
//! assert_trace!(trace, ["ran"]);
//! # });
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

/// A thread-safe, cloneable list of recorded lines.
///
/// Clones share the same underlying buffer, so a clone can be moved into an
/// effect while the original is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl TraceLog {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn record(&self, line: impl Into<String>) {
        self.guard().push(line.into());
    }

    /// Snapshot of everything recorded so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Drop all recorded lines.
    pub fn clear(&self) {
        self.guard().clear();
    }

    // A panic while recording leaves the buffer intact, so poisoning is ignored.
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Assert that a [`TraceLog`] holds exactly the given lines, in order.
///
/// # Example
///
/// ```rust
/// use eddy::assert_trace;
/// use eddy::testing::TraceLog;
///
/// let trace = TraceLog::new();
/// trace.record("success");
/// trace.record("orElse");
/// assert_trace!(trace, ["success", "orElse"]);
/// ```
#[macro_export]
macro_rules! assert_trace {
    ($trace:expr, [$($line:expr),* $(,)?]) => {{
        let actual: ::std::vec::Vec<::std::string::String> = $trace.lines();
        let expected: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::String::from($line)),*];
        assert_eq!(actual, expected, "unexpected trace");
    }};
}
