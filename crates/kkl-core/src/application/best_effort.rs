//! Steps whose failure is deliberately ignored.
//!
//! Cleanup before a fetch, removing the template's history, or reading the
//! committer identity may fail without affecting the outcome: a later step
//! fails loudly if the environment is truly unusable. Routing those results
//! through [`BestEffort`] keeps the discard visible and leaves a debug trace.

use tracing::debug;

use crate::error::ScaffoldResult;

pub trait BestEffort<T> {
    /// Keep the value on success; log the error at debug level and return
    /// `None` on failure.
    fn best_effort(self, step: &'static str) -> Option<T>;
}

impl<T> BestEffort<T> for ScaffoldResult<T> {
    fn best_effort(self, step: &'static str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                debug!(step, %error, "Best-effort step failed, continuing");
                None
            }
        }
    }
}
