//! Error types for the interaction core.
//!
//! Nothing in this crate is fatal: malformed event sequences are ignored and
//! failed refresh tasks only reset controller state. The error type exists
//! for the one seam where caller code can fail - the asynchronous refresh
//! task supplied to pull-to-refresh. The controller catches and logs it; it
//! is never re-thrown from the core.

use thiserror::Error;

/// Errors surfaced by caller-supplied collaborators.
#[derive(Debug, Clone, Error)]
pub enum InputError {
    /// The caller's refresh task failed. Caught by the pull-to-refresh
    /// controller, which resets to idle; surfacing the failure to the user
    /// is the embedder's job.
    #[error("refresh task failed: {0}")]
    Refresh(String),
}

impl InputError {
    /// Wraps an arbitrary error message from a refresh task.
    pub fn refresh(msg: impl Into<String>) -> Self {
        InputError::Refresh(msg.into())
    }
}

/// Type alias for Results using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
