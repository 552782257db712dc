use std::error::Error as StdError;

use thiserror::Error;

use crate::Kind;

/// Errors that can occur when invoking a [`Callable`](crate::Callable).
#[derive(Debug, Error)]
pub enum CallError {
    /// The number of arguments does not fit the signature.
    #[error("expected {expected} arguments, received {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    /// An argument has a different kind than its parameter.
    #[error("argument {index} must be `{expected}`, received `{actual}`")]
    ArgumentKind {
        index: usize,
        expected: Kind,
        actual: Kind,
    },

    /// The callable itself failed.
    #[error("callable failed")]
    Failed(#[source] Box<dyn StdError + Send + Sync>),
}

impl CallError {
    /// Wraps an arbitrary error raised by a hand-written callable.
    pub fn failed<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Self::Failed(Box::new(error))
    }
}
