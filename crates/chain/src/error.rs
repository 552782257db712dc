use strand_core::CallError;
use thiserror::Error;

/// Errors that can occur while building a [`Chain`](crate::Chain).
///
/// A failed build returns no partial results. The chain itself is unchanged
/// and can be extended and built again.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A callable needs more arguments than the stack holds.
    ///
    /// This means the shape of the chain does not match the arities of its
    /// callables.
    #[error("incomplete chain: link {link} needs {required} arguments, {available} available")]
    Incomplete {
        /// Index of the callable within the chain.
        link: usize,
        required: usize,
        available: usize,
    },

    /// A callable rejected its arguments or failed.
    #[error("call to link {link} failed")]
    Call {
        /// Index of the callable within the chain.
        link: usize,
        #[source]
        source: CallError,
    },
}

impl ChainError {
    /// Returns the index of the link that failed.
    #[must_use]
    pub fn link(&self) -> usize {
        match self {
            Self::Incomplete { link, .. } | Self::Call { link, .. } => *link,
        }
    }
}
