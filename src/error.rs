use thiserror::Error;

/// Errors returned by the fallible operations of [`List`] and [`Iter`].
///
/// [`List`]: crate::List
/// [`Iter`]: crate::Iter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ListError {
    /// The index is outside the range accepted by the operation.
    ///
    /// For `get`, `set` and `remove` the range is `0..len`; for `insert`
    /// it is `0..=len`. Every indexed read on an empty list fails with it.
    #[error("invalid position {index} for a list of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// An iterator was advanced with no element left.
    #[error("no more elements in the sequence")]
    ExhaustedSequence,
}

/// A `Result` defaulting to [`ListError`].
pub type Result<T, E = ListError> = std::result::Result<T, E>;
