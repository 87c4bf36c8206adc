//! [`BundleError`] and index validation for the outer-facing entry points.

/// A misuse of a bundle by its caller.
///
/// Stream exhaustion is never an error; it is the `None` outcome of [`Sources::pull`](crate::Sources::pull).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    /// A stream index was not in `0..arity`.
    #[error("stream index {index} is out of range for a bundle of arity {arity}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The arity of the bundle it was used with.
        arity: usize,
    },
}

/// Checks that `index` names a stream of a bundle with the given `arity`.
pub fn check_index(index: usize, arity: usize) -> Result<(), BundleError> {
    if index < arity {
        Ok(())
    } else {
        Err(BundleError::IndexOutOfRange { index, arity })
    }
}

/// Panics unless `index` names a stream of a bundle with the given `arity`.
#[track_caller]
pub(crate) fn assert_index(index: usize, arity: usize) {
    if let Err(err) = check_index(index, arity) {
        panic!("{err}");
    }
}
