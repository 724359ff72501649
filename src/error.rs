
use thiserror::Error;

/// The failures of the [`LinkedList`](crate::LinkedList) and [`Stack`](crate::Stack)
/// operations.
///
/// Every failure is detected before the container is changed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Error,)]
pub enum Error {
    /// An index was outside of the valid range of the operation.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The index passed in.
        index: usize,
        /// The length of the container at the time of the call.
        len: usize,
    },
    /// The operation needs at least one value.
    #[error("container is empty")]
    EmptyContainer,
    /// Reversal did not produce a new head.
    #[error("reverse produced no new head")]
    Reverse,
}

pub type Result<T,> = std::result::Result<T, Error,>;
