use std::fmt::{self, Debug, Formatter};

use thiserror::Error;

/// Error returned when pushing to a full ring buffer that does not overwrite.
///
/// Carries the rejected item so the caller can retry or dispose of it.
#[derive(Clone, Copy, PartialEq, Eq, Error)]
#[error("ring buffer is full")]
pub struct BufferFullError<T>(T);

impl<T> Debug for BufferFullError<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BufferFullError").finish_non_exhaustive()
    }
}

impl<T> BufferFullError<T> {
    pub(crate) const fn new(item: T) -> Self {
        Self(item)
    }

    /// Returns the item that was not inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Error returned when the front or back of an empty ring buffer is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ring buffer is empty")]
pub struct EmptyBufferError;

/// Error returned by [`try_push_back_with`](crate::RingBuffer::try_push_back_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PushError<E> {
    /// The buffer is full and does not overwrite; the constructor was not called.
    #[error("ring buffer is full")]
    Full,
    /// The constructor failed; the buffer is unchanged.
    #[error("failed to construct item")]
    Construct(#[source] E),
}
