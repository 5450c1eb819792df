use alloc::string::String;

use thiserror::Error;

/// Errors raised by [`FragmentBuffer`](crate::FragmentBuffer) operations.
///
/// Sink failures during [`write_to`](crate::FragmentBuffer::write_to) are not
/// wrapped here; they surface as the sink's own error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The requested `offset`/`length` pair does not lie within the source.
    #[error("range {offset}+{length} out of bounds for {available} bytes")]
    OutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        length: usize,
        /// Length of the source the range was taken from.
        available: usize,
    },
    /// An explicitly named text encoding is not known.
    #[error("unsupported encoding '{0}'")]
    UnsupportedEncoding(String),
}

impl BufferError {
    /// Validates `offset..offset + length` against a source of `available`
    /// bytes and returns the exclusive end of the range.
    pub(crate) fn check_range(
        offset: usize,
        length: usize,
        available: usize,
    ) -> Result<usize, Self> {
        match offset.checked_add(length) {
            Some(end) if offset <= available && end <= available => Ok(end),
            _ => Err(BufferError::OutOfBounds {
                offset,
                length,
                available,
            }),
        }
    }
}
