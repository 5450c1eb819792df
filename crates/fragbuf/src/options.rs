/// Configuration options for a [`FragmentBuffer`](crate::FragmentBuffer).
///
/// Both knobs are capacity hints; they never change what the buffer stores,
/// only how eagerly it allocates. A hint the allocator cannot satisfy is
/// ignored rather than treated as an error.
///
/// # Examples
///
/// ```rust
/// use fragbuf::{BufferOptions, FragmentBuffer};
///
/// let buf = FragmentBuffer::with_options(BufferOptions {
///     scratch_capacity: 256,
///     ..Default::default()
/// });
/// assert!(buf.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferOptions {
    /// Initial capacity of the scratch accumulator that coalesces single-byte
    /// writes.
    ///
    /// The scratch buffer is allocated lazily on the first
    /// [`write_byte`](crate::FragmentBuffer::write_byte) after a compaction,
    /// so buffers fed only by bulk writes never pay for it.
    ///
    /// # Default
    ///
    /// `32`
    pub scratch_capacity: usize,

    /// Number of fragment slots reserved up front.
    ///
    /// # Default
    ///
    /// `0`
    pub fragment_capacity: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            scratch_capacity: 32,
            fragment_capacity: 0,
        }
    }
}
