use alloc::vec::Vec;
use core::{cell::Cell, marker::PhantomData};

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use crate::{BufferError, BufferOptions, Sink};

/// A byte buffer that stores writes as a list of immutable fragments.
///
/// The buffer has two tiers:
///
/// * a **scratch** accumulator that collects consecutive
///   [`write_byte`](Self::write_byte) calls, and
/// * the committed **fragment list**, in write order.
///
/// Every bulk write and every read first *compacts* the scratch into a
/// fragment, so the fragment list always reflects the full byte stream by the
/// time anything observes it.
///
/// Whole buffers handed over with [`write_bytes`](Self::write_bytes) are moved
/// in without copying. Bytes that are only borrowed are copied into a fresh
/// fragment, because the buffer never keeps a view into memory it does not
/// own.
///
/// `FragmentBuffer` is `Send` but not `Sync`: it is meant for one writer at a
/// time and takes no locks.
#[derive(Debug)]
pub struct FragmentBuffer {
    fragments: Vec<Bytes>,
    scratch: Option<Vec<u8>>,
    /// Bytes held by `fragments`; scratch is counted once compacted.
    count: usize,
    options: BufferOptions,
    _single_writer: PhantomData<Cell<()>>,
}

impl FragmentBuffer {
    /// Creates an empty buffer with default [`BufferOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(BufferOptions::default())
    }

    /// Creates an empty buffer with the given capacity hints.
    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            fragments: vec_with_hint(options.fragment_capacity),
            scratch: None,
            count: 0,
            options,
            _single_writer: PhantomData,
        }
    }

    /// The options this buffer was created with.
    #[must_use]
    pub fn options(&self) -> &BufferOptions {
        &self.options
    }

    /// Appends a single byte to the scratch accumulator.
    ///
    /// No fragment is created until the next bulk write or read.
    pub fn write_byte(&mut self, byte: u8) {
        let capacity = self.options.scratch_capacity;
        self.scratch
            .get_or_insert_with(|| vec_with_hint(capacity))
            .push(byte);
    }

    /// Takes ownership of `data` and appends it as one fragment without
    /// copying.
    ///
    /// Accepts anything convertible into [`Bytes`]: `Vec<u8>`, `Box<[u8]>`,
    /// `String`, `&'static [u8]`, or an existing `Bytes` handle. Empty input
    /// appends nothing.
    pub fn write_bytes(&mut self, data: impl Into<Bytes>) {
        let data = data.into();
        if data.is_empty() {
            return;
        }
        self.compact();
        self.push_fragment(data);
    }

    /// Copies the whole of `data` into a new fragment.
    pub fn write_slice(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.compact();
        self.push_fragment(Bytes::copy_from_slice(data));
    }

    /// Copies `data[offset..offset + length]` into a new fragment.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfBounds`] if `offset` lies past the end of
    /// `data` or the range does not fit. The buffer is left untouched in
    /// that case. A zero `length` that passes the bounds check is a no-op.
    pub fn write_range(
        &mut self,
        data: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<(), BufferError> {
        let end = Self::checked_end(offset, length, data.len())?;
        if length == 0 {
            return Ok(());
        }
        self.compact();
        self.push_fragment(Bytes::copy_from_slice(&data[offset..end]));
        Ok(())
    }

    /// Like [`write_range`](Self::write_range), but takes ownership of
    /// `data`.
    ///
    /// When the range spans all of `data` it is moved in as a fragment
    /// without copying. Any narrower range is copied into a fragment of
    /// exactly `length` bytes and the rest of `data` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfBounds`] under the same conditions as
    /// [`write_range`](Self::write_range).
    pub fn write_range_owned(
        &mut self,
        data: impl Into<Bytes>,
        offset: usize,
        length: usize,
    ) -> Result<(), BufferError> {
        let data = data.into();
        let end = Self::checked_end(offset, length, data.len())?;
        if length == 0 {
            return Ok(());
        }
        self.compact();
        if offset == 0 && length == data.len() {
            self.push_fragment(data);
        } else {
            self.push_fragment(Bytes::copy_from_slice(&data[offset..end]));
        }
        Ok(())
    }

    /// Compacts and returns the total number of bytes written.
    pub fn size(&mut self) -> usize {
        self.compact();
        self.count
    }

    /// Total number of bytes written, including uncompacted scratch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count + self.scratch.as_ref().map_or(0, Vec::len)
    }

    /// Whether nothing has been written since creation or the last
    /// [`reset`](Self::reset).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compacts and returns the number of committed fragments.
    pub fn fragment_count(&mut self) -> usize {
        self.compact();
        self.fragments.len()
    }

    /// Returns the written bytes as one contiguous [`Bytes`].
    ///
    /// A sole fragment is returned as-is: the result shares memory with the
    /// fragment (and with whatever buffer was handed to
    /// [`write_bytes`](Self::write_bytes)). Several fragments are merged
    /// into a new allocation, which then replaces the fragment list so the
    /// next call is zero-copy again.
    pub fn to_byte_array(&mut self) -> Bytes {
        self.compact();
        match self.fragments.as_slice() {
            [] => Bytes::new(),
            [only] => only.clone(),
            fragments => {
                let mut merged = BytesMut::with_capacity(self.count);
                for fragment in fragments {
                    merged.extend_from_slice(fragment);
                }
                trace!(
                    fragments = fragments.len(),
                    bytes = self.count,
                    "merged fragments"
                );
                let merged = merged.freeze();
                self.fragments.clear();
                self.fragments.push(merged.clone());
                merged
            }
        }
    }

    /// Consumes the buffer and returns its contents as one contiguous
    /// [`Bytes`].
    #[must_use]
    pub fn into_bytes(mut self) -> Bytes {
        self.to_byte_array()
    }

    /// Writes every fragment to `sink`, in order, one bulk write each.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `sink` unchanged. Fragments written
    /// before the failure stay written; nothing is retried.
    pub fn write_to<S: Sink + ?Sized>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        self.compact();
        for fragment in &self.fragments {
            sink.write_all_bytes(fragment)?;
        }
        Ok(())
    }

    /// Writes every fragment to `writer` with vectored writes, continuing
    /// after partial writes until all bytes are out.
    ///
    /// # Errors
    ///
    /// Returns the writer's error, or [`std::io::ErrorKind::WriteZero`] if it
    /// stops accepting bytes.
    #[cfg(feature = "std")]
    pub fn write_vectored_to<W: std::io::Write + ?Sized>(
        &mut self,
        writer: &mut W,
    ) -> std::io::Result<()> {
        use std::io::{ErrorKind, IoSlice};

        self.compact();
        let mut slices: Vec<IoSlice<'_>> = self
            .fragments
            .iter()
            .map(|fragment| IoSlice::new(fragment))
            .collect();
        let mut remaining = slices.as_mut_slice();
        while !remaining.is_empty() {
            match writer.write_vectored(remaining) {
                Ok(0) => return Err(ErrorKind::WriteZero.into()),
                Ok(written) => IoSlice::advance_slices(&mut remaining, written),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Compacts and returns the total byte count together with the fragments
    /// in write order, without merging them.
    pub fn result(&mut self) -> (usize, &[Bytes]) {
        self.compact();
        (self.count, &self.fragments)
    }

    /// Drops all fragments and pending bytes. The buffer can be reused.
    pub fn reset(&mut self) {
        self.fragments.clear();
        self.scratch = None;
        self.count = 0;
    }

    /// Number of single-byte writes not yet compacted into a fragment.
    #[cfg(any(test, feature = "fuzzing"))]
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.scratch.as_ref().map_or(0, Vec::len)
    }

    fn compact(&mut self) {
        let Some(scratch) = self.scratch.take() else {
            return;
        };
        if scratch.is_empty() {
            return;
        }
        let committed = scratch.len();
        self.push_fragment(Bytes::from(scratch));
        trace!(
            bytes = committed,
            fragments = self.fragments.len(),
            "compacted scratch"
        );
    }

    fn push_fragment(&mut self, fragment: Bytes) {
        self.count += fragment.len();
        self.fragments.push(fragment);
    }

    fn checked_end(offset: usize, length: usize, available: usize) -> Result<usize, BufferError> {
        BufferError::check_range(offset, length, available).inspect_err(|err| {
            debug!(%err, "rejected range write");
        })
    }
}

/// Reserves `capacity` up front when the allocator allows it. A hint that
/// cannot be satisfied leaves the vector empty and lets it grow on demand.
fn vec_with_hint<T>(capacity: usize) -> Vec<T> {
    let mut vec = Vec::new();
    let _ = vec.try_reserve_exact(capacity);
    vec
}

impl Default for FragmentBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for FragmentBuffer {
    fn from(data: Vec<u8>) -> Self {
        let mut buf = Self::new();
        buf.write_bytes(data);
        buf
    }
}

impl Extend<u8> for FragmentBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.write_byte(byte);
        }
    }
}

impl Extend<Bytes> for FragmentBuffer {
    fn extend<I: IntoIterator<Item = Bytes>>(&mut self, iter: I) {
        for fragment in iter {
            self.write_bytes(fragment);
        }
    }
}

#[cfg(feature = "std")]
impl std::io::Write for FragmentBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
