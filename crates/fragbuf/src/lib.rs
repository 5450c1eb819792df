//! A write-accumulating byte buffer that defers copying.
//!
//! [`FragmentBuffer`] keeps every bulk write as its own immutable fragment and
//! only concatenates them when a contiguous view is requested. Runs of single
//! byte writes are coalesced in a small scratch buffer so they become one
//! fragment rather than one per byte.
//!
//! ```rust
//! use fragbuf::FragmentBuffer;
//!
//! let mut buf = FragmentBuffer::new();
//! buf.write_byte(0x01);
//! buf.write_byte(0x02);
//! buf.write_range(&[0x03, 0x04, 0x05], 1, 2).unwrap();
//!
//! assert_eq!(buf.size(), 4);
//! assert_eq!(&buf.to_byte_array()[..], &[0x01, 0x02, 0x04, 0x05]);
//! ```
//!
//! The buffer is single-writer: it performs no locking and is not `Sync`.
//! Hand it to another thread only once all writes are done.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod decode;
mod error;
mod options;
mod sink;

#[cfg(test)]
mod tests;

pub use buffer::FragmentBuffer;
pub use error::BufferError;
pub use options::BufferOptions;
pub use sink::Sink;

#[doc(no_inline)]
pub use bytes::Bytes;
