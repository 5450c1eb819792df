/// A destination that accepts bulk byte writes.
///
/// [`FragmentBuffer::write_to`](crate::FragmentBuffer::write_to) hands each
/// fragment to [`write_all_bytes`](Sink::write_all_bytes) exactly once. With
/// the `std` feature every [`std::io::Write`] is a sink, which covers files,
/// sockets, `Vec<u8>` and `FragmentBuffer` itself.
pub trait Sink {
    /// Error raised by the destination.
    type Error;

    /// Writes all of `bytes`, or fails.
    ///
    /// # Errors
    ///
    /// Whatever the destination reports.
    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

#[cfg(feature = "std")]
impl<W: std::io::Write + ?Sized> Sink for W {
    type Error = std::io::Error;

    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_all(bytes)
    }
}

#[cfg(not(feature = "std"))]
impl Sink for alloc::vec::Vec<u8> {
    type Error = core::convert::Infallible;

    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(not(feature = "std"))]
impl Sink for crate::FragmentBuffer {
    type Error = core::convert::Infallible;

    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_slice(bytes);
        Ok(())
    }
}
