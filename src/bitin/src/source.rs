/// A pull-based supplier of raw bytes for a [`BitCursor`].
///
/// `None` signals end-of-stream. Implementations must collapse an I/O
/// failure of the underlying medium into `None` as well; the cursor
/// treats both identically and stops producing bits. No retrying
/// happens on either side.
///
/// The cursor consults a source at most once per refill and never again
/// after it has reported `None`.
///
/// [`BitCursor`]: crate::BitCursor
pub trait ByteSource {
    /// Pulls the next byte from the source.
    fn next_byte(&mut self) -> Option<u8>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> Option<u8> {
        (**self).next_byte()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn next_byte(&mut self) -> Option<u8> {
        (**self).next_byte()
    }
}

/// An in-memory byte slice served front to back.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Creates a new [`SliceSource`] over a given byte slice.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Gets the bytes not yet handed out.
    pub const fn unread_bytes(&self) -> &'a [u8] {
        self.data
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let (&byte, rest) = self.data.split_first()?;
        self.data = rest;
        Some(byte)
    }
}
