use thiserror::Error;

use crate::source::ByteSource;

/// Errors that may occur while decoding bits from an input stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A read was attempted with no bits left in the input stream, or a
    /// byte-level read could not be completed because the stream ended
    /// mid-byte.
    #[error("read past the end of the input stream")]
    EndOfStream,

    /// A field width outside the supported range for the operation was
    /// requested. Raised before any bits are consumed.
    #[error("invalid field width {width}, expected 1 to {max} bits")]
    InvalidWidth { width: u32, max: u32 },
}

/// A bit-granular cursor over a [`ByteSource`].
///
/// The cursor eagerly primes itself with the first byte on construction
/// and refills the moment its buffered byte is spent. The buffer is
/// therefore always either holding unconsumed bits or has already
/// learned that the source is exhausted, which keeps
/// [`Self::is_empty`] answerable without side effects.
///
/// Decoding is strictly forward; there is no rewind and no realignment.
/// Once [`Error::EndOfStream`] has been raised, every further read
/// fails the same way until the cursor is rebuilt over a fresh source.
#[derive(Debug)]
pub struct BitCursor<S> {
    source: S,

    // The buffered byte, or `None` once the source is exhausted.
    current: Option<u8>,

    // Unconsumed bits left in `current`, always in `0..=8`.
    //
    // Whenever `current` is `Some`, this is in `1..=8`; a refill
    // happens before the count ever rests at zero.
    remaining: u32,
}

impl<S: ByteSource> BitCursor<S> {
    /// Creates a new [`BitCursor`] bound to the given source and primes
    /// it with the first byte.
    pub fn new(source: S) -> Self {
        let mut cursor = Self {
            source,
            current: None,
            remaining: 0,
        };
        cursor.refill();
        cursor
    }

    /// Whether the cursor can produce any further bits.
    ///
    /// False immediately after construction on any non-empty source;
    /// becomes and stays true once the last available bit has been
    /// consumed. Side-effect-free.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Consumes the cursor and returns the underlying source.
    ///
    /// Releasing the medium behind the source remains the caller's
    /// responsibility; this merely hands the handle back.
    pub fn into_source(self) -> S {
        self.source
    }

    // Pulls the next byte from the source into the buffer. `None`
    // transitions the cursor into its terminal exhausted state.
    fn refill(&mut self) {
        self.current = self.source.next_byte();
        self.remaining = match self.current {
            Some(_) => u8::BITS,
            None => 0,
        };
    }

    /// Reads the next bit from the input stream.
    pub fn read_bit(&mut self) -> Result<bool, Error> {
        let byte = self.current.ok_or(Error::EndOfStream)?;

        self.remaining -= 1;
        let bit = (byte >> self.remaining) & 1 == 1;
        if self.remaining == 0 {
            self.refill();
        }

        Ok(bit)
    }

    /// Reads the next 8 bits from the input stream.
    ///
    /// A partial trailing byte is an error, not a padded result: when
    /// fewer than 8 bits remain, this fails with [`Error::EndOfStream`]
    /// and leaves the cursor exhausted.
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let byte = self.current.ok_or(Error::EndOfStream)?;

        // Byte-aligned fast path: the buffered byte comes back whole.
        if self.remaining == u8::BITS {
            self.refill();
            return Ok(byte);
        }

        // Mid-byte: splice the unconsumed low bits of the old byte with
        // the high bits of the next one, keeping the same bit offset.
        let offset = self.remaining;
        let high = byte << (u8::BITS - offset);
        self.refill();
        let next = self.current.ok_or(Error::EndOfStream)?;
        self.remaining = offset;

        Ok(high | (next >> offset))
    }

    /// Reads the next `width` bits, `1 <= width <= 16`, as a [`u16`].
    ///
    /// The first bit read becomes the most significant bit of the low
    /// `width` bits of the result.
    pub fn read_bits_u16(&mut self, width: u32) -> Result<u16, Error> {
        if !(1..=u16::BITS).contains(&width) {
            return Err(Error::InvalidWidth {
                width,
                max: u16::BITS,
            });
        }

        if width == u8::BITS {
            return self.read_u8().map(u16::from);
        }

        let mut value = 0;
        for _ in 0..width {
            value = (value << 1) | u16::from(self.read_bit()?);
        }

        Ok(value)
    }

    /// Reads the next 16 bits as a big-endian [`u16`].
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let high = self.read_u8()?;
        let low = self.read_u8()?;
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Reads the next 32 bits as a big-endian [`u32`].
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let mut value = 0;
        for _ in 0..4 {
            value = value << 8 | u32::from(self.read_u8()?);
        }
        Ok(value)
    }

    /// Reads the next `width` bits, `1 <= width <= 32`, as a [`u32`].
    ///
    /// Same most-significant-bit-first accumulation as
    /// [`Self::read_bits_u16`], generalized to wider fields.
    pub fn read_bits_u32(&mut self, width: u32) -> Result<u32, Error> {
        if !(1..=u32::BITS).contains(&width) {
            return Err(Error::InvalidWidth {
                width,
                max: u32::BITS,
            });
        }

        if width == u8::BITS {
            return self.read_u8().map(u32::from);
        }

        let mut value = 0;
        for _ in 0..width {
            value = (value << 1) | u32::from(self.read_bit()?);
        }

        Ok(value)
    }

    /// Reads all remaining bytes of the input stream.
    ///
    /// Fails with [`Error::EndOfStream`] when called on an already
    /// exhausted cursor, and requires the remaining stream length to be
    /// a whole number of bytes: a final partial group propagates the
    /// failing [`Self::read_u8`] rather than being silently dropped.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>, Error> {
        if self.is_empty() {
            return Err(Error::EndOfStream);
        }

        let mut bytes = Vec::new();
        while !self.is_empty() {
            bytes.push(self.read_u8()?);
        }

        Ok(bytes)
    }
}
