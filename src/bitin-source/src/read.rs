use std::io::{ErrorKind, Read};

use bitin::ByteSource;

/// A [`ByteSource`] over any [`Read`] implementation.
///
/// One byte is pulled from the reader per call; wrap slow media such as
/// files and sockets in a [`std::io::BufReader`] so the syscall cost is
/// amortized.
///
/// Read failures are collapsed into end-of-stream, which is what the
/// decoder contract requires: both stop further production of bits and
/// neither is retried. The first failure is logged at warn level so
/// truncation can be told apart from a clean end, and the source
/// reports itself exhausted from then on.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    failed: bool,
}

impl<R: Read> ReadSource<R> {
    /// Creates a new [`ReadSource`] over the given reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    /// Consumes the source and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Option<u8> {
        if self.failed {
            return None;
        }

        let mut byte = [0];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("treating read failure as end of stream: {e}");
                    self.failed = true;
                    return None;
                }
            }
        }
    }
}
