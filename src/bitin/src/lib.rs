//! Bit-level decoding of binary input streams.
//!
//! The central type is [`BitCursor`], a forward-only cursor which pulls
//! bytes from a [`ByteSource`] on demand and serves reads of individual
//! bits and multi-bit fields, splicing values across byte boundaries
//! where necessary.
//!
//! Bits within a byte are consumed starting at the MSB, working towards
//! the LSB, and the first bit of a multi-bit read becomes the most
//! significant bit of the result. This matches how bit-packed formats
//! are conventionally written out.
//!
//! The cursor buffers exactly one byte of lookahead. Callers only ever
//! request up to 32 bits at a time, so no deeper buffering is needed;
//! media that want read-ahead should supply a buffered source instead.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cursor;
pub use cursor::{BitCursor, Error};

mod source;
pub use source::{ByteSource, SliceSource};
