//! Byte source adapters and input resolution for the `bitin` decoder.
//!
//! The decoder core only requires the [`bitin::ByteSource`] capability;
//! this crate supplies the glue to real media. [`ReadSource`] adapts
//! any [`std::io::Read`] implementation, and [`resolve`] turns a
//! user-supplied input spec (a file path, a socket address, or `-` for
//! standard input) into a ready-to-use source with a typed error when
//! nothing matches.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod read;
pub use read::ReadSource;

mod resolve;
pub use resolve::{exists, resolve, ResolveError};
