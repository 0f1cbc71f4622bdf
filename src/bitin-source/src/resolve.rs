use std::{
    fs::File,
    io::{self, BufReader},
    net::{SocketAddr, TcpStream},
    path::Path,
};

use bitin::ByteSource;
use thiserror::Error;

use crate::ReadSource;

/// Errors that may occur while resolving an input spec to a byte source.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A matching candidate was found but opening it failed.
    #[error("failed to open input source: {0}")]
    Io(#[from] io::Error),

    /// The spec matched no known kind of input source.
    #[error("cannot resolve '{0}' to an input source")]
    Unresolvable(String),
}

/// Resolves an input spec to a concrete [`ByteSource`].
///
/// Candidates are tried in a fixed priority order:
///
/// 1. `-` resolves to standard input.
/// 2. An existing local file path resolves to that file.
/// 3. A socket address literal such as `127.0.0.1:4000` resolves to a
///    TCP connection.
///
/// The first matching candidate wins; a failure to open it is reported
/// as [`ResolveError::Io`] rather than falling through to the next
/// candidate. Specs matching nothing yield
/// [`ResolveError::Unresolvable`].
///
/// All returned sources are buffered. Dropping the returned source
/// releases the underlying medium.
pub fn resolve(spec: &str) -> Result<Box<dyn ByteSource>, ResolveError> {
    if spec == "-" {
        log::debug!("resolved '-' to standard input");
        return Ok(Box::new(ReadSource::new(BufReader::new(io::stdin()))));
    }

    let path = Path::new(spec);
    if path.is_file() {
        let file = File::open(path)?;
        log::debug!("resolved '{spec}' to a local file");
        return Ok(Box::new(ReadSource::new(BufReader::new(file))));
    }

    if let Ok(addr) = spec.parse::<SocketAddr>() {
        let stream = TcpStream::connect(addr)?;
        log::debug!("resolved '{spec}' to a tcp connection");
        return Ok(Box::new(ReadSource::new(BufReader::new(stream))));
    }

    Err(ResolveError::Unresolvable(spec.to_owned()))
}

/// Whether the spec names a source [`resolve`] would attempt to open.
///
/// A convenience predicate only; it opens nothing, and resolution of a
/// spec it accepts can still fail (e.g. a refused connection).
pub fn exists(spec: &str) -> bool {
    spec == "-" || Path::new(spec).is_file() || spec.parse::<SocketAddr>().is_ok()
}
