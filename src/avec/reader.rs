//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use thiserror::Error;

use super::{decoded::Decoded, slice};
use crate::Options;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a payload to its end, then decode it.
///
/// This method is also re-exported as `loupe::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, options: &Options) -> Result<Decoded, Error> {
    let mut buffer = Vec::new();
    r.read_to_end(&mut buffer)?;

    Ok(slice::decode(&buffer, options))
}
