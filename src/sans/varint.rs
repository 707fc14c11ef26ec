//! Base-128 variable-length integers.

use tartan_bitfield::bitfield;
use thiserror::Error;

/// Maximum number of bytes read for a single varint.
pub const MAX_VARINT_LEN: usize = 10;

/// An error reading a varint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VarintError {
    /// The buffer ended before a terminating byte.
    #[error("Buffer ended inside a varint.")]
    TruncatedInput,
    /// More than 63 bits of shift accumulated without a terminating byte.
    #[error("Varint did not terminate within ten bytes.")]
    MalformedVarint,
}

bitfield! {
    struct VarintByte(u8) {
        [0..7] payload: u8,
        [7] has_continuation,
    }
}

/// Read a varint starting at `offset`.
///
/// Returns the value and the offset of the first byte after it. Payload bits
/// past the 64th are discarded.
pub fn read_varint(r: &[u8], mut offset: usize) -> Result<(u64, usize), VarintError> {
    let mut value = 0u64;
    let mut shift = 0u32;

    loop {
        let byte = VarintByte(*r.get(offset).ok_or(VarintError::TruncatedInput)?);
        offset += 1;

        value |= u64::from(byte.payload()) << shift;

        if !byte.has_continuation() {
            return Ok((value, offset));
        }

        shift += 7;
        if shift > 63 {
            Err(VarintError::MalformedVarint)?;
        }
    }
}

/// Decode a span already known to hold exactly one varint.
///
/// Stops at the first terminating byte, or after ten bytes.
pub fn decode_varint_bytes(r: &[u8]) -> u64 {
    let mut value = 0u64;

    for (n, b) in r.iter().take(MAX_VARINT_LEN).enumerate() {
        let byte = VarintByte(*b);
        value |= u64::from(byte.payload()) << (7 * n as u32);

        if !byte.has_continuation() {
            break;
        }
    }

    value
}
