//! Wire types and single-entry reads.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::TryFromBytes;

use super::varint::{VarintError, read_varint};

/// Encoding of an entry's value, taken from the low three bits of its key.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    Fixed32 = 5,
}

/// An error reading an entry. Each stops tokenization of the current span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The span ended inside the key or value.
    #[error("Span ended inside an entry.")]
    TruncatedInput,
    /// A varint in the key or value never terminated.
    #[error("Found a varint longer than ten bytes.")]
    MalformedVarint,
    /// The key named a wire type other than varint, fixed, or length-delimited.
    #[error("Unsupported wire type ({0}).")]
    UnsupportedWireType(u8),
}

impl From<VarintError> for EntryError {
    fn from(err: VarintError) -> Self {
        match err {
            VarintError::TruncatedInput => Self::TruncatedInput,
            VarintError::MalformedVarint => Self::MalformedVarint,
        }
    }
}

/// One key and the value bytes it governs, borrowed from the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub field_number: u64,
    pub wire_type: WireType,
    pub value: &'a [u8],
}

bitfield! {
    struct Key(u64) {
        [0..3] wire_type: u8,
    }
}

/// Read the entry starting at offset `i` of a span, advancing `i` past it.
///
/// On error, `i` is left unchanged.
pub fn read_entry<'a>(r: &'a [u8], i: &mut usize) -> Result<Entry<'a>, EntryError> {
    let (key, offset) = read_varint(r, *i)?;

    let field_number = key >> 3;
    let wire_type = Key(key).wire_type();

    let parsed: Result<WireType, _> = zerocopy::try_transmute!(wire_type);
    let Ok(wire_type) = parsed else {
        Err(EntryError::UnsupportedWireType(wire_type))?
    };

    let (start, end) = match wire_type {
        WireType::Varint => (offset, read_varint(r, offset)?.1),
        WireType::Fixed64 => (offset, offset + 8),
        WireType::Fixed32 => (offset, offset + 4),
        WireType::LengthDelimited => {
            let (length, start) = read_varint(r, offset)?;
            let end = usize::try_from(length)
                .ok()
                .and_then(|length| start.checked_add(length))
                .ok_or(EntryError::TruncatedInput)?;
            (start, end)
        }
    };

    let value = r.get(start..end).ok_or(EntryError::TruncatedInput)?;
    *i = end;

    Ok(Entry {
        field_number,
        wire_type,
        value,
    })
}
