//! Primitive type inference for entry values.
//!
//! Every rule here is total: a value is always assigned a [`Primitive`] or
//! left unclassified, which callers treat as opaque.

use alloc::string::String;

use zerocopy::{
    FromBytes,
    byteorder::little_endian::{U32, U64},
};

use super::{varint::decode_varint_bytes, wire::WireType};
use crate::Options;

/// A typed value recovered from an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    Integer(u64),
    Text(String),
}

impl Primitive {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Classify the value bytes of an entry.
///
/// Fixed-width values are read little-endian. Length-delimited values become
/// text only when they are valid UTF-8 and enough of their characters are
/// printable (see [`Options::printable_ratio`]).
pub fn classify(wire_type: WireType, r: &[u8], options: &Options) -> Option<Primitive> {
    match wire_type {
        WireType::Varint => Some(Primitive::Integer(decode_varint_bytes(r))),
        WireType::Fixed64 => U64::read_from_bytes(r)
            .ok()
            .map(|v| Primitive::Integer(v.get())),
        WireType::Fixed32 => U32::read_from_bytes(r)
            .ok()
            .map(|v| Primitive::Integer(v.get().into())),
        WireType::LengthDelimited => classify_text(r, options.printable_ratio).map(Primitive::Text),
    }
}

fn classify_text(r: &[u8], printable_ratio: f64) -> Option<String> {
    let text = core::str::from_utf8(r).ok()?;

    let (total, printable) = text.chars().fold((0usize, 0usize), |(total, printable), c| {
        (total + 1, printable + usize::from(is_printable(c)))
    });

    if total != 0 && (printable as f64 / total as f64) < printable_ratio {
        return None;
    }

    Some(String::from(text))
}

/// ASCII letters, digits, punctuation and whitespace, including vertical tab
/// and form feed.
fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Whether a value is a 5-byte `HH:MM` token matching `[0-2][0-9]:[0-5][0-9]`.
pub fn is_time_token(wire_type: WireType, r: &[u8]) -> bool {
    wire_type == WireType::LengthDelimited
        && matches!(
            r,
            [b'0'..=b'2', b'0'..=b'9', b':', b'0'..=b'5', b'0'..=b'9']
        )
}
