//! Simplified nested view of a tree, for positional consumption.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use super::tree::Record;
use crate::sans::{Primitive, WireType};

/// A record reduced to the shape callers index into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompactValue {
    /// A sub-message.
    List(Vec<CompactValue>),
    /// A varint or fixed-width value.
    Integer(u64),
    /// Text, including time tokens.
    Text(String),
    /// A value with no confident interpretation.
    Opaque(Opaque),
}

/// Descriptor of a value that could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opaque {
    pub field_number: u64,
    pub wire_type: WireType,
    pub byte_length: usize,
    /// Lower-case hexadecimal of the value bytes.
    pub hex: String,
}

impl CompactValue {
    pub fn as_list(&self) -> Option<&[CompactValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Self::Opaque(opaque) => Some(opaque),
            _ => None,
        }
    }
}

/// Project records into compact values, preserving order.
pub fn project(records: &[Record]) -> Vec<CompactValue> {
    records.iter().map(project_record).collect()
}

fn project_record(record: &Record) -> CompactValue {
    if let Some(children) = &record.children {
        return CompactValue::List(project(children));
    }

    if let (
        Some(Primitive::Integer(value)),
        WireType::Varint | WireType::Fixed64 | WireType::Fixed32,
    ) = (&record.primitive, record.wire_type)
    {
        return CompactValue::Integer(*value);
    }

    if let Some(text) = record.text() {
        return CompactValue::Text(String::from(text));
    }

    CompactValue::Opaque(Opaque {
        field_number: record.field_number,
        wire_type: record.wire_type,
        byte_length: record.value.len(),
        hex: hex::encode(&record.value),
    })
}

impl fmt::Display for CompactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(values) => {
                f.write_char('[')?;
                for (n, value) in values.iter().enumerate() {
                    if n != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_char(']')
            }
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Opaque(opaque) => write!(
                f,
                "{{field: {}, wire_type: {}, len: {}, hex: {}}}",
                opaque.field_number, opaque.wire_type as u8, opaque.byte_length, opaque.hex
            ),
        }
    }
}
