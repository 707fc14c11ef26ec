//! Recursive tokenization into an annotated tree.

use alloc::vec::Vec;

use thiserror::Error;

use crate::{
    Options,
    sans::{EntryError, Primitive, WireType, classify, is_time_token, read_entry},
};

/// A tokenized entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub field_number: u64,
    pub wire_type: WireType,
    /// Offset of the key within the parent span.
    pub start: usize,
    /// Offset one past the value within the parent span.
    pub end: usize,
    /// The value bytes, excluding the key and any length prefix.
    pub value: Vec<u8>,
    pub primitive: Option<Primitive>,
    pub is_time_token: bool,
    /// Present only when the value was accepted as a complete sub-message.
    pub children: Option<Vec<Record>>,
}

impl Record {
    /// Text of the value, if it is a time token or was classified as text.
    pub fn text(&self) -> Option<&str> {
        if self.is_time_token {
            return core::str::from_utf8(&self.value).ok();
        }
        self.primitive.as_ref().and_then(Primitive::as_text)
    }

    pub fn integer(&self) -> Option<u64> {
        self.primitive.as_ref().and_then(Primitive::as_integer)
    }
}

/// Why tokenization of a span ended before its last byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Stop {
    #[error("Stopped at an unreadable entry: {0}")]
    Entry(#[from] EntryError),
    #[error("Stopped at the record limit.")]
    RecordLimit,
}

/// Records tokenized from one span.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub records: Vec<Record>,
    /// Set when bytes remained that could not be tokenized.
    pub stop: Option<Stop>,
}

/// Tokenize a span into records, re-tokenizing length-delimited values that
/// form complete sub-messages.
///
/// Never fails: a malformed entry ends the span, and the records before it
/// are kept.
pub fn tokenize(r: &[u8], options: &Options) -> Span {
    tokenize_at(r, 0, options)
}

fn tokenize_at(r: &[u8], depth: usize, options: &Options) -> Span {
    let mut records = Vec::new();
    let mut stop = None;
    let i = &mut 0; // Cursor into the span.

    while *i < r.len() {
        if records.len() >= options.max_records {
            stop = Some(Stop::RecordLimit);
            break;
        }

        let start = *i;
        let entry = match read_entry(r, i) {
            Ok(entry) => entry,
            Err(err) => {
                log::trace!("stopped span at depth {depth}, offset {start}: {err}");
                stop = Some(Stop::Entry(err));
                break;
            }
        };

        let primitive = classify(entry.wire_type, entry.value, options);
        let is_time_token = is_time_token(entry.wire_type, entry.value);

        // Text that decoded one character per byte is taken as genuine text.
        let is_plain_text = matches!(
            &primitive,
            Some(Primitive::Text(text)) if text.chars().count() == entry.value.len()
        );

        let children = if entry.wire_type == WireType::LengthDelimited
            && !is_time_token
            && !is_plain_text
            && depth < options.max_depth
        {
            tokenize_nested(entry.value, depth + 1, options)
        } else {
            None
        };

        records.push(Record {
            field_number: entry.field_number,
            wire_type: entry.wire_type,
            start,
            end: *i,
            value: entry.value.to_vec(),
            primitive,
            is_time_token,
            children,
        });
    }

    Span { records, stop }
}

/// Accept a value as a sub-message only if it tokenizes byte-exactly.
fn tokenize_nested(r: &[u8], depth: usize, options: &Options) -> Option<Vec<Record>> {
    let Span { records, .. } = tokenize_at(r, depth, options);

    match records.last() {
        Some(last) if last.end == r.len() => Some(records),
        _ => {
            log::trace!("kept {} bytes at depth {depth} as a leaf", r.len());
            None
        }
    }
}

/// Depth-first iterator over a forest of records, yielding each record with
/// its depth.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(usize, core::slice::Iter<'a, Record>)>,
}

impl<'a> Walk<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            stack: alloc::vec![(0, records.iter())],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, records) = self.stack.last_mut()?;
            let depth = *depth;

            let Some(record) = records.next() else {
                self.stack.pop();
                continue;
            };

            if let Some(children) = &record.children {
                self.stack.push((depth + 1, children.iter()));
            }

            return Some((depth, record));
        }
    }
}
