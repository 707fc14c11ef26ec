//! The combined tree and compact result of one decode.

use alloc::vec::Vec;
use core::fmt;

use super::{
    FromCompact,
    compact::CompactValue,
    tree::{Record, Stop, Walk},
};
use crate::{
    Options,
    sans::{Primitive, WireType},
};

/// Number of value bytes shown in a [`Dump`] line.
const PREVIEW_LEN: usize = 24;

/// The tree and compact views of one decoded payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decoded {
    pub tree: Vec<Record>,
    pub compact: Vec<CompactValue>,
    /// Why top-level tokenization ended early, if it did.
    pub stop: Option<Stop>,
    /// The options the payload was decoded with.
    pub options: Options,
}

impl Decoded {
    /// Whether no structure at all was recovered.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The first top-level record, if it is a varint.
    pub fn id(&self) -> Option<u64> {
        self.tree
            .first()
            .filter(|r| r.wire_type == WireType::Varint)
            .and_then(Record::integer)
    }

    /// The second top-level record, if it is length-delimited text.
    pub fn date(&self) -> Option<&str> {
        self.tree
            .get(1)
            .filter(|r| r.wire_type == WireType::LengthDelimited)
            .and_then(|r| r.primitive.as_ref())
            .and_then(Primitive::as_text)
    }

    /// Every time token in the tree, in depth-first order.
    pub fn times(&self) -> Vec<&str> {
        self.walk()
            .filter(|(_, r)| r.is_time_token)
            .filter_map(|(_, r)| r.text())
            .collect()
    }

    /// Iterate depth-first over every record, with its depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.tree)
    }

    /// A printable outline of the tree, down to `max_depth`.
    pub fn dump(&self, max_depth: usize) -> Dump<'_> {
        Dump {
            records: &self.tree,
            max_depth,
        }
    }

    /// Build a value from the top-level compact list, with the options the
    /// payload was decoded with.
    pub fn extract<T: FromCompact>(&self) -> T {
        T::from_compact(&self.compact, &self.options)
    }
}

/// Outline of a tree, one record per line.
///
/// Each line shows the field number, wire type and value length, then
/// `TIME` for time tokens, `sub=N` for sub-messages, the decoded value if
/// any, and a hexadecimal preview of the value bytes.
pub struct Dump<'a> {
    records: &'a [Record],
    max_depth: usize,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, record) in Walk::new(self.records) {
            if depth > self.max_depth {
                continue;
            }

            write!(
                f,
                "{:indent$}F{} wt={} len={}",
                "",
                record.field_number,
                record.wire_type as u8,
                record.value.len(),
                indent = depth * 2,
            )?;

            if record.is_time_token {
                f.write_str(" TIME")?;
            }
            if let Some(children) = &record.children {
                write!(f, " sub={}", children.len())?;
            }
            match &record.primitive {
                Some(_) if record.is_time_token => {}
                Some(Primitive::Integer(value)) => write!(f, " dec={value}")?,
                Some(Primitive::Text(text)) => write!(f, " dec={text:?}")?,
                None => {}
            }

            let preview = &record.value[..record.value.len().min(PREVIEW_LEN)];
            write!(f, " val={}", hex::encode(preview))?;
            if record.value.len() > PREVIEW_LEN {
                f.write_str("...")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;
    use crate::avec::decode_slice;

    #[test]
    fn header_fields() {
        // 1: 1234, 2: "2026-10-17", 3: { 1: 65535, 2: "08:00", 2: "08:05" }
        let mut r = vec![0x08, 0xD2, 0x09, 0x12, 0x0A];
        r.extend_from_slice(b"2026-10-17");
        r.extend_from_slice(&[0x1A, 0x12, 0x08, 0xFF, 0xFF, 0x03, 0x12, 0x05]);
        r.extend_from_slice(b"08:00");
        r.extend_from_slice(&[0x12, 0x05]);
        r.extend_from_slice(b"08:05");

        let decoded = decode_slice(&r, &Options::default());

        assert_eq!(decoded.id(), Some(1234));
        assert_eq!(decoded.date(), Some("2026-10-17"));
        assert_eq!(decoded.times(), vec!["08:00", "08:05"]);
        assert_eq!(decoded.stop, None);
    }

    #[test]
    fn header_fields_require_wire_types() {
        // 1: "x", 2: 5
        let decoded = decode_slice(&[0x0A, 0x01, b'x', 0x10, 0x05], &Options::default());
        assert_eq!(decoded.id(), None);
        assert_eq!(decoded.date(), None);
    }

    #[test]
    fn dump() {
        // 1: 150, 2: { 1: "08:45", 2: 200 }
        let r = [
            0x08, 0x96, 0x01, 0x12, 0x0A, 0x0A, 0x05, b'0', b'8', b':', b'4', b'5', 0x10, 0xC8,
            0x01,
        ];
        let decoded = decode_slice(&r, &Options::default());

        assert_eq!(
            decoded.dump(8).to_string(),
            "F1 wt=0 len=2 dec=150 val=9601\n\
             F2 wt=2 len=10 sub=2 val=0a0530383a343510c801\n  \
             F1 wt=2 len=5 TIME val=30383a3435\n  \
             F2 wt=0 len=2 dec=200 val=c801\n"
        );
        assert_eq!(
            decoded.dump(0).to_string(),
            "F1 wt=0 len=2 dec=150 val=9601\n\
             F2 wt=2 len=10 sub=2 val=0a0530383a343510c801\n"
        );
    }

    #[test]
    fn dump_truncates_preview() {
        let mut r = vec![0x0A, 0x1E];
        r.extend_from_slice(&[0xFF; 30]);
        let decoded = decode_slice(&r, &Options::default());

        let line = decoded.dump(0).to_string();
        assert!(line.starts_with("F1 wt=2 len=30 val=ffff"));
        assert!(line.ends_with("...\n"));
    }
}
