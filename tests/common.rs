#![cfg(feature = "std")]

use std::path::Path;

use csv::ReaderBuilder;
use loupe::{
    Options,
    avec::{CompactValue, Decoded, Record, Stop},
    sans::{EntryError, Primitive},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn decode_slice_station_day() {
    init_logger();
    const PATH: &str = "fixtures/station-day.bin";
    let data = std::fs::read(PATH).unwrap();
    let decoded = loupe::avec::decode_slice(&data, &Options::default());

    Validator::new(PATH).validate(&decoded);
    assert_eq!(decoded.stop, None);
    assert_eq!(decoded.tree.last().map(|r| r.end), Some(data.len()));
}

#[test]
fn decode_slice_station_day_truncated() {
    init_logger();
    const PATH: &str = "fixtures/station-day-truncated.bin";
    let data = std::fs::read(PATH).unwrap();
    let decoded = loupe::avec::decode_slice(&data, &Options::default());

    Validator::new(PATH).validate(&decoded);
    assert_eq!(decoded.stop, Some(Stop::Entry(EntryError::TruncatedInput)));
}

#[test]
fn decode_reader_station_day() {
    init_logger();
    const PATH: &str = "fixtures/station-day.bin";
    let mut file = std::fs::File::open(PATH).unwrap();
    let decoded = loupe::avec::decode_reader(&mut file, &Options::default()).unwrap();

    Validator::new(PATH).validate(&decoded);
}

#[test]
fn station_day_compact_layout() {
    const PATH: &str = "fixtures/station-day.bin";
    let data = std::fs::read(PATH).unwrap();
    let decoded = loupe::avec::decode_slice(&data, &Options::default());

    assert_eq!(decoded.id(), Some(4711202));
    assert_eq!(decoded.date(), Some("2026-10-17"));
    assert_eq!(decoded.times().len(), 6);

    let compact = &decoded.compact;
    assert_eq!(compact.len(), 7);
    assert_eq!(compact[0], CompactValue::Integer(4711202));
    assert_eq!(compact[1], CompactValue::Text("2026-10-17".into()));

    let micro = compact[2].as_list().unwrap();
    assert_eq!(micro[0], CompactValue::Integer(116180123456));

    let main = micro[1].as_list().unwrap();
    assert_eq!(main[0], CompactValue::Integer(288));
    assert_eq!(main[1], CompactValue::Text("08:00".into()));

    let opaque = compact[4].as_opaque().unwrap();
    assert_eq!(opaque.field_number, 4);
    assert_eq!(opaque.byte_length, 4);
    assert_eq!(opaque.hex, "00ff1080");

    assert_eq!(compact[5], CompactValue::Integer(0x3FA0_0000));
    assert_eq!(compact[6], CompactValue::Integer(1234567890123));
}

#[test]
fn every_prefix_decodes() {
    const PATH: &str = "fixtures/station-day.bin";
    let data = std::fs::read(PATH).unwrap();
    let whole = loupe::avec::decode_slice(&data, &Options::default());

    for n in 0..data.len() {
        let prefix = loupe::avec::decode_slice(&data[..n], &Options::default());

        assert!(prefix.tree.len() <= whole.tree.len());
        for (a, b) in prefix.tree.iter().zip(&whole.tree) {
            assert_eq!(a.field_number, b.field_number);
            assert_eq!(a.start, b.start);
        }
    }
}

#[test]
fn sub_messages_are_byte_exact() {
    const PATH: &str = "fixtures/station-day.bin";
    let data = std::fs::read(PATH).unwrap();
    let decoded = loupe::avec::decode_slice(&data, &Options::default());

    for (_, record) in decoded.walk() {
        let Some(children) = &record.children else {
            continue;
        };

        let consumed: usize = children.iter().map(|c| c.end - c.start).sum();
        assert_eq!(consumed, record.value.len());
        assert_eq!(children.last().map(|c| c.end), Some(record.value.len()));
    }
}

/// Expected walk of a decoded tree, one CSV row per record:
/// depth, field number, wire type, value length, child count, decoded value.
struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn validate(mut self, decoded: &Decoded) {
        for (depth, record) in decoded.walk() {
            assert_eq!(self.0.remove(0), row(depth, record));
        }
        assert!(self.0.is_empty(), "{} records missing", self.0.len());
    }
}

fn row(depth: usize, record: &Record) -> Vec<String> {
    let children = record
        .children
        .as_ref()
        .map(|c| c.len().to_string())
        .unwrap_or_default();

    let value = if record.is_time_token {
        record.text().unwrap().to_string()
    } else {
        match &record.primitive {
            Some(Primitive::Integer(value)) => value.to_string(),
            Some(Primitive::Text(text)) => text.clone(),
            None => String::new(),
        }
    };

    vec![
        depth.to_string(),
        record.field_number.to_string(),
        (record.wire_type as u8).to_string(),
        record.value.len().to_string(),
        children,
        value,
    ]
}
