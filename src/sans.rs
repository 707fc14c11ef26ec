//! Low-level building blocks for reading the wire format.
//!
//! This module is intended for applications that need to walk a payload
//! themselves, for example to stop early or to avoid allocating a tree. See
//! [`crate::avec`] for the tree and compact decoders built on it.
//!
//! # Wire format
//!
//! A payload is a sequence of entries. Each entry begins with a varint key,
//! whose low three bits name a [`wire::WireType`] and whose remaining bits
//! hold a field number. The value follows:
//!
//! - varint: a single varint.
//! - fixed 64/32: eight or four little-endian bytes.
//! - length-delimited: a varint length, then that many bytes. These bytes may
//!   be text, a nested sequence of entries, or anything else.
//!
//! No schema is available, so field numbers carry no meaning here and may
//! repeat. Reading an entry never panics; malformed input produces an
//! [`wire::EntryError`] and the caller decides how much of the span to keep.

pub mod classify;
pub mod varint;
pub mod wire;

pub use classify::{Primitive, classify, is_time_token};
pub use varint::{VarintError, decode_varint_bytes, read_varint};
pub use wire::{Entry, EntryError, WireType, read_entry};
