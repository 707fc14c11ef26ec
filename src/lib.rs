#![no_std]

//! A schema-less decoder for undocumented, protobuf-like binary payloads.
//!
//! Loupe splits a payload into entries without knowing its schema, guessing
//! where sub-messages begin and whether a value is an integer, text, an
//! `HH:MM` time token or opaque bytes. The result is offered as an annotated
//! tree for diagnostics and as a compact nested list for positional
//! consumption. Decoding never fails: malformed or truncated input yields as
//! much structure as could be recovered.
//!
//! Most users should begin with the functions and derive macro in the
//! [`avec`] module. The wire-level readers they are built on live in the
//! [`sans`] module.
//!
//! Heuristic thresholds and resource limits are set through [`Options`].
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
mod options;
pub mod sans;

pub use options::Options;
