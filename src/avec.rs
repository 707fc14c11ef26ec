//! Convenience interfaces for decoding whole payloads.
//!
//! [`decode_slice`] (or [`decode_reader`]) tokenizes a payload into an
//! annotated tree of [`Record`]s and projects it into nested
//! [`CompactValue`]s. The compact view is what domain code consumes: its
//! layout is undocumented and known only by position, so values are picked
//! out by index and converted with the [`FromCompact`] and
//! [`FromCompactValue`] traits.
//!
//! In many cases these traits can be derived. See the
//! [`FromCompact`](macro@FromCompact) macro for details.

mod decoded;
pub mod compact;
pub mod measure;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;
pub mod tree;

pub use compact::{CompactValue, Opaque, project};
pub use decoded::{Decoded, Dump};
pub use measure::{Measurement, Number, recover_measurements};
#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;
pub use tree::{Record, Span, Stop, Walk, tokenize};

use alloc::{string::String, vec::Vec};

use either::Either::{self, Left, Right};

use crate::Options;

/// Derive [`FromCompact`] for a struct laid out positionally.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// To take a single element, add the `position(N)` attribute to an `Option<T>`
/// struct field, where `N` is the element index and `T` implements
/// [`FromCompactValue`]. The field is `None` if the element is missing or does
/// not convert. To take every convertible element from an index onward, apply
/// `position(N..)` to a `Vec<T>` instead. Fields without an attribute are set
/// to their default.
///
/// ```
/// #[derive(Debug, FromCompact)]
/// struct Day {
///     #[position(0)]
///     id: Option<u64>,
///     #[position(1)]
///     date: Option<String>,
///     #[position(2..)]
///     units: Vec<Unit>,
/// }
///
/// #[derive(Debug, FromCompact)]
/// struct Unit {
///     #[position(0)]
///     id: Option<u64>,
///     #[position(1)]
///     readings: Option<Vec<Measurement>>,
/// }
/// ```
///
/// The derive also implements [`FromCompactValue`], converting from a
/// [`CompactValue::List`], so derived structs nest as above.
#[cfg(feature = "derive")]
pub use loupe_derive::FromCompact;

/// Build a value from a positional list of compact values.
///
/// The options are those the payload was decoded with, so that conversions
/// such as [`Measurement`] apply the same thresholds.
///
/// See the [`FromCompact`](macro@FromCompact) derive macro for an automatic
/// implementation of this trait.
pub trait FromCompact {
    fn from_compact(values: &[CompactValue], options: &Options) -> Self;
}

/// Convert a single compact value, if it has the expected shape.
pub trait FromCompactValue: Sized {
    fn from_compact_value(value: &CompactValue, options: &Options) -> Option<Self>;
}

impl FromCompactValue for CompactValue {
    fn from_compact_value(value: &CompactValue, _: &Options) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromCompactValue for u64 {
    fn from_compact_value(value: &CompactValue, _: &Options) -> Option<Self> {
        value.as_integer()
    }
}

impl FromCompactValue for u32 {
    fn from_compact_value(value: &CompactValue, _: &Options) -> Option<Self> {
        value.as_integer().and_then(|v| v.try_into().ok())
    }
}

impl FromCompactValue for String {
    fn from_compact_value(value: &CompactValue, _: &Options) -> Option<Self> {
        value.as_text().map(String::from)
    }
}

impl FromCompactValue for Opaque {
    fn from_compact_value(value: &CompactValue, _: &Options) -> Option<Self> {
        value.as_opaque().cloned()
    }
}

impl FromCompactValue for Measurement {
    fn from_compact_value(value: &CompactValue, options: &Options) -> Option<Self> {
        value
            .as_list()
            .map(|values| Measurement::recover(values, options))
    }
}

/// Converts a list, keeping only the elements that convert.
impl<T: FromCompactValue> FromCompactValue for Vec<T> {
    fn from_compact_value(value: &CompactValue, options: &Options) -> Option<Self> {
        value.as_list().map(|values| {
            values
                .iter()
                .filter_map(|v| T::from_compact_value(v, options))
                .collect()
        })
    }
}

/// Tries the left type first.
impl<L: FromCompactValue, R: FromCompactValue> FromCompactValue for Either<L, R> {
    fn from_compact_value(value: &CompactValue, options: &Options) -> Option<Self> {
        L::from_compact_value(value, options)
            .map(Left)
            .or_else(|| R::from_compact_value(value, options).map(Right))
    }
}
