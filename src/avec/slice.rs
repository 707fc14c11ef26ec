//! Slice-based decoder implementation.

use super::{
    compact::project,
    decoded::Decoded,
    tree::{Span, tokenize},
};
use crate::Options;

/// Decode a payload held in a slice into its tree and compact views.
///
/// This method is also re-exported as `loupe::avec::decode_slice`.
///
/// Never fails. If nothing could be tokenized, the result is empty (see
/// [`Decoded::is_empty`]) and [`Decoded::stop`] says why.
pub fn decode(r: &[u8], options: &Options) -> Decoded {
    let Span { records, stop } = tokenize(r, options);
    let compact = project(&records);

    match &stop {
        Some(stop) => log::debug!(
            "decoded {} top-level records from {} bytes, then {stop}",
            records.len(),
            r.len()
        ),
        None => log::debug!(
            "decoded {} top-level records from {} bytes",
            records.len(),
            r.len()
        ),
    }

    Decoded {
        tree: records,
        compact,
        stop,
        options: *options,
    }
}
