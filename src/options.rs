//! Tunable heuristics and resource limits.

/// Parameters shared by the tokenizer, the classifier and the numeric
/// recoder.
///
/// The two heuristic thresholds were chosen empirically against real payloads
/// and carry no protocol guarantee. Adjust them if a source classifies poorly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Minimum fraction of ASCII-printable characters for a length-delimited
    /// value to be accepted as text. Compared inclusively.
    pub printable_ratio: f64,
    /// Integers strictly below this value are kept as codes by the numeric
    /// recoder rather than reinterpreted as floats.
    pub small_integer_threshold: u64,
    /// Maximum number of records tokenized from a single span.
    pub max_records: usize,
    /// Maximum nesting depth at which length-delimited values are still
    /// re-tokenized as sub-messages. Top-level records are at depth zero.
    pub max_depth: usize,
}

impl Options {
    pub const DEFAULT: Self = Self {
        printable_ratio: 0.6,
        small_integer_threshold: 10,
        max_records: 100_000,
        max_depth: 64,
    };

    pub fn with_printable_ratio(mut self, printable_ratio: f64) -> Self {
        self.printable_ratio = printable_ratio;
        self
    }

    pub fn with_small_integer_threshold(mut self, small_integer_threshold: u64) -> Self {
        self.small_integer_threshold = small_integer_threshold;
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::DEFAULT
    }
}
