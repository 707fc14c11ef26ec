//! Recovery of floating point measurements from integer fields.
//!
//! Readings arrive as lists of varints. Small values are codes (such as
//! channel indices) and pass through; anything else is the bit pattern of an
//! IEEE-754 single-precision float.

use alloc::vec::Vec;

use super::compact::CompactValue;
use crate::Options;

/// A value recovered from a reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(u64),
    Float(f32),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value.into(),
        }
    }
}

/// Reinterpret the integers of a reading list as measurements.
///
/// Integers below [`Options::small_integer_threshold`] are kept as-is. Others
/// have their low 32 bits reinterpreted as an `f32`; NaN and infinities are
/// kept. Elements that are not integers are skipped, so the result may be
/// shorter than `values`.
pub fn recover_measurements(values: &[CompactValue], options: &Options) -> Vec<Number> {
    values
        .iter()
        .filter_map(CompactValue::as_integer)
        .map(|value| {
            if value < options.small_integer_threshold {
                Number::Integer(value)
            } else {
                Number::Float(f32::from_bits(value as u32))
            }
        })
        .collect()
}

/// Numbers recovered from one per-timestamp reading.
///
/// Readings are laid out as voltage, current and power, followed by further
/// values whose meaning is unknown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measurement(pub Vec<Number>);

impl Measurement {
    pub fn recover(values: &[CompactValue], options: &Options) -> Self {
        Self(recover_measurements(values, options))
    }

    pub fn voltage(&self) -> Option<Number> {
        self.0.first().copied()
    }

    pub fn current(&self) -> Option<Number> {
        self.0.get(1).copied()
    }

    pub fn power(&self) -> Option<Number> {
        self.0.get(2).copied()
    }

    pub fn extra(&self) -> &[Number] {
        self.0.get(3..).unwrap_or_default()
    }
}
