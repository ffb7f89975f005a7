// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Scalar value converters.
//!
//! This module provides the converter family for turning typed values into
//! field text and back:
//! - [`boolean`] - boolean fields with configurable true/false tokens
//! - [`integer`] - signed and unsigned integers with optional radix
//! - [`float`] - floats with optional encode precision
//! - [`string`] - strings with optional input trimming
//! - [`datetime`] - date-times with a configurable strftime pattern
//!
//! ## Architecture
//!
//! Every converter follows the same three-call contract:
//!
//! - **configure** - derive an immutable config from the field's format spec
//!   and flags, once per field binding. Malformed specs fail fast with a
//!   [`BindError`](crate::core::BindError).
//! - **encode** - append a value's text to the output sink. `None` appends
//!   nothing; encoding never fails.
//! - **decode** - parse field text back into a value. Empty text is `None`;
//!   failures are returned as row-scoped [`DecodeError`]s, never raised.
//!
//! Converters are stateless unit structs. All per-field state lives in the
//! config, which is immutable after construction and safe to share across
//! concurrent encode/decode calls.

pub mod boolean;
pub mod datetime;
pub mod float;
pub mod integer;
pub mod string;

pub use boolean::{BoolConfig, BoolConverter};
pub use datetime::{DateTimeConfig, DateTimeConverter};
pub use float::{FloatConfig, FloatConverter};
pub use integer::{IntConfig, IntConverter, UIntConfig, UIntConverter};
pub use string::{StringConfig, StringConverter};

use serde::{Deserialize, Serialize};

use crate::core::{DecodeError, Result};

/// Per-field behavioral toggles, carried as a bitset.
///
/// Each converter documents the bit positions it recognizes; all other bits
/// are ignored and passed through untouched, never treated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConverterFlags(u64);

impl ConverterFlags {
    /// No flags set.
    pub const NONE: ConverterFlags = ConverterFlags(0);

    /// Create flags from a raw bitset.
    pub const fn from_bits(bits: u64) -> Self {
        ConverterFlags(bits)
    }

    /// The raw bitset.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Check whether all bits of `other` are set.
    pub const fn contains(self, other: ConverterFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Combine two flag sets.
    pub const fn with(self, other: ConverterFlags) -> Self {
        ConverterFlags(self.0 | other.0)
    }
}

impl std::ops::BitOr for ConverterFlags {
    type Output = ConverterFlags;

    fn bitor(self, rhs: ConverterFlags) -> ConverterFlags {
        self.with(rhs)
    }
}

/// Unified converter interface for field-level value conversion.
///
/// Implementations map one scalar type to and from its textual field
/// representation under a resolved configuration.
///
/// # Type Parameters (associated)
///
/// * `Config` - immutable per-field configuration, resolved once at binding
/// * `Value` - the scalar type this converter handles
pub trait Converter {
    /// Immutable per-field configuration.
    type Config: Send + Sync;

    /// The scalar type this converter handles.
    type Value;

    /// Resolve a configuration from the field's format spec and flags.
    ///
    /// Pure and fail-fast: same inputs always produce an equivalent config,
    /// and a malformed spec is rejected before any row is processed. Invoked
    /// once per field binding; callers cache the result.
    fn configure(&self, format: Option<&str>, flags: ConverterFlags) -> Result<Self::Config>;

    /// Append the textual form of `value` to `out`.
    ///
    /// `None` appends nothing (null encodes as empty text). Strictly
    /// additive: prior sink contents are neither inspected nor reset.
    fn encode(&self, config: &Self::Config, value: Option<&Self::Value>, out: &mut String);

    /// Parse field text into a value.
    ///
    /// Empty text decodes to `Ok(None)` for every converter, independent of
    /// configuration. Failures are returned, never raised, so the caller can
    /// record them and continue with the next field or row.
    fn decode(
        &self,
        config: &Self::Config,
        raw: &str,
    ) -> std::result::Result<Option<Self::Value>, DecodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_contains() {
        let strict = ConverterFlags::from_bits(1 << 1);
        let trim = ConverterFlags::from_bits(1 << 2);

        assert!(ConverterFlags::NONE.contains(ConverterFlags::NONE));
        assert!(strict.contains(strict));
        assert!(!strict.contains(trim));
        assert!((strict | trim).contains(strict));
        assert!((strict | trim).contains(trim));
    }

    #[test]
    fn test_flags_bits_round_trip() {
        let flags = ConverterFlags::from_bits(0b1010);
        assert_eq!(flags.bits(), 0b1010);
        assert_eq!(ConverterFlags::NONE.bits(), 0);
    }

    #[test]
    fn test_flags_with() {
        let a = ConverterFlags::from_bits(0b01);
        let b = ConverterFlags::from_bits(0b10);
        assert_eq!(a.with(b).bits(), 0b11);
        assert_eq!((a | b).bits(), 0b11);
    }

    #[test]
    fn test_flags_serde() {
        let flags = ConverterFlags::from_bits(6);
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, "6");
        let back: ConverterFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flags);
    }
}
