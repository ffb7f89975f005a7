// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Integer field converters.
//!
//! The format spec is an optional radix given in decimal, `2..=36` (for
//! example `16` for hexadecimal fields). Absent format selects radix 10.
//! Encoding uses lowercase digits above 9; decoding accepts either case.
//!
//! Numbers have no lenient fallback: any non-empty text that does not parse
//! is a decode error. Text that parses in a wider integer but does not fit
//! the target width reports [`DecodeErrorKind::Overflow`](crate::core::DecodeErrorKind).

use crate::core::{BindError, DecodeError, Result};

use super::{Converter, ConverterFlags};

/// Signed 64-bit integer converter.
pub struct IntConverter;

/// Unsigned 64-bit integer converter.
pub struct UIntConverter;

/// Resolved signed integer field configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntConfig {
    radix: u32,
}

impl IntConfig {
    /// Radix used for both encoding and decoding.
    pub fn radix(&self) -> u32 {
        self.radix
    }
}

/// Resolved unsigned integer field configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UIntConfig {
    radix: u32,
}

impl UIntConfig {
    /// Radix used for both encoding and decoding.
    pub fn radix(&self) -> u32 {
        self.radix
    }
}

/// Parse the radix format spec shared by the integer converters.
fn parse_radix(converter: &str, format: Option<&str>) -> Result<u32> {
    // An empty format spec means "no spec".
    let Some(format) = format.filter(|f| !f.is_empty()) else {
        return Ok(10);
    };
    let radix: u32 = format.parse().map_err(|_| {
        BindError::format_error(converter, format, "radix must be a decimal integer")
    })?;
    if !(2..=36).contains(&radix) {
        return Err(BindError::format_error(
            converter,
            format,
            "radix must be in 2..=36",
        ));
    }
    Ok(radix)
}

/// Append `magnitude` in the given radix with lowercase digits.
fn push_radix_digits(magnitude: u128, radix: u32, out: &mut String) {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if magnitude == 0 {
        out.push('0');
        return;
    }

    // 128 digits covers the widest magnitude (u128 in base 2).
    let mut buf = [0u8; 128];
    let mut pos = buf.len();
    let mut rest = magnitude;
    while rest > 0 {
        pos -= 1;
        buf[pos] = DIGITS[(rest % radix as u128) as usize];
        rest /= radix as u128;
    }
    for &digit in &buf[pos..] {
        out.push(digit as char);
    }
}

/// Append a signed value in the given radix.
fn push_signed(value: i64, radix: u32, out: &mut String) {
    if radix == 10 {
        out.push_str(&value.to_string());
        return;
    }
    if value < 0 {
        out.push('-');
    }
    push_radix_digits(value.unsigned_abs() as u128, radix, out);
}

/// Append an unsigned value in the given radix.
fn push_unsigned(value: u64, radix: u32, out: &mut String) {
    if radix == 10 {
        out.push_str(&value.to_string());
        return;
    }
    push_radix_digits(value as u128, radix, out);
}

/// Classify a failed target-width parse: overflow if the text is a valid
/// number in a wider integer, invalid format otherwise.
fn classify_failure(raw: &str, radix: u32) -> DecodeError {
    if i128::from_str_radix(raw, radix).is_ok() {
        DecodeError::overflow(raw)
    } else {
        DecodeError::invalid_format(raw)
    }
}

impl Converter for IntConverter {
    type Config = IntConfig;
    type Value = i64;

    fn configure(&self, format: Option<&str>, _flags: ConverterFlags) -> Result<IntConfig> {
        Ok(IntConfig {
            radix: parse_radix("int", format)?,
        })
    }

    fn encode(&self, config: &IntConfig, value: Option<&i64>, out: &mut String) {
        if let Some(value) = value {
            push_signed(*value, config.radix, out);
        }
    }

    fn decode(
        &self,
        config: &IntConfig,
        raw: &str,
    ) -> std::result::Result<Option<i64>, DecodeError> {
        if raw.is_empty() {
            return Ok(None);
        }
        match i64::from_str_radix(raw, config.radix) {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(classify_failure(raw, config.radix)),
        }
    }
}

impl Converter for UIntConverter {
    type Config = UIntConfig;
    type Value = u64;

    fn configure(&self, format: Option<&str>, _flags: ConverterFlags) -> Result<UIntConfig> {
        Ok(UIntConfig {
            radix: parse_radix("uint", format)?,
        })
    }

    fn encode(&self, config: &UIntConfig, value: Option<&u64>, out: &mut String) {
        if let Some(value) = value {
            push_unsigned(*value, config.radix, out);
        }
    }

    fn decode(
        &self,
        config: &UIntConfig,
        raw: &str,
    ) -> std::result::Result<Option<u64>, DecodeError> {
        if raw.is_empty() {
            return Ok(None);
        }
        match u64::from_str_radix(raw, config.radix) {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(classify_failure(raw, config.radix)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DecodeErrorKind;

    #[test]
    fn test_default_radix() {
        let config = IntConverter.configure(None, ConverterFlags::NONE).unwrap();
        assert_eq!(config.radix(), 10);

        assert_eq!(IntConverter.decode(&config, "42").unwrap(), Some(42));
        assert_eq!(IntConverter.decode(&config, "-42").unwrap(), Some(-42));
        assert_eq!(IntConverter.decode(&config, "").unwrap(), None);
    }

    #[test]
    fn test_empty_format_is_default() {
        let config = IntConverter
            .configure(Some(""), ConverterFlags::NONE)
            .unwrap();
        assert_eq!(config.radix(), 10);
    }

    #[test]
    fn test_malformed_radix() {
        for format in ["ten", "1", "37", "-2", "1.5"] {
            assert!(
                IntConverter
                    .configure(Some(format), ConverterFlags::NONE)
                    .is_err(),
                "radix {format:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_round_trip() {
        let config = IntConverter
            .configure(Some("16"), ConverterFlags::NONE)
            .unwrap();

        let mut out = String::new();
        IntConverter.encode(&config, Some(&255), &mut out);
        assert_eq!(out, "ff");
        assert_eq!(IntConverter.decode(&config, "ff").unwrap(), Some(255));
        // Decode accepts either case.
        assert_eq!(IntConverter.decode(&config, "FF").unwrap(), Some(255));

        out.clear();
        IntConverter.encode(&config, Some(&-255), &mut out);
        assert_eq!(out, "-ff");
        assert_eq!(IntConverter.decode(&config, "-ff").unwrap(), Some(-255));
    }

    #[test]
    fn test_binary_radix() {
        let config = UIntConverter
            .configure(Some("2"), ConverterFlags::NONE)
            .unwrap();

        let mut out = String::new();
        UIntConverter.encode(&config, Some(&5), &mut out);
        assert_eq!(out, "101");
        assert_eq!(UIntConverter.decode(&config, "101").unwrap(), Some(5));
    }

    #[test]
    fn test_encode_zero_and_null() {
        let config = IntConverter
            .configure(Some("16"), ConverterFlags::NONE)
            .unwrap();

        let mut out = String::new();
        IntConverter.encode(&config, Some(&0), &mut out);
        assert_eq!(out, "0");

        out.clear();
        IntConverter.encode(&config, None, &mut out);
        assert_eq!(out, "");
    }

    #[test]
    fn test_invalid_text() {
        let config = IntConverter.configure(None, ConverterFlags::NONE).unwrap();
        let err = IntConverter.decode(&config, "12x").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidFormat);
        assert_eq!(err.raw(), Some("12x"));
    }

    #[test]
    fn test_overflow_classification() {
        let config = IntConverter.configure(None, ConverterFlags::NONE).unwrap();
        let err = IntConverter
            .decode(&config, "9223372036854775808")
            .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Overflow);
    }

    #[test]
    fn test_uint_rejects_negative_as_overflow() {
        let config = UIntConverter.configure(None, ConverterFlags::NONE).unwrap();
        let err = UIntConverter.decode(&config, "-1").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Overflow);
    }

    #[test]
    fn test_extreme_values_round_trip() {
        for radix in [None, Some("2"), Some("16"), Some("36")] {
            let config = IntConverter.configure(radix, ConverterFlags::NONE).unwrap();
            for value in [i64::MIN, -1, 0, 1, i64::MAX] {
                let mut out = String::new();
                IntConverter.encode(&config, Some(&value), &mut out);
                assert_eq!(
                    IntConverter.decode(&config, &out).unwrap(),
                    Some(value),
                    "radix {radix:?}, value {value}"
                );
            }

            let config = UIntConverter
                .configure(radix, ConverterFlags::NONE)
                .unwrap();
            for value in [0, 1, u64::MAX] {
                let mut out = String::new();
                UIntConverter.encode(&config, Some(&value), &mut out);
                assert_eq!(UIntConverter.decode(&config, &out).unwrap(), Some(value));
            }
        }
    }
}
