// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Boolean field converter.
//!
//! The format spec is two non-empty tokens separated by a comma. The token
//! before the comma is written for true, the one after for false; the same
//! tokens are matched exactly (case-sensitive) on decode. For example a
//! format of `1,0` writes and reads `1` for true and `0` for false. Absent
//! format selects `true,false`.

use crate::core::{BindError, DecodeError, Result};

use super::{Converter, ConverterFlags};

/// Boolean converter.
pub struct BoolConverter;

impl BoolConverter {
    /// Set this flag if unrecognized text should produce a decode error.
    /// Default is that an unrecognized value decodes to false.
    pub const PARSE_ERROR_ON_INVALID: ConverterFlags = ConverterFlags::from_bits(1 << 1);
}

/// Resolved boolean field configuration.
///
/// Immutable after construction; `true_text` and `false_text` are guaranteed
/// non-empty and distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolConfig {
    true_text: String,
    false_text: String,
    error_on_invalid: bool,
}

impl BoolConfig {
    /// Token written and matched for true.
    pub fn true_text(&self) -> &str {
        &self.true_text
    }

    /// Token written and matched for false.
    pub fn false_text(&self) -> &str {
        &self.false_text
    }

    /// Whether unrecognized text produces a decode error.
    pub fn error_on_invalid(&self) -> bool {
        self.error_on_invalid
    }
}

impl Converter for BoolConverter {
    type Config = BoolConfig;
    type Value = bool;

    fn configure(&self, format: Option<&str>, flags: ConverterFlags) -> Result<BoolConfig> {
        // An empty format spec means "no spec".
        let (true_text, false_text) = match format.filter(|f| !f.is_empty()) {
            None => ("true".to_string(), "false".to_string()),
            Some(format) => {
                let mut parts = format.split(',');
                let (Some(true_text), Some(false_text), None) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Err(BindError::format_error(
                        "bool",
                        format,
                        "expected exactly two comma-separated tokens (T,F)",
                    ));
                };
                if true_text.is_empty() || false_text.is_empty() {
                    return Err(BindError::format_error(
                        "bool",
                        format,
                        "true and false tokens must be non-empty",
                    ));
                }
                if true_text == false_text {
                    return Err(BindError::format_error(
                        "bool",
                        format,
                        "true and false tokens must be distinct",
                    ));
                }
                (true_text.to_string(), false_text.to_string())
            }
        };

        Ok(BoolConfig {
            true_text,
            false_text,
            error_on_invalid: flags.contains(Self::PARSE_ERROR_ON_INVALID),
        })
    }

    fn encode(&self, config: &BoolConfig, value: Option<&bool>, out: &mut String) {
        match value {
            None => {}
            Some(true) => out.push_str(&config.true_text),
            Some(false) => out.push_str(&config.false_text),
        }
    }

    fn decode(
        &self,
        config: &BoolConfig,
        raw: &str,
    ) -> std::result::Result<Option<bool>, DecodeError> {
        if raw.is_empty() {
            Ok(None)
        } else if raw == config.true_text {
            Ok(Some(true))
        } else if raw == config.false_text {
            Ok(Some(false))
        } else if config.error_on_invalid {
            Err(DecodeError::invalid_format(raw))
        } else {
            // Lenient mode: unrecognized text decodes to false, silently.
            Ok(Some(false))
        }
    }
}
