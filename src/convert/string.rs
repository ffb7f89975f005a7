// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! String field converter.
//!
//! Strings pass through unchanged; there is no format spec, and supplying
//! one is a configuration error. The TRIM flag strips surrounding
//! whitespace on decode.

use crate::core::{BindError, DecodeError, Result};

use super::{Converter, ConverterFlags};

/// String converter.
pub struct StringConverter;

impl StringConverter {
    /// Set this flag to trim surrounding whitespace when decoding.
    pub const TRIM: ConverterFlags = ConverterFlags::from_bits(1 << 1);
}

/// Resolved string field configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringConfig {
    trim: bool,
}

impl StringConfig {
    /// Whether surrounding whitespace is trimmed on decode.
    pub fn trim(&self) -> bool {
        self.trim
    }
}

impl Converter for StringConverter {
    type Config = StringConfig;
    type Value = String;

    fn configure(&self, format: Option<&str>, flags: ConverterFlags) -> Result<StringConfig> {
        // An empty format spec means "no spec".
        if let Some(format) = format.filter(|f| !f.is_empty()) {
            return Err(BindError::format_error(
                "string",
                format,
                "string fields take no format",
            ));
        }
        Ok(StringConfig {
            trim: flags.contains(Self::TRIM),
        })
    }

    fn encode(&self, _config: &StringConfig, value: Option<&String>, out: &mut String) {
        if let Some(value) = value {
            out.push_str(value);
        }
    }

    fn decode(
        &self,
        config: &StringConfig,
        raw: &str,
    ) -> std::result::Result<Option<String>, DecodeError> {
        if raw.is_empty() {
            return Ok(None);
        }
        let text = if config.trim { raw.trim() } else { raw };
        Ok(Some(text.to_string()))
    }
}
