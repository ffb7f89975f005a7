// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Float field converter.
//!
//! The format spec is an optional encode precision: the number of decimal
//! places to write, `0..=17` (for example `3` writes `1.500`). Absent format
//! writes the shortest representation that round-trips. Precision affects
//! encoding only; decoding always accepts any `f64` text.

use crate::core::{BindError, DecodeError, Result};

use super::{Converter, ConverterFlags};

/// 64-bit float converter.
pub struct FloatConverter;

/// Resolved float field configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatConfig {
    precision: Option<usize>,
}

impl FloatConfig {
    /// Decimal places written on encode, if fixed.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }
}

impl Converter for FloatConverter {
    type Config = FloatConfig;
    type Value = f64;

    fn configure(&self, format: Option<&str>, _flags: ConverterFlags) -> Result<FloatConfig> {
        // An empty format spec means "no spec".
        let precision = match format.filter(|f| !f.is_empty()) {
            None => None,
            Some(format) => {
                let precision: usize = format.parse().map_err(|_| {
                    BindError::format_error(
                        "float",
                        format,
                        "precision must be a decimal integer",
                    )
                })?;
                if precision > 17 {
                    return Err(BindError::format_error(
                        "float",
                        format,
                        "precision must be in 0..=17",
                    ));
                }
                Some(precision)
            }
        };
        Ok(FloatConfig { precision })
    }

    fn encode(&self, config: &FloatConfig, value: Option<&f64>, out: &mut String) {
        if let Some(value) = value {
            match config.precision {
                Some(precision) => out.push_str(&format!("{value:.precision$}")),
                None => out.push_str(&value.to_string()),
            }
        }
    }

    fn decode(
        &self,
        _config: &FloatConfig,
        raw: &str,
    ) -> std::result::Result<Option<f64>, DecodeError> {
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<f64>()
            .map(Some)
            .map_err(|_| DecodeError::invalid_format(raw))
    }
}
