// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Date-time field converter.
//!
//! The format spec is a chrono strftime pattern; absent format selects
//! `%Y-%m-%dT%H:%M:%S`. The pattern is validated at configure time by
//! formatting a probe value, so an unusable pattern is a bind error rather
//! than a per-row failure.
//!
//! Date-only patterns (e.g. `%Y-%m-%d`) are supported: decoding fills in
//! midnight for the missing time component.

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::{BindError, DecodeError, Result};

use super::{Converter, ConverterFlags};

/// Pattern used when no format spec is given.
const DEFAULT_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Date-time converter.
pub struct DateTimeConverter;

/// Resolved date-time field configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeConfig {
    pattern: String,
}

impl DateTimeConfig {
    /// The strftime pattern used for both encoding and decoding.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Check that a pattern can format a `NaiveDateTime`.
///
/// chrono reports unusable patterns only when formatting, so a fixed probe
/// value is rendered once. Pattern validity does not depend on the value
/// being formatted.
fn validate_pattern(pattern: &str) -> Result<()> {
    use std::fmt::Write as _;

    let probe = NaiveDate::from_ymd_opt(2000, 1, 2)
        .and_then(|date| date.and_hms_opt(3, 4, 5))
        .ok_or_else(|| BindError::Other("probe date-time construction failed".to_string()))?;

    let mut buf = String::new();
    write!(buf, "{}", probe.format(pattern)).map_err(|_| {
        BindError::format_error("datetime", pattern, "not a valid strftime pattern")
    })?;
    Ok(())
}

impl Converter for DateTimeConverter {
    type Config = DateTimeConfig;
    type Value = NaiveDateTime;

    fn configure(&self, format: Option<&str>, _flags: ConverterFlags) -> Result<DateTimeConfig> {
        // An empty format spec means "no spec".
        let pattern = format
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_PATTERN);
        validate_pattern(pattern)?;
        Ok(DateTimeConfig {
            pattern: pattern.to_string(),
        })
    }

    fn encode(&self, config: &DateTimeConfig, value: Option<&NaiveDateTime>, out: &mut String) {
        use std::fmt::Write as _;

        if let Some(value) = value {
            // The pattern was validated at configure time; formatting cannot
            // fail here.
            let _ = write!(out, "{}", value.format(&config.pattern));
        }
    }

    fn decode(
        &self,
        config: &DateTimeConfig,
        raw: &str,
    ) -> std::result::Result<Option<NaiveDateTime>, DecodeError> {
        if raw.is_empty() {
            return Ok(None);
        }
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, &config.pattern) {
            return Ok(Some(value));
        }
        // Date-only pattern: retry as a bare date at midnight.
        NaiveDate::parse_from_str(raw, &config.pattern)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Some)
            .ok_or_else(|| DecodeError::invalid_format(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DecodeErrorKind;

    fn probe() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 30, 45)
            .unwrap()
    }

    #[test]
    fn test_default_pattern() {
        let config = DateTimeConverter
            .configure(None, ConverterFlags::NONE)
            .unwrap();
        assert_eq!(config.pattern(), "%Y-%m-%dT%H:%M:%S");

        let mut out = String::new();
        DateTimeConverter.encode(&config, Some(&probe()), &mut out);
        assert_eq!(out, "2024-03-15T10:30:45");
        assert_eq!(
            DateTimeConverter.decode(&config, &out).unwrap(),
            Some(probe())
        );
    }

    #[test]
    fn test_custom_pattern() {
        let config = DateTimeConverter
            .configure(Some("%d/%m/%Y %H:%M:%S"), ConverterFlags::NONE)
            .unwrap();

        let mut out = String::new();
        DateTimeConverter.encode(&config, Some(&probe()), &mut out);
        assert_eq!(out, "15/03/2024 10:30:45");
        assert_eq!(
            DateTimeConverter.decode(&config, &out).unwrap(),
            Some(probe())
        );
    }

    #[test]
    fn test_date_only_pattern() {
        let config = DateTimeConverter
            .configure(Some("%Y-%m-%d"), ConverterFlags::NONE)
            .unwrap();

        let mut out = String::new();
        DateTimeConverter.encode(&config, Some(&probe()), &mut out);
        assert_eq!(out, "2024-03-15");

        let midnight = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            DateTimeConverter.decode(&config, "2024-03-15").unwrap(),
            Some(midnight)
        );
    }

    #[test]
    fn test_invalid_pattern_rejected_at_configure() {
        // Unknown specifier
        assert!(DateTimeConverter
            .configure(Some("%Q"), ConverterFlags::NONE)
            .is_err());
        // Timezone specifier is not renderable for a naive date-time
        assert!(DateTimeConverter
            .configure(Some("%Y %Z"), ConverterFlags::NONE)
            .is_err());
    }

    #[test]
    fn test_empty_is_null() {
        let config = DateTimeConverter
            .configure(None, ConverterFlags::NONE)
            .unwrap();
        assert_eq!(DateTimeConverter.decode(&config, "").unwrap(), None);

        let mut out = String::new();
        DateTimeConverter.encode(&config, None, &mut out);
        assert_eq!(out, "");
    }

    #[test]
    fn test_invalid_text() {
        let config = DateTimeConverter
            .configure(None, ConverterFlags::NONE)
            .unwrap();
        let err = DateTimeConverter
            .decode(&config, "not a date")
            .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidFormat);
        assert_eq!(err.raw(), Some("not a date"));
    }
}
