// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for rowcodec.
//!
//! Two error channels with different lifetimes:
//! - [`BindError`] - fatal, raised at schema-binding time (malformed format
//!   specs, unknown field kinds, declaration parse failures). These indicate
//!   a programming or schema error and propagate synchronously.
//! - [`DecodeError`] - recoverable, scoped to one decode call. These are
//!   data, returned to the caller so a bulk parse can record the failure and
//!   continue with the next field or row.

use std::fmt;

/// Errors raised while resolving a field binding.
///
/// A bind error means the field cannot be used until its declaration is
/// corrected; it is never produced by row data.
#[derive(Debug, Clone)]
pub enum BindError {
    /// Malformed converter format spec
    FormatError {
        /// Converter that rejected the spec (e.g. "bool", "int")
        converter: String,
        /// The offending format spec
        format: String,
        /// Why it was rejected
        reason: String,
    },

    /// Field kind name not recognized
    UnknownKind {
        /// Kind name that was not found
        kind_name: String,
    },

    /// Parse error in a field declaration
    DeclarationError {
        /// What was being parsed (e.g. "line 3")
        context: String,
        /// Error message
        message: String,
    },

    /// Value type does not match the bound field kind
    TypeMismatch {
        /// Field name
        field_name: String,
        /// Kind the field was bound to
        expected: String,
        /// Type of the value that was supplied
        actual: String,
    },

    /// Other error
    Other(String),
}

impl BindError {
    /// Create a format spec error.
    pub fn format_error(
        converter: impl Into<String>,
        format: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BindError::FormatError {
            converter: converter.into(),
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Create an "unknown kind" error.
    pub fn unknown_kind(kind_name: impl Into<String>) -> Self {
        BindError::UnknownKind {
            kind_name: kind_name.into(),
        }
    }

    /// Create a declaration parse error.
    pub fn declaration(context: impl Into<String>, message: impl Into<String>) -> Self {
        BindError::DeclarationError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(
        field_name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        BindError::TypeMismatch {
            field_name: field_name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            BindError::FormatError {
                converter,
                format,
                reason,
            } => vec![
                ("converter", converter.clone()),
                ("format", format.clone()),
                ("reason", reason.clone()),
            ],
            BindError::UnknownKind { kind_name } => vec![("kind", kind_name.clone())],
            BindError::DeclarationError { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            BindError::TypeMismatch {
                field_name,
                expected,
                actual,
            } => vec![
                ("field", field_name.clone()),
                ("expected", expected.clone()),
                ("actual", actual.clone()),
            ],
            BindError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::FormatError {
                converter,
                format,
                reason,
            } => {
                write!(f, "Invalid {converter} format '{format}': {reason}")
            }
            BindError::UnknownKind { kind_name } => {
                write!(f, "Unknown field kind: '{kind_name}'")
            }
            BindError::DeclarationError { context, message } => {
                write!(f, "Declaration error in {context}: {message}")
            }
            BindError::TypeMismatch {
                field_name,
                expected,
                actual,
            } => write!(
                f,
                "Type mismatch for field '{field_name}': bound as {expected}, got {actual}"
            ),
            BindError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for BindError {}

/// Result type for bind-time rowcodec operations.
pub type Result<T> = std::result::Result<T, BindError>;

/// Classification of a per-field decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Text does not match the field's expected representation
    InvalidFormat,
    /// Numeric text parsed but does not fit the target width
    Overflow,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::InvalidFormat => write!(f, "invalid format"),
            DecodeErrorKind::Overflow => write!(f, "overflow"),
        }
    }
}

/// A recoverable, row-scoped decode failure.
///
/// Returned from decode calls instead of being raised, so the caller can
/// record it against the current row and keep parsing. Carries the raw text
/// that failed when it is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    raw: Option<String>,
}

impl DecodeError {
    /// Create an invalid-format error carrying the raw text.
    pub fn invalid_format(raw: impl Into<String>) -> Self {
        DecodeError {
            kind: DecodeErrorKind::InvalidFormat,
            raw: Some(raw.into()),
        }
    }

    /// Create an overflow error carrying the raw text.
    pub fn overflow(raw: impl Into<String>) -> Self {
        DecodeError {
            kind: DecodeErrorKind::Overflow,
            raw: Some(raw.into()),
        }
    }

    /// The failure classification.
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// The raw field text that failed to decode, if captured.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "Decode failed ({}): '{raw}'", self.kind),
            None => write!(f, "Decode failed ({})", self.kind),
        }
    }
}

impl std::error::Error for DecodeError {}
