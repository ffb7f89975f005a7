// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field value type system.
//!
//! Provides the nullable scalar value representation shared by all
//! converters. All variants are serde-serializable.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed scalar field value.
///
/// This is the value side of the converter contract: encoders render one of
/// these into field text, decoders produce one from field text.
///
/// # Design Principles
///
/// - **Nullable**: [`FieldValue::Null`] represents "field absent/blank" and
///   round-trips with empty text in every converter
/// - **Serde support**: all variants are serializable for downstream use
/// - **Owned types**: uses owned `String` for clarity and simplicity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    // Boolean
    Bool(bool),

    // Signed integer
    Int(i64),

    // Unsigned integer
    UInt(u64),

    // Floating point
    Float(f64),

    // String (UTF-8)
    String(String),

    // Date-time without timezone
    DateTime(NaiveDateTime),

    // Field absent/blank
    Null,
}

impl FieldValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is a numeric type (integers or floats).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldValue::Int(_) | FieldValue::UInt(_) | FieldValue::Float(_)
        )
    }

    /// Check if this value is an integer type (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::UInt(_))
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Try to get the inner boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (for integer types only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::UInt(v) => {
                if *v <= i64::MAX as u64 {
                    Some(*v as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Try to convert this value to u64 (for non-negative integers only).
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt(v) => Some(*v),
            FieldValue::Int(v) => {
                if *v >= 0 {
                    Some(*v as u64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::UInt(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner date-time value.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    // ========================================================================
    // Kind Helpers
    // ========================================================================

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::UInt(_) => "uint",
            FieldValue::Float(_) => "float",
            FieldValue::String(_) => "string",
            FieldValue::DateTime(_) => "datetime",
            FieldValue::Null => "null",
        }
    }

    /// Get the declared kind this value belongs to, if any.
    ///
    /// `Null` has no kind of its own; it is valid for every field.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldValue::Bool(_) => Some(FieldKind::Bool),
            FieldValue::Int(_) => Some(FieldKind::Int),
            FieldValue::UInt(_) => Some(FieldKind::UInt),
            FieldValue::Float(_) => Some(FieldKind::Float),
            FieldValue::String(_) => Some(FieldKind::String),
            FieldValue::DateTime(_) => Some(FieldKind::DateTime),
            FieldValue::Null => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::UInt(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::String(v) => write!(f, "\"{v}\""),
            FieldValue::DateTime(v) => write!(f, "{v}"),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

// =============================================================================
// Field Kind Enum
// =============================================================================

/// Declared scalar type of a field.
///
/// Attached to a field declaration and used to select the converter variant
/// once, at schema-binding time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit unsigned integer
    UInt,
    /// 64-bit float
    Float,
    /// String
    String,
    /// Date-time without timezone
    DateTime,
}

impl FieldKind {
    /// Parse a field kind from a declaration type name.
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s {
            "bool" => Some(FieldKind::Bool),
            "int" => Some(FieldKind::Int),
            "uint" => Some(FieldKind::UInt),
            "float" => Some(FieldKind::Float),
            "string" => Some(FieldKind::String),
            "datetime" => Some(FieldKind::DateTime),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::UInt => "uint",
            FieldKind::Float => "float",
            FieldKind::String => "string",
            FieldKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
