// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Declarative field metadata.
//!
//! A [`FieldSpec`] is the external description of one field: its name, its
//! declared kind, and the converter-specific format spec and flags. It is
//! the input to schema binding and carries no resolved state.

use serde::{Deserialize, Serialize};

use crate::convert::ConverterFlags;
use crate::core::FieldKind;

/// Declarative metadata for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique within a schema
    pub name: String,
    /// Declared scalar kind
    pub kind: FieldKind,
    /// Converter-specific format spec, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Converter behavior toggles
    #[serde(default)]
    pub flags: ConverterFlags,
}

impl FieldSpec {
    /// Create a spec with no format and no flags.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            format: None,
            flags: ConverterFlags::NONE,
        }
    }

    /// Set the converter format spec.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the converter flags.
    pub fn with_flags(mut self, flags: ConverterFlags) -> Self {
        self.flags = flags;
        self
    }
}
