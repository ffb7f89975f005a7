// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field binding: converter resolution and dispatch.
//!
//! Binding runs each converter's `configure` exactly once per field and
//! stores the resolved config in a closed tagged enum, so per-row encode
//! and decode calls dispatch on a pre-resolved variant with no runtime type
//! inspection. The hosting framework binds at schema time, caches the
//! [`FieldBinding`] (see [`BindingRegistry`](crate::core::BindingRegistry)),
//! and reuses it for every row.

use crate::convert::{
    BoolConfig, BoolConverter, Converter, DateTimeConfig, DateTimeConverter, FloatConfig,
    FloatConverter, IntConfig, IntConverter, StringConfig, StringConverter, UIntConfig,
    UIntConverter,
};
use crate::core::{BindError, DecodeError, FieldKind, FieldValue, Result};
use crate::schema::FieldSpec;

/// Resolved converter configuration, one variant per field kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundConverter {
    /// Boolean field
    Bool(BoolConfig),
    /// Signed integer field
    Int(IntConfig),
    /// Unsigned integer field
    UInt(UIntConfig),
    /// Float field
    Float(FloatConfig),
    /// String field
    String(StringConfig),
    /// Date-time field
    DateTime(DateTimeConfig),
}

/// A field with its converter configuration resolved.
///
/// Immutable after construction and safe to share across concurrent encode
/// and decode calls.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    spec: FieldSpec,
    converter: BoundConverter,
}

impl FieldBinding {
    /// Resolve a field's converter configuration from its declarative spec.
    ///
    /// This is the single configure call for the field; malformed format
    /// specs are rejected here, before any row is processed.
    pub fn bind(spec: FieldSpec) -> Result<Self> {
        let format = spec.format.as_deref();
        let converter = match spec.kind {
            FieldKind::Bool => BoundConverter::Bool(BoolConverter.configure(format, spec.flags)?),
            FieldKind::Int => BoundConverter::Int(IntConverter.configure(format, spec.flags)?),
            FieldKind::UInt => BoundConverter::UInt(UIntConverter.configure(format, spec.flags)?),
            FieldKind::Float => {
                BoundConverter::Float(FloatConverter.configure(format, spec.flags)?)
            }
            FieldKind::String => {
                BoundConverter::String(StringConverter.configure(format, spec.flags)?)
            }
            FieldKind::DateTime => {
                BoundConverter::DateTime(DateTimeConverter.configure(format, spec.flags)?)
            }
        };
        tracing::debug!(field = %spec.name, kind = %spec.kind, "field binding resolved");
        Ok(Self { spec, converter })
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// The declared field kind.
    pub fn kind(&self) -> FieldKind {
        self.spec.kind
    }

    /// The declarative spec this binding was resolved from.
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// The resolved converter configuration.
    pub fn converter(&self) -> &BoundConverter {
        &self.converter
    }

    /// Append the textual form of `value` to `out`.
    ///
    /// `Null` appends nothing for every kind. A non-null value whose type
    /// does not match the bound kind is a [`BindError::TypeMismatch`] - a
    /// programming error, not row data.
    pub fn encode_value(&self, value: &FieldValue, out: &mut String) -> Result<()> {
        match (&self.converter, value) {
            (_, FieldValue::Null) => Ok(()),
            (BoundConverter::Bool(config), FieldValue::Bool(v)) => {
                BoolConverter.encode(config, Some(v), out);
                Ok(())
            }
            (BoundConverter::Int(config), FieldValue::Int(v)) => {
                IntConverter.encode(config, Some(v), out);
                Ok(())
            }
            (BoundConverter::UInt(config), FieldValue::UInt(v)) => {
                UIntConverter.encode(config, Some(v), out);
                Ok(())
            }
            (BoundConverter::Float(config), FieldValue::Float(v)) => {
                FloatConverter.encode(config, Some(v), out);
                Ok(())
            }
            (BoundConverter::String(config), FieldValue::String(v)) => {
                StringConverter.encode(config, Some(v), out);
                Ok(())
            }
            (BoundConverter::DateTime(config), FieldValue::DateTime(v)) => {
                DateTimeConverter.encode(config, Some(v), out);
                Ok(())
            }
            (_, other) => Err(BindError::type_mismatch(
                &self.spec.name,
                self.spec.kind.as_str(),
                other.type_name(),
            )),
        }
    }

    /// Parse field text into a typed value.
    ///
    /// Empty text decodes to [`FieldValue::Null`]. Failures are returned as
    /// row-scoped [`DecodeError`]s so the caller can record them and keep
    /// going.
    pub fn decode_value(&self, raw: &str) -> std::result::Result<FieldValue, DecodeError> {
        match &self.converter {
            BoundConverter::Bool(config) => Ok(BoolConverter
                .decode(config, raw)?
                .map_or(FieldValue::Null, FieldValue::Bool)),
            BoundConverter::Int(config) => Ok(IntConverter
                .decode(config, raw)?
                .map_or(FieldValue::Null, FieldValue::Int)),
            BoundConverter::UInt(config) => Ok(UIntConverter
                .decode(config, raw)?
                .map_or(FieldValue::Null, FieldValue::UInt)),
            BoundConverter::Float(config) => Ok(FloatConverter
                .decode(config, raw)?
                .map_or(FieldValue::Null, FieldValue::Float)),
            BoundConverter::String(config) => Ok(StringConverter
                .decode(config, raw)?
                .map_or(FieldValue::Null, FieldValue::String)),
            BoundConverter::DateTime(config) => Ok(DateTimeConverter
                .decode(config, raw)?
                .map_or(FieldValue::Null, FieldValue::DateTime)),
        }
    }
}
