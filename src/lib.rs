// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Rowcodec
//!
//! Field-level value conversion library for row-oriented text serialization.
//!
//! This library is the converter layer of a row-serialization stack: it turns
//! typed scalar values into their textual field representation and parses
//! field text back into typed values, driven by per-field configuration that
//! is resolved once from declarative metadata. Row assembly, quoting, and
//! file I/O belong to the hosting framework, not to this crate.
//!
//! ## Architecture
//!
//! The library is organized into three layers:
//! - `core/` - value model, error channels, and the binding registry
//! - `convert/` - the converter family (bool, int, uint, float, string,
//!   date-time), each following the same configure/encode/decode contract
//! - `schema/` - declarative field specs, one-shot binding resolution, and
//!   a parser for textual declaration blocks
//!
//! Configuration is resolved exactly once per field, at schema-binding time;
//! encode and decode then run per row against the immutable resolved config.
//! Bind-time failures ([`BindError`]) are fatal and synchronous; decode
//! failures ([`DecodeError`]) are row-scoped data, returned so a bulk parse
//! can record them and continue.
//!
//! ## Example: Binding and converting a field
//!
//! ```
//! use rowcodec::schema::{FieldBinding, FieldSpec};
//! use rowcodec::{FieldKind, FieldValue};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = FieldSpec::new("active", FieldKind::Bool).with_format("Y,N");
//! let binding = FieldBinding::bind(spec)?;
//!
//! assert_eq!(binding.decode_value("Y")?, FieldValue::Bool(true));
//! assert_eq!(binding.decode_value("")?, FieldValue::Null);
//!
//! let mut out = String::new();
//! binding.encode_value(&FieldValue::Bool(false), &mut out)?;
//! assert_eq!(out, "N");
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Declaration blocks
//!
//! ```
//! use rowcodec::schema::bind_declarations;
//! use rowcodec::FieldValue;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bindings = bind_declarations(
//!     "bool active strict format=1,0\n\
//!      uint id\n\
//!      string name trim\n",
//! )?;
//!
//! let decoded: Vec<_> = bindings
//!     .iter()
//!     .zip(["1", "42", " Ada "])
//!     .map(|(binding, raw)| binding.decode_value(raw))
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(decoded[0], FieldValue::Bool(true));
//! assert_eq!(decoded[1], FieldValue::UInt(42));
//! assert_eq!(decoded[2], FieldValue::String("Ada".to_string()));
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{
    BindError, BindingRegistry, DecodeError, DecodeErrorKind, FieldKind, FieldValue, Result,
};

// Converter family
pub mod convert;

pub use convert::{Converter, ConverterFlags};

// Field declaration and binding
pub mod schema;

pub use schema::{FieldBinding, FieldSpec};
