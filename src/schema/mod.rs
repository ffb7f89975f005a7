// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field declaration and binding.
//!
//! This module is the schema-time side of the converter contract:
//! - [`FieldSpec`] - declarative per-field metadata (kind, format, flags)
//! - [`FieldBinding`] - the spec with its converter configuration resolved,
//!   created once and reused for every row
//! - [`parser`] - textual declaration blocks for building specs

pub mod binding;
pub mod field;
pub mod parser;

pub use binding::{BoundConverter, FieldBinding};
pub use field::FieldSpec;
pub use parser::{bind_declarations, parse_declarations};
