// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout rowcodec.
//!
//! This module provides the foundational types for the library:
//! - [`BindError`] / [`DecodeError`] - the two error channels
//! - [`FieldValue`] - nullable typed scalar values
//! - [`FieldKind`] - declared field types
//! - [`BindingRegistry`] - per-field binding cache

pub mod error;
pub mod registry;
pub mod value;

pub use error::{BindError, DecodeError, DecodeErrorKind, Result};
pub use registry::BindingRegistry;
pub use value::{FieldKind, FieldValue};
