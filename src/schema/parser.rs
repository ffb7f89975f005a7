// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Parser for textual field declarations.
//!
//! One declaration per line:
//!
//! ```text
//! <kind> <name> [<option>...] [format=<spec>]
//! ```
//!
//! Blank lines and full-line `#` comments are skipped. Options are bare
//! words valid for the declared kind (`strict` for bool, `trim` for string).
//! `format=` must come last: everything after the `=` to the end of the
//! line is the converter format spec, verbatim, so specs may contain spaces
//! (e.g. a strftime pattern).
//!
//! ```text
//! # account export fields
//! bool   active strict format=Y,N
//! uint   id
//! string name trim
//! datetime created format=%d/%m/%Y %H:%M:%S
//! ```

use std::collections::HashSet;

use crate::convert::{BoolConverter, ConverterFlags, StringConverter};
use crate::core::{BindError, FieldKind, Result};
use crate::schema::{FieldBinding, FieldSpec};

/// Parse a declaration block into field specs.
///
/// Field names must be unique within the block.
pub fn parse_declarations(text: &str) -> Result<Vec<FieldSpec>> {
    let mut specs = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let context = format!("line {}", idx + 1);
        let spec = parse_line(line, &context)?;
        if !seen.insert(spec.name.clone()) {
            return Err(BindError::declaration(
                context,
                format!("duplicate field name '{}'", spec.name),
            ));
        }
        specs.push(spec);
    }

    Ok(specs)
}

/// Parse a declaration block and resolve every field binding.
pub fn bind_declarations(text: &str) -> Result<Vec<FieldBinding>> {
    parse_declarations(text)?
        .into_iter()
        .map(FieldBinding::bind)
        .collect()
}

/// Parse a single non-empty declaration line.
fn parse_line(line: &str, context: &str) -> Result<FieldSpec> {
    let Some((kind_token, rest)) = split_word(line) else {
        return Err(BindError::declaration(context, "empty declaration"));
    };
    let kind =
        FieldKind::try_from_str(kind_token).ok_or_else(|| BindError::unknown_kind(kind_token))?;

    let Some((name, mut rest)) = split_word(rest) else {
        return Err(BindError::declaration(context, "missing field name"));
    };
    if name.contains('=') {
        return Err(BindError::declaration(context, "missing field name"));
    }

    let mut flags = ConverterFlags::NONE;
    let mut format = None;
    while !rest.is_empty() {
        if let Some(spec) = rest.strip_prefix("format=") {
            format = Some(spec.to_string());
            break;
        }
        let Some((word, tail)) = split_word(rest) else {
            break;
        };
        flags = flags | option_flag(word, kind, context)?;
        rest = tail;
    }

    Ok(FieldSpec {
        name: name.to_string(),
        kind,
        format,
        flags,
    })
}

/// Map a bare option word to its converter flag for the declared kind.
fn option_flag(word: &str, kind: FieldKind, context: &str) -> Result<ConverterFlags> {
    match (word, kind) {
        ("strict", FieldKind::Bool) => Ok(BoolConverter::PARSE_ERROR_ON_INVALID),
        ("trim", FieldKind::String) => Ok(StringConverter::TRIM),
        _ => Err(BindError::declaration(
            context,
            format!("unknown option '{word}' for {kind} field"),
        )),
    }
}

/// Split the leading whitespace-delimited word off a trimmed string.
fn split_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(i) => Some((&s[..i], s[i..].trim_start())),
        None => Some((s, "")),
    }
}
