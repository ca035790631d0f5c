// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Emits `{name, status, message}` per check - a single object for one
//! check, an array for aggregates. Buffered and written at the end;
//! nothing streams in JSON mode.

use std::io::Write;

use crate::aggregate::ReportEntry;

/// Write one check's result as a JSON object.
pub fn write_entry<W: Write>(writer: &mut W, entry: &ReportEntry) -> std::io::Result<()> {
    let json = serde_json::to_string(entry).map_err(std::io::Error::other)?;
    writeln!(writer, "{json}")
}

/// Write an aggregate report as a JSON array.
pub fn write_report<W: Write>(writer: &mut W, entries: &[ReportEntry]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(std::io::Error::other)?;
    writeln!(writer, "{json}")
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
