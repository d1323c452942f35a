//! Header-keyed CSV table reader
//!
//! Turns raw file text into a sequence of `Record`s (column name →
//! raw string value). Every record in a table carries the full header
//! key set: short rows pad missing trailing values with empty strings,
//! long rows drop fields beyond the header's column count.
//!
//! All failure modes here are recoverable. A malformed data row is
//! logged and skipped; a missing or empty source file degrades to an
//! empty table with a warning. A broken table never aborts the build.

use std::collections::HashMap;
use std::path::Path;

use crate::csv::tokenizer::tokenize_line;
use crate::diag::Diagnostics;

/// One data row keyed by header column names
pub type Record = HashMap<String, String>;

/// Parse full file text into header-keyed records.
///
/// The first non-empty line is the header. Blank lines anywhere are
/// skipped silently; both `\n` and `\r\n` endings are accepted. A row
/// the tokenizer rejects is recorded in `diags` and skipped.
pub fn parse_table(text: &str, name: &str, diags: &mut Diagnostics) -> Vec<Record> {
    // Keep original line numbers for diagnostics, drop blank lines
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    let Some(&(header_line_no, header_line)) = lines.first() else {
        diags.warn(name, None, "table is empty, using no rows");
        return Vec::new();
    };

    let header = match tokenize_line(header_line, header_line_no) {
        Ok(columns) => columns,
        Err(e) => {
            // A header that cannot be tokenized leaves nothing to key
            // rows by, so the whole table degrades to empty.
            diags.error(name, Some(header_line_no), format!("bad header row: {e}"));
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for &(line_no, line) in &lines[1..] {
        let fields = match tokenize_line(line, line_no) {
            Ok(fields) => fields,
            Err(e) => {
                diags.error(name, Some(line_no), format!("skipping malformed row: {e}"));
                continue;
            }
        };

        let mut record = Record::with_capacity(header.len());
        for (i, column) in header.iter().enumerate() {
            let value = fields.get(i).cloned().unwrap_or_default();
            record.insert(column.clone(), value);
        }
        records.push(record);
    }
    records
}

/// Read and parse a source table from disk.
///
/// A missing file yields an empty table plus a warning; so does an
/// unreadable one. Neither is an error for the build.
pub fn load_table(path: &Path, diags: &mut Diagnostics) -> Vec<Record> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if !path.exists() {
        diags.warn(&name, None, "source table not found, using no rows");
        return Vec::new();
    }

    match std::fs::read_to_string(path) {
        Ok(text) => parse_table(&text, &name, diags),
        Err(e) => {
            diags.warn(&name, None, format!("could not read source table ({e}), using no rows"));
            Vec::new()
        }
    }
}
