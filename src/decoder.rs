//! Splits raw GEDCOM text into decoded line records.
//!
//! Input is expected to be UTF-8 text; character-set transcoding (ANSEL,
//! UTF-16 variants) is the concern of an upstream reader and is not handled
//! here. A byte-order mark on the first line is stripped, blank lines are
//! skipped, and physical line numbers are preserved for diagnostics.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::instrument;

use crate::errors::{ParseError, ParseResult};
use crate::line::LineRecord;

fn decode_physical_line(
    raw: &str,
    line_number: usize,
    records: &mut Vec<LineRecord>,
) -> ParseResult<()> {
    let line = if line_number == 1 {
        raw.trim_start_matches('\u{feff}')
    } else {
        raw
    };
    if line.trim().is_empty() {
        return Ok(());
    }
    records.push(LineRecord::parse(line, line_number)?);
    Ok(())
}

/// Decode a full GEDCOM text into line records.
#[instrument(level = "debug", skip(input))]
pub fn decode_str(input: &str) -> ParseResult<Vec<LineRecord>> {
    let mut records = Vec::new();
    for (i, raw) in input.lines().enumerate() {
        decode_physical_line(raw, i + 1, &mut records)?;
    }
    Ok(records)
}

/// Decode GEDCOM text from a buffered reader.
#[instrument(level = "debug", skip(reader))]
pub fn decode_reader<R: BufRead>(reader: R) -> ParseResult<Vec<LineRecord>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        decode_physical_line(&line, i + 1, &mut records)?;
    }
    Ok(records)
}

/// Decode a GEDCOM file into line records.
#[instrument(level = "debug")]
pub fn decode_file(path: &Path) -> ParseResult<Vec<LineRecord>> {
    if !path.exists() {
        return Err(ParseError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    decode_reader(BufReader::new(file))
}
