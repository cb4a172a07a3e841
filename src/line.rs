//! Tokenizing of physical GEDCOM lines.
//!
//! The GEDCOM line grammar is `LEVEL [@XREF@] TAG [VALUE]`, delimited by
//! single spaces. There are no closing tags; depth is carried entirely by
//! the level number, which is why [`LineRecord`] keeps it verbatim.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{ParseError, ParseResult};

/// One decoded GEDCOM line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Nesting depth declared on the line
    pub level: u32,
    /// Cross-reference id including its `@` delimiters, e.g. `@I1@`
    pub id: Option<String>,
    /// Tag token, standard or custom (e.g. `NAME`, `_LOC`)
    pub tag: String,
    /// Everything after the tag and its delimiter space, untrimmed.
    /// `None` when the line ends at the tag; `Some("")` when a single
    /// trailing space follows it (empty CONT payloads look like this).
    pub value: Option<String>,
    /// 1-based physical line number, kept for diagnostics
    pub line_number: usize,
}

/// Split off the next space-delimited token. The remainder is `None` when
/// no delimiter was present, which is distinct from an empty remainder.
fn split_token(s: &str) -> (&str, Option<&str>) {
    match s.split_once(' ') {
        Some((token, rest)) => (token, Some(rest)),
        None => (s, None),
    }
}

impl LineRecord {
    /// Tokenize one physical line into its component parts.
    pub fn parse(line: &str, line_number: usize) -> ParseResult<Self> {
        let (level_token, rest) = split_token(line);
        let level: u32 = level_token
            .parse()
            .map_err(|_| ParseError::InvalidLevel {
                line_number,
                token: level_token.to_string(),
            })?;

        let (mut token, mut rest) = split_token(rest.unwrap_or(""));

        let mut id = None;
        if token.starts_with('@') {
            if token.len() < 3 || !token.ends_with('@') {
                return Err(ParseError::UnterminatedXref {
                    line_number,
                    token: token.to_string(),
                });
            }
            id = Some(token.to_string());
            (token, rest) = split_token(rest.unwrap_or(""));
        }

        if token.is_empty() {
            return Err(ParseError::MissingTag { line_number });
        }

        Ok(Self {
            level,
            id,
            tag: token.to_string(),
            value: rest.map(str::to_string),
            line_number,
        })
    }

    /// Re-emit the wire format: `LEVEL [@XREF@] TAG [VALUE]`.
    pub fn to_line(&self) -> String {
        let mut out = self.level.to_string();
        if let Some(id) = &self.id {
            out.push(' ');
            out.push_str(id);
        }
        out.push(' ');
        out.push_str(&self.tag);
        if let Some(value) = &self.value {
            out.push(' ');
            out.push_str(value);
        }
        out
    }
}

/// Diagnostic form, e.g. `Line 5: 0 @I1@ INDI`.
impl fmt::Display for LineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.level)?;
        if let Some(id) = &self.id {
            write!(f, " {id}")?;
        }
        write!(f, " {}", self.tag)?;
        if let Some(value) = &self.value {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

/// True when a value is a pointer to another record, e.g. `@F12@`.
pub fn is_xref_pointer(value: &str) -> bool {
    static XREF_RE: OnceLock<Regex> = OnceLock::new();
    XREF_RE
        .get_or_init(|| Regex::new(r"^@.*@$").unwrap())
        .is_match(value)
}
