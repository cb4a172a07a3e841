//! gedtree: a GEDCOM line-tree parser.
//!
//! GEDCOM files encode hierarchy with a level-number prefix on every line
//! instead of closing tags. This crate decodes those lines and folds them
//! back into the record trees they describe:
//!
//! ```
//! use gedtree::parse_str;
//!
//! let input = "0 @I1@ INDI\n1 NAME John /Doe/\n2 GIVN John\n";
//! let forest = parse_str(input).unwrap();
//! assert_eq!(forest.roots().len(), 1);
//! assert_eq!(forest.depth(), 3);
//! ```
//!
//! Validation rules, character-set transcoding, and the typed domain model
//! (Individual, Family, ...) are downstream concerns and live elsewhere.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod errors;
pub mod exitcode;
pub mod line;
pub mod util;

use std::path::Path;

pub use arena::{TreeArena, TreeNode};
pub use builder::{BuilderOptions, LineTreeBuilder};
pub use errors::{ParseError, ParseResult};
pub use line::{is_xref_pointer, LineRecord};

/// Parse GEDCOM text into a forest of record trees with default options.
pub fn parse_str(input: &str) -> ParseResult<TreeArena> {
    let records = decoder::decode_str(input)?;
    LineTreeBuilder::new().build(records)
}

/// Parse a GEDCOM file into a forest of record trees with default options.
pub fn parse_file(path: &Path) -> ParseResult<TreeArena> {
    let records = decoder::decode_file(path)?;
    LineTreeBuilder::new().build(records)
}
