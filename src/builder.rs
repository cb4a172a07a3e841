//! Folds a flat, ordered stream of line records into a hierarchical forest.
//!
//! GEDCOM has no closing tags, so the declared level number is the sole
//! structural signal. The fold keeps a stack of the most recently created
//! node per level: push on a deeper line, overwrite on a sibling, truncate
//! on anything shallower. Parent lookup is O(1) amortized.

use generational_arena::Index;
use tracing::{instrument, trace};

use crate::arena::TreeArena;
use crate::errors::{ParseError, ParseResult};
use crate::line::LineRecord;

/// Options controlling tree construction, passed at builder creation so
/// behavior is deterministic per call rather than process-wide.
#[derive(Debug, Clone, Default)]
pub struct BuilderOptions {
    /// Preallocate each node's child list instead of starting unallocated
    pub eager_collection_init: bool,
}

/// Builds record forests from decoded line records.
///
/// Holds no state between [`build`](Self::build) invocations; the
/// open-level stack is local to each call.
#[derive(Debug, Default)]
pub struct LineTreeBuilder {
    options: BuilderOptions,
}

impl LineTreeBuilder {
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        Self { options }
    }

    /// Fold `records` into a forest of record trees.
    ///
    /// Each record becomes one node, attached to the most recently created
    /// node at `level - 1`. A level-0 record always opens a new root. An
    /// empty input yields an empty forest.
    ///
    /// # Errors
    ///
    /// [`ParseError::MalformedHierarchy`] when a record's level skips past
    /// the deepest currently-open level. Silently reparenting such a line
    /// would corrupt the record structure for every downstream consumer,
    /// so the fold aborts on the first anomaly.
    #[instrument(level = "debug", skip(self, records))]
    pub fn build<I>(&self, records: I) -> ParseResult<TreeArena>
    where
        I: IntoIterator<Item = LineRecord>,
    {
        let mut tree = TreeArena::with_options(self.options.eager_collection_init);
        // open[l] is the last node created at level l; a line at level l
        // closes out every deeper entry
        let mut open: Vec<Index> = Vec::new();

        for record in records {
            let level = record.level as usize;
            if level > open.len() {
                return Err(ParseError::MalformedHierarchy {
                    line_number: record.line_number,
                    level: record.level,
                    deepest_open: open.len() as i64 - 1,
                });
            }
            trace!(line = record.line_number, level, tag = %record.tag);

            open.truncate(level);
            let parent = level.checked_sub(1).map(|l| open[l]);
            let idx = tree.insert_node(record, parent);
            open.push(idx);
        }

        Ok(tree)
    }
}
