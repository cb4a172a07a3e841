//! Arena-based storage for the parsed line tree.
//!
//! Child links own their subtrees (each node holds the arena indices of its
//! children); the parent link is a plain back-reference index with no
//! ownership semantics, so the bidirectional link never forms a cycle the
//! allocator has to care about.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::line::LineRecord;

/// Initial child capacity when eager collection init is enabled.
const EAGER_CHILD_CAPACITY: usize = 4;

/// Tree node holding the parsed fields of one GEDCOM line.
#[derive(Debug)]
pub struct TreeNode {
    /// Parsed fields of the originating line
    pub data: LineRecord,
    /// Index of the parent node, None for level-0 (record) nodes.
    /// Upward navigation only; never part of structural comparison.
    pub parent: Option<Index>,
    /// Indices of child nodes, in document order
    pub children: Vec<Index>,
}

/// Forest of record trees built from one GEDCOM input.
///
/// Roots are the level-0 lines in document order. The structure is not
/// mutated after construction completes; downstream consumers only read it.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    roots: Vec<Index>,
    eager_children: bool,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self::with_options(false)
    }

    /// `eager_children` preallocates each node's child list at insertion
    /// instead of leaving it unallocated until the first child arrives.
    pub fn with_options(eager_children: bool) -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
            eager_children,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: LineRecord, parent: Option<Index>) -> Index {
        let children = if self.eager_children {
            Vec::with_capacity(EAGER_CHILD_CAPACITY)
        } else {
            Vec::new()
        };
        let node_idx = self.arena.insert(TreeNode {
            data,
            parent,
            children,
        });

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.roots.push(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    /// Indices of the level-0 record nodes, in document order.
    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes across all record trees.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Pre-order traversal over all record trees in document order.
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    /// Maximum nesting depth across the forest (a lone root has depth 1).
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.subtree_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn subtree_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.subtree_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Re-emit the forest as line records in document (pre-order) order.
    ///
    /// For well-formed input this reproduces the decoded line sequence
    /// exactly, which makes it the inverse of the build fold.
    pub fn flatten(&self) -> Vec<LineRecord> {
        self.iter().map(|(_, node)| node.data.clone()).collect()
    }

    /// A node's value with CONC/CONT continuation children folded in.
    ///
    /// CONC concatenates without separator, CONT starts a new line; a
    /// continuation with no value contributes an empty payload. Returns
    /// `None` when the node has neither a value nor continuations.
    pub fn folded_value(&self, idx: Index) -> Option<String> {
        let node = self.get_node(idx)?;
        let mut out = node.data.value.clone();
        for &child_idx in &node.children {
            let Some(child) = self.get_node(child_idx) else {
                continue;
            };
            match child.data.tag.as_str() {
                "CONC" => {
                    out.get_or_insert_with(String::new)
                        .push_str(child.data.value.as_deref().unwrap_or(""));
                }
                "CONT" => {
                    let buf = out.get_or_insert_with(String::new);
                    buf.push('\n');
                    buf.push_str(child.data.value.as_deref().unwrap_or(""));
                }
                _ => {}
            }
        }
        out
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        // Roots pushed in reverse so the first root is visited first
        let stack = arena.roots.iter().rev().copied().collect();
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
