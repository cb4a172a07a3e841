//! Terminal output formatting with colors and tree rendering
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use generational_arena::Index;
use termtree::Tree;

use crate::arena::TreeArena;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print failure status (red X, indented)
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", "✗".red(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Label shown for a node: tag, then xref id, then value.
fn node_label(arena: &TreeArena, idx: Index, fold: bool) -> String {
    let Some(node) = arena.get_node(idx) else {
        return String::new();
    };
    let mut label = node.data.tag.clone();
    if let Some(id) = &node.data.id {
        label.push(' ');
        label.push_str(id);
    }
    let value = if fold {
        arena.folded_value(idx)
    } else {
        node.data.value.clone()
    };
    if let Some(value) = value {
        label.push(' ');
        // keep the tree one line per node
        label.push_str(&value.replace('\n', "\\n"));
    }
    label
}

/// Render one record subtree with termtree.
///
/// With `fold` enabled, CONC/CONT children are merged into their parent's
/// label and not shown as separate nodes.
pub fn record_tree(arena: &TreeArena, root: Index, fold: bool) -> Tree<String> {
    let mut tree = Tree::new(node_label(arena, root, fold));

    fn build_tree(arena: &TreeArena, node_idx: Index, parent_tree: &mut Tree<String>, fold: bool) {
        if let Some(node) = arena.get_node(node_idx) {
            for &child_idx in &node.children {
                if let Some(child) = arena.get_node(child_idx) {
                    if fold && matches!(child.data.tag.as_str(), "CONC" | "CONT") {
                        continue;
                    }
                    let mut child_tree = Tree::new(node_label(arena, child_idx, fold));
                    build_tree(arena, child_idx, &mut child_tree, fold);
                    parent_tree.push(child_tree);
                }
            }
        }
    }

    build_tree(arena, root, &mut tree, fold);
    tree
}
