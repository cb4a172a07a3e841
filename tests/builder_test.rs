//! Tests for LineTreeBuilder

use gedtree::builder::{BuilderOptions, LineTreeBuilder};
use gedtree::errors::ParseError;
use gedtree::line::LineRecord;

fn rec(level: u32, tag: &str, line_number: usize) -> LineRecord {
    LineRecord {
        level,
        id: None,
        tag: tag.to_string(),
        value: None,
        line_number,
    }
}

#[test]
fn given_empty_input_when_building_then_forest_is_empty() {
    gedtree::util::testing::init_test_setup();
    let builder = LineTreeBuilder::new();
    let forest = builder.build(Vec::new()).unwrap();
    assert!(forest.is_empty());
    assert_eq!(forest.roots().len(), 0);
    assert_eq!(forest.depth(), 0);
}

#[test]
fn given_three_siblings_when_building_then_root_has_them_in_order() {
    // levels [0, 1, 1, 1]
    let records = vec![
        rec(0, "INDI", 1),
        rec(1, "NAME", 2),
        rec(1, "BIRT", 3),
        rec(1, "DEAT", 4),
    ];

    let forest = LineTreeBuilder::new().build(records).unwrap();

    assert_eq!(forest.roots().len(), 1);
    let root = forest.get_node(forest.roots()[0]).unwrap();
    assert_eq!(root.children.len(), 3);

    let tags: Vec<_> = root
        .children
        .iter()
        .map(|&c| forest.get_node(c).unwrap().data.tag.clone())
        .collect();
    assert_eq!(tags, ["NAME", "BIRT", "DEAT"]);

    for &child in &root.children {
        assert!(forest.get_node(child).unwrap().children.is_empty());
    }
}

#[test]
fn given_two_records_when_building_then_each_root_keeps_its_child() {
    // levels [0, 1, 0, 1]
    let records = vec![
        rec(0, "INDI", 1),
        rec(1, "NAME", 2),
        rec(0, "FAM", 3),
        rec(1, "HUSB", 4),
    ];

    let forest = LineTreeBuilder::new().build(records).unwrap();

    assert_eq!(forest.roots().len(), 2);
    let first = forest.get_node(forest.roots()[0]).unwrap();
    let second = forest.get_node(forest.roots()[1]).unwrap();
    assert_eq!(first.data.tag, "INDI");
    assert_eq!(second.data.tag, "FAM");
    assert_eq!(first.children.len(), 1);
    assert_eq!(second.children.len(), 1);
}

#[test]
fn given_deep_then_shallow_levels_when_building_then_stack_resets() {
    // levels [0, 1, 2, 1]: the trailing level-1 line is a sibling of the
    // first level-1 node, and the level-2 node stays under the first one
    let records = vec![
        rec(0, "INDI", 1),
        rec(1, "BIRT", 2),
        rec(2, "DATE", 3),
        rec(1, "DEAT", 4),
    ];

    let forest = LineTreeBuilder::new().build(records).unwrap();

    let root = forest.get_node(forest.roots()[0]).unwrap();
    assert_eq!(root.children.len(), 2);

    let birt = forest.get_node(root.children[0]).unwrap();
    let deat = forest.get_node(root.children[1]).unwrap();
    assert_eq!(birt.data.tag, "BIRT");
    assert_eq!(deat.data.tag, "DEAT");
    assert_eq!(birt.children.len(), 1);
    assert!(deat.children.is_empty());

    let date = forest.get_node(birt.children[0]).unwrap();
    assert_eq!(date.data.tag, "DATE");
    assert_eq!(date.parent, Some(root.children[0]));
}

#[test]
fn given_level_skip_when_building_then_malformed_hierarchy_error() {
    // levels [0, 2]: level 1 never opened
    let records = vec![rec(0, "INDI", 1), rec(2, "DATE", 2)];

    let err = LineTreeBuilder::new().build(records).unwrap_err();

    match err {
        ParseError::MalformedHierarchy {
            line_number,
            level,
            deepest_open,
        } => {
            assert_eq!(line_number, 2);
            assert_eq!(level, 2);
            assert_eq!(deepest_open, 0);
        }
        other => panic!("expected MalformedHierarchy, got {other:?}"),
    }
}

#[test]
fn given_nonzero_first_line_when_building_then_error_reports_no_open_level() {
    let err = LineTreeBuilder::new().build(vec![rec(1, "NAME", 1)]).unwrap_err();

    match err {
        ParseError::MalformedHierarchy { deepest_open, .. } => {
            assert_eq!(deepest_open, -1);
        }
        other => panic!("expected MalformedHierarchy, got {other:?}"),
    }
}

#[test]
fn given_duplicate_sibling_tags_when_building_then_all_are_kept() {
    // repeated NOTE lines are distinct siblings, never deduplicated
    let records = vec![
        rec(0, "INDI", 1),
        rec(1, "NOTE", 2),
        rec(1, "NOTE", 3),
        rec(1, "NOTE", 4),
    ];

    let forest = LineTreeBuilder::new().build(records).unwrap();

    let root = forest.get_node(forest.roots()[0]).unwrap();
    assert_eq!(root.children.len(), 3);
    let line_numbers: Vec<_> = root
        .children
        .iter()
        .map(|&c| forest.get_node(c).unwrap().data.line_number)
        .collect();
    assert_eq!(line_numbers, [2, 3, 4]);
}

#[test]
fn given_built_forest_then_every_node_is_one_level_below_its_parent() {
    let records = vec![
        rec(0, "INDI", 1),
        rec(1, "BIRT", 2),
        rec(2, "DATE", 3),
        rec(2, "PLAC", 4),
        rec(1, "DEAT", 5),
        rec(0, "FAM", 6),
        rec(1, "HUSB", 7),
    ];

    let forest = LineTreeBuilder::new().build(records).unwrap();

    for (_, node) in forest.iter() {
        match node.parent {
            Some(parent_idx) => {
                let parent = forest.get_node(parent_idx).unwrap();
                assert_eq!(node.data.level, parent.data.level + 1);
            }
            None => assert_eq!(node.data.level, 0),
        }
    }
}

#[test]
fn given_eager_collection_init_when_building_then_structure_is_unchanged() {
    let records = vec![rec(0, "INDI", 1), rec(1, "NAME", 2)];

    let options = BuilderOptions {
        eager_collection_init: true,
    };
    let forest = LineTreeBuilder::with_options(options).build(records).unwrap();

    assert_eq!(forest.roots().len(), 1);
    assert_eq!(forest.len(), 2);
    assert!(forest.get_node(forest.roots()[0]).unwrap().children.capacity() > 0);
}

#[test]
fn given_builder_when_reused_then_invocations_are_independent() {
    let builder = LineTreeBuilder::new();

    let first = builder.build(vec![rec(0, "INDI", 1), rec(1, "NAME", 2)]).unwrap();
    let second = builder.build(vec![rec(0, "FAM", 1)]).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert_eq!(
        forest_tags(&second),
        vec!["FAM".to_string()],
        "no state leaks between builds"
    );
}

fn forest_tags(forest: &gedtree::TreeArena) -> Vec<String> {
    forest.iter().map(|(_, n)| n.data.tag.clone()).collect()
}
