use chart_canvas::ChartError;
use chart_canvas::render::{Color, FontSpec};
use chart_canvas::scenegraph::{Stage, Text};

#[test]
fn add_child_sets_parent_and_keeps_order() {
    let mut stage = Stage::new();
    let root = stage.create_container();
    let first = stage.create_graphics();
    let second = stage.create_graphics();

    stage.add_children(root, &[first, second]).expect("add children");
    assert_eq!(stage.children(root), &[first, second]);
    assert_eq!(stage.parent(first), Some(root));
    assert_eq!(stage.parent(second), Some(root));
}

#[test]
fn re_adding_a_child_moves_it_to_the_new_parent() {
    let mut stage = Stage::new();
    let left = stage.create_container();
    let right = stage.create_container();
    let child = stage.create_graphics();

    stage.add_child(left, child).expect("add to left");
    stage.add_child(right, child).expect("move to right");

    assert!(stage.children(left).is_empty());
    assert_eq!(stage.children(right), &[child]);
    assert_eq!(stage.parent(child), Some(right));
}

#[test]
fn re_adding_to_same_parent_moves_to_end() {
    let mut stage = Stage::new();
    let root = stage.create_container();
    let a = stage.create_graphics();
    let b = stage.create_graphics();
    stage.add_children(root, &[a, b]).expect("add");
    stage.add_child(root, a).expect("re-add");
    assert_eq!(stage.children(root), &[b, a]);
}

#[test]
fn cycles_and_leaf_parents_are_rejected() {
    let mut stage = Stage::new();
    let root = stage.create_container();
    let inner = stage.create_container();
    let leaf = stage.create_graphics();
    stage.add_child(root, inner).expect("nest");

    assert!(stage.add_child(inner, root).is_err());
    assert!(stage.add_child(inner, inner).is_err());
    assert!(stage.add_child(leaf, inner).is_err());
    assert_eq!(stage.parent(root), None);
    assert!(stage.children(inner).is_empty());
}

#[test]
fn remove_child_clears_parent_and_reports_membership() {
    let mut stage = Stage::new();
    let root = stage.create_container();
    let child = stage.create_graphics();
    let stranger = stage.create_graphics();
    stage.add_child(root, child).expect("add");

    assert!(!stage.remove_child(root, stranger));
    assert!(stage.remove_child(root, child));
    assert_eq!(stage.parent(child), None);
    assert!(stage.children(root).is_empty());
    assert!(stage.contains(child));
}

#[test]
fn remove_children_returns_all_in_order() {
    let mut stage = Stage::new();
    let root = stage.create_container();
    let a = stage.create_graphics();
    let b = stage.create_text(Text::new("x", Color::BLACK, FontSpec::default()));
    stage.add_children(root, &[a, b]).expect("add");

    assert_eq!(stage.remove_children(root), vec![a, b]);
    assert!(stage.children(root).is_empty());
    assert_eq!(stage.parent(a), None);
    assert_eq!(stage.parent(b), None);
}

#[test]
fn destroy_detaches_and_subtree_destroy_frees_descendants() {
    let mut stage = Stage::new();
    let root = stage.create_container();
    let branch = stage.create_container();
    let leaf = stage.create_graphics();
    stage.add_child(root, branch).expect("add branch");
    stage.add_child(branch, leaf).expect("add leaf");

    stage.destroy_subtree(branch);
    assert!(!stage.contains(branch));
    assert!(!stage.contains(leaf));
    assert!(stage.children(root).is_empty());
    assert_eq!(stage.len(), 1);
}

#[test]
fn stale_handles_surface_unknown_node() {
    let mut stage = Stage::new();
    let node = stage.create_graphics();
    stage.destroy(node);

    assert!(matches!(
        stage.set_position(node, 1.0, 1.0),
        Err(ChartError::UnknownNode(id)) if id == node
    ));
    assert!(stage.graphics_mut(node).is_err());
}

#[test]
fn visible_count_skips_hidden_subtrees() {
    let mut stage = Stage::new();
    let root = stage.create_container();
    let hidden = stage.create_container();
    let shown = stage.create_graphics();
    let nested = stage.create_graphics();
    stage.add_children(root, &[hidden, shown]).expect("add");
    stage.add_child(hidden, nested).expect("nest");
    stage.set_visible(hidden, false).expect("hide");

    assert_eq!(stage.visible_count(root), 2);
}
