use super::*;

#[test]
fn test_parent_links_follow_add_order() {
    let mut arena = NodeArena::new();
    let left = arena.add_leaf("a");
    let right = arena.add_leaf("b");
    let sum = arena.add_binary(left, BinaryOperator::Plus, right);
    let root = arena.add_file("a.kt", "", false, vec![sum]);

    assert_eq!(arena.parent(left), sum);
    assert_eq!(arena.parent(right), sum);
    assert_eq!(arena.parent(sum), root);
    assert!(arena.parent(root).is_none());
}

#[test]
fn test_children_are_lexical_and_skip_none() {
    let mut arena = NodeArena::new();
    let init = arena.add_leaf("1");
    let getter = arena.add_leaf("get");
    let prop = arena.add_property("p", init, vec![getter]);
    let bare = arena.add_property("q", NodeIndex::NONE, vec![]);

    let node = arena.get(prop).expect("property node");
    assert_eq!(node.data.children().as_slice(), &[init, getter]);
    let node = arena.get(bare).expect("property node");
    assert!(node.data.children().is_empty());
}

#[test]
fn test_get_none_and_out_of_range() {
    let mut arena = NodeArena::new();
    arena.add_leaf("x");
    assert!(arena.get(NodeIndex::NONE).is_none());
    assert!(arena.get(NodeIndex(7)).is_none());
    assert_eq!(arena.kind(NodeIndex(0)), Some(NodeKind::Other));
}

#[test]
fn test_trivial_enum_entry() {
    let mut arena = NodeArena::new();
    let arg = arena.add_leaf("1");
    let trivial = arena.add_enum_entry("A", vec![arg], vec![]);
    let member = arena.add_function("f", vec![], NodeIndex::NONE);
    let rich = arena.add_enum_entry("B", vec![], vec![member]);

    let NodeData::EnumEntry(entry) = &arena.get(trivial).expect("entry").data else {
        panic!("expected enum entry");
    };
    assert!(entry.is_trivial());
    let NodeData::EnumEntry(entry) = &arena.get(rich).expect("entry").data else {
        panic!("expected enum entry");
    };
    assert!(!entry.is_trivial());
}

#[test]
fn test_json_round_trip_keeps_parents() {
    let mut arena = NodeArena::new();
    let callee = arena.add_leaf("run");
    let lambda = arena.add_function_literal(vec![]);
    let call = arena.add_call(callee, vec![lambda]);
    arena.add_file("run.kt", "a.b", false, vec![call]);

    let json = serde_json::to_string(&arena).expect("serialize arena");
    let back: NodeArena = serde_json::from_str(&json).expect("deserialize arena");
    assert_eq!(back, arena);
    assert_eq!(back.parent(lambda), call);
}

#[test]
fn test_operator_families() {
    assert!(BinaryOperator::PlusAssign.is_augmented_assignment());
    assert!(BinaryOperator::LtEq.is_comparison());
    assert!(!BinaryOperator::EqEq.is_comparison());
    assert!(BinaryOperator::NotIn.is_membership());
    assert!(BinaryOperator::Assign.is_plain_assignment());
    assert_eq!(BinaryOperator::Infix("shl".into()).text(), "shl");
}
