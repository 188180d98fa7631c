//! Behavior of leaves and branches through the shared node interface

use rstest::{fixture, rstest};

use comptree::domain::{same_node, Branch, DomainError, Leaf, NodeRef, NodeRefExt, Outcome};
use comptree::util::testing;

fn occurrences(branch: &NodeRef, child: &NodeRef) -> usize {
    branch
        .children()
        .iter()
        .filter(|c| same_node(c, child))
        .count()
}

#[fixture]
fn branch() -> NodeRef {
    testing::init_test_setup();
    Branch::new()
}

// ============================================================
// Leaf
// ============================================================

#[rstest]
#[case(1)]
#[case(5)]
fn given_leaf_when_operation_repeated_then_result_is_identical(#[case] times: usize) {
    testing::init_test_setup();
    let leaf = Leaf::new();

    for _ in 0..times {
        assert_eq!(leaf.operation(), Outcome::Leaf);
    }
    assert!(leaf.parent().is_none());
}

#[rstest]
fn given_leaf_when_adding_then_unsupported_and_unchanged() {
    let leaf = Leaf::new();
    let child = Leaf::new();

    let result = leaf.add(&child);

    assert_eq!(
        result,
        Err(DomainError::UnsupportedOperation { operation: "add" })
    );
    assert!(leaf.children().is_empty());
    assert!(child.parent().is_none());
    assert_eq!(leaf.operation().to_string(), "LEAF");
}

#[rstest]
fn given_attached_leaf_when_removing_from_leaf_then_unsupported_and_parent_kept(branch: NodeRef) {
    let leaf = Leaf::new();
    branch.add(&leaf).unwrap();

    let result = leaf.remove(&branch);

    assert_eq!(
        result,
        Err(DomainError::UnsupportedOperation { operation: "remove" })
    );
    assert!(same_node(&leaf.parent().unwrap(), &branch));
}

#[rstest]
fn given_unsupported_operation_then_error_message_names_operation() {
    let err = Leaf::new().add(&Leaf::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported operation: cannot add children on a leaf"
    );
}

// ============================================================
// Composite check
// ============================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn given_branch_with_any_child_count_then_is_composite(branch: NodeRef, #[case] count: usize) {
    for _ in 0..count {
        branch.add(&Leaf::new()).unwrap();
    }
    assert!(branch.is_composite());
    assert_eq!(branch.children().len(), count);
}

#[rstest]
fn given_mixed_nodes_when_checking_composite_then_only_branches_accept_children() {
    let candidates = vec![Leaf::new(), Branch::new(), Leaf::new()];
    let child = Leaf::new();

    for node in &candidates {
        if node.is_composite() {
            node.add(&child).unwrap();
        }
    }

    assert!(same_node(&child.parent().unwrap(), &candidates[1]));
    assert!(candidates[0].children().is_empty());
}

// ============================================================
// add / remove
// ============================================================

#[rstest]
fn given_branch_when_adding_then_parent_set_and_one_more_occurrence(branch: NodeRef) {
    let leaf = Leaf::new();
    branch.add(&leaf).unwrap();
    let before = occurrences(&branch, &leaf);

    branch.add(&leaf).unwrap();

    assert_eq!(occurrences(&branch, &leaf), before + 1);
    assert!(same_node(&leaf.parent().unwrap(), &branch));
}

#[rstest]
fn given_present_child_when_removing_then_parent_cleared_and_gone(branch: NodeRef) {
    let first = Leaf::new();
    let second = Branch::new();
    branch.add(&first).unwrap();
    branch.add(&second).unwrap();

    branch.remove(&second).unwrap();

    assert!(second.parent().is_none());
    assert_eq!(occurrences(&branch, &second), 0);
    assert_eq!(branch.children().len(), 1);
    assert!(same_node(&branch.children()[0], &first));
}

#[rstest]
fn given_absent_child_when_removing_then_sequence_unchanged(branch: NodeRef) {
    let kept = Leaf::new();
    branch.add(&kept).unwrap();
    let stranger = Leaf::new();

    branch.remove(&stranger).unwrap();
    branch.remove(&stranger).unwrap();

    assert_eq!(branch.children().len(), 1);
    assert!(same_node(&kept.parent().unwrap(), &branch));
}

#[rstest]
fn given_children_reordered_then_operation_follows_sequence_order(branch: NodeRef) {
    let leaf = Leaf::new();
    let pair = Branch::new();
    pair.add(&Leaf::new()).unwrap();
    pair.add(&Leaf::new()).unwrap();

    branch.add(&leaf).unwrap();
    branch.add(&pair).unwrap();
    assert_eq!(branch.operation().to_string(), "BRANCH[LEAF+BRANCH[LEAF+LEAF]]");

    // move the leaf to the end
    branch.remove(&leaf).unwrap();
    branch.add(&leaf).unwrap();

    assert_eq!(branch.operation().to_string(), "BRANCH[BRANCH[LEAF+LEAF]+LEAF]");
    let expected: Vec<Outcome> = branch.children().iter().map(|c| c.operation()).collect();
    assert_eq!(branch.operation(), Outcome::Branch(expected));
}

// ============================================================
// Cycles and re-parenting
// ============================================================

#[rstest]
fn given_branch_when_adding_itself_then_cycle_rejected(branch: NodeRef) {
    assert_eq!(branch.add(&branch), Err(DomainError::CycleDetected));
    assert!(branch.children().is_empty());
}

#[rstest]
fn given_nested_branches_when_adding_root_under_descendant_then_cycle_rejected(branch: NodeRef) {
    let child = Branch::new();
    let grandchild = Branch::new();
    branch.add(&child).unwrap();
    child.add(&grandchild).unwrap();

    assert_eq!(grandchild.add(&branch), Err(DomainError::CycleDetected));
    assert_eq!(child.add(&branch), Err(DomainError::CycleDetected));

    assert!(grandchild.children().is_empty());
    assert_eq!(child.children().len(), 1);
    assert!(branch.parent().is_none());
}

#[rstest]
fn given_child_of_one_branch_when_added_to_another_then_both_hold_it(branch: NodeRef) {
    let other = Branch::new();
    let leaf = Leaf::new();
    branch.add(&leaf).unwrap();

    other.add(&leaf).unwrap();

    assert_eq!(occurrences(&branch, &leaf), 1);
    assert_eq!(occurrences(&other, &leaf), 1);
    assert!(same_node(&leaf.parent().unwrap(), &other));
}

#[rstest]
fn given_attached_child_when_detaching_then_removed_from_parent(branch: NodeRef) {
    let leaf = Leaf::new();
    branch.add(&leaf).unwrap();

    leaf.detach().unwrap();

    assert!(leaf.parent().is_none());
    assert_eq!(occurrences(&branch, &leaf), 0);
}

#[rstest]
fn given_dropped_parent_then_child_survives_unattached() {
    let leaf = Leaf::new();
    let branch = Branch::new();
    branch.add(&leaf).unwrap();

    drop(branch);

    assert!(leaf.parent().is_none());
    assert_eq!(leaf.operation(), Outcome::Leaf);
}
