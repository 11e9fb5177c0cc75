#![cfg(test)]

use super::*;
use crate::status::{EmptyContainer, Insertion, Lookup, Removal};

const SAMPLE: [u32; 9] = [20, 10, 30, 15, 35, 25, 9, 32, 7];

fn sample_set() -> BinaryTreeSet<u32> {
    SAMPLE.into_iter().collect()
}

fn inorder_values(set: &BinaryTreeSet<u32>) -> Vec<u32> {
    set.iter().copied().collect()
}

#[test]
fn test_insert_and_inorder() {
    let set = sample_set();
    assert_eq!(set.len(), 9);
    assert_eq!(
        inorder_values(&set),
        [7, 9, 10, 15, 20, 25, 30, 32, 35],
        "Inorder traversal should yield values in ascending order."
    );
}

#[test]
fn test_duplicate_insert_is_absorbed() {
    let mut set = sample_set();
    assert_eq!(
        set.insert(15),
        Insertion::Duplicate,
        "Re-inserting a stored value should report a duplicate."
    );
    assert_eq!(set.len(), 9, "A duplicate insert should not change the length.");
    assert_eq!(
        inorder_values(&set),
        [7, 9, 10, 15, 20, 25, 30, 32, 35],
        "A duplicate insert should not change the traversal."
    );
}

#[test]
fn test_find() {
    let set = sample_set();
    assert_eq!(set.find(&9), Lookup::Found(&9));
    assert_eq!(
        set.find(&33),
        Lookup::Missing,
        "A value never inserted should be reported as missing."
    );
    assert!(set.contains(&32));
    assert!(!set.contains(&6));

    let empty = BinaryTreeSet::<u32>::new();
    assert_eq!(
        empty.find(&9),
        Lookup::Empty,
        "An empty tree should report Empty rather than Missing."
    );
}

#[test]
fn test_remove_node_with_two_children() {
    let mut set = sample_set();
    assert_eq!(set.remove(&30), Removal::Removed);
    assert_eq!(
        inorder_values(&set),
        [7, 9, 10, 15, 20, 25, 32, 35],
        "Removing a two-child node should promote its successor and keep the order."
    );
    assert_eq!(set.find(&30), Lookup::Missing);
    assert_eq!(set.len(), 8);
}

#[test]
fn test_remove_root_with_two_children() {
    let mut set = sample_set();
    assert_eq!(set.remove(&20), Removal::Removed);
    assert_eq!(
        inorder_values(&set),
        [7, 9, 10, 15, 25, 30, 32, 35],
        "Removing the root should promote the smallest value of its right subtree."
    );
}

#[test]
fn test_remove_leaf() {
    let mut set = sample_set();
    assert_eq!(set.remove(&7), Removal::Removed);
    assert_eq!(inorder_values(&set), [9, 10, 15, 20, 25, 30, 32, 35]);
}

#[test]
fn test_remove_node_with_only_left_child() {
    // 9 has the lone left child 7.
    let mut set = sample_set();
    assert_eq!(set.remove(&9), Removal::Removed);
    assert_eq!(
        inorder_values(&set),
        [7, 10, 15, 20, 25, 30, 32, 35],
        "A lone left child should be spliced into the removed node's place."
    );
}

#[test]
fn test_remove_node_with_only_right_child() {
    // 35 has the lone left child 32, so build the mirrored shape instead.
    let mut set = BinaryTreeSet::new();
    for value in [5, 3, 8, 9] {
        set.insert(value);
    }
    assert_eq!(set.remove(&8), Removal::Removed);
    assert_eq!(
        inorder_values(&set),
        [3, 5, 9],
        "A lone right child should be spliced into the removed node's place."
    );
}

#[test]
fn test_remove_absent_value() {
    let mut set = sample_set();
    assert_eq!(
        set.remove(&33),
        Removal::Missing,
        "Removing an absent value should be a reported no-op."
    );
    assert_eq!(set.len(), 9);
    assert_eq!(inorder_values(&set), [7, 9, 10, 15, 20, 25, 30, 32, 35]);
}

#[test]
fn test_remove_only_value() {
    let mut set = BinaryTreeSet::new();
    set.insert("lonely");
    assert_eq!(set.remove("lonely"), Removal::Removed);
    assert!(set.is_empty());
    assert_eq!(set.find("lonely"), Lookup::Empty);
}

#[test]
fn test_preorder_and_postorder() {
    let set = sample_set();
    assert_eq!(
        set.preorder().map(|iter| iter.copied().collect::<Vec<_>>()),
        Ok(vec![20, 10, 9, 7, 15, 30, 25, 35, 32]),
        "Preorder should yield each value before its subtrees."
    );
    assert_eq!(
        set.postorder().map(|iter| iter.copied().collect::<Vec<_>>()),
        Ok(vec![7, 9, 15, 10, 25, 32, 35, 30, 20]),
        "Postorder should yield each value after its subtrees."
    );
}

#[test]
fn test_traversals_on_empty_tree() {
    let set = BinaryTreeSet::<u32>::new();
    assert_eq!(set.inorder().map(|_| ()), Err(EmptyContainer));
    assert_eq!(set.preorder().map(|_| ()), Err(EmptyContainer));
    assert_eq!(set.postorder().map(|_| ()), Err(EmptyContainer));
    assert_eq!(
        set.iter().count(),
        0,
        "The unchecked iterator should simply be exhausted."
    );
}

#[test]
fn test_first_and_last() {
    let set = sample_set();
    assert_eq!(set.first(), Some(&7));
    assert_eq!(set.last(), Some(&35));
    assert_eq!(BinaryTreeSet::<u32>::new().first(), None);
}

#[test]
fn test_into_iter_drains_in_order() {
    let set = sample_set();
    assert_eq!(
        set.into_iter().collect::<Vec<_>>(),
        [7, 9, 10, 15, 20, 25, 30, 32, 35],
        "Draining the tree should also yield ascending order."
    );
}

#[test]
fn test_degraded_shape_still_behaves() {
    // Sorted input produces a list-shaped tree; everything should still work.
    let mut set: BinaryTreeSet<u32> = (0..500).collect();
    assert_eq!(set.len(), 500);
    assert!(set.contains(&499));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), (0..500).collect::<Vec<_>>());
    assert_eq!(set.remove(&250), Removal::Removed);
    assert_eq!(set.iter().count(), 499);
}
