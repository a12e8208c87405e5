#![cfg(test)]

use super::*;
use crate::collections::traits::Collection;
use crate::compare::Comparator;
use crate::util::alloc::CountedDrop;

#[test]
fn test_new() {
    let tree: BinaryTree<u8> = BinaryTree::new(Comparator::natural());
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
}

#[test]
fn test_min_and_max() {
    let mut tree = BinaryTree::new(Comparator::natural());
    tree.add_all([1, 2, 3, 4, -10]);

    assert_eq!(tree.min(), Ok(&-10));
    assert_eq!(tree.max(), Ok(&4));
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_empty_tree_errors() {
    let tree: BinaryTree<u8> = BinaryTree::new(Comparator::natural());
    assert_eq!(tree.min(), Err(EmptyContainer));
    assert_eq!(tree.max(), Err(EmptyContainer));
    assert!(!tree.has(&1), "An empty tree holds nothing.");
}

#[test]
fn test_duplicates_are_dropped() {
    let mut tree = BinaryTree::new(Comparator::natural());
    tree.add_all([2, 1, 3]);
    tree.add(1);

    assert_eq!(tree.len(), 3, "Inserting a duplicate should not grow the tree.");
    assert!(tree.has(&1));
}

#[test]
fn test_has_follows_comparator() {
    let mut tree = BinaryTree::new(Comparator::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs())));
    tree.add_all([-2, 1, 3]);

    assert!(tree.has(&2), "Membership should follow the comparator, not PartialEq.");
    assert!(!tree.has(&4));
}

#[test]
fn test_cursor_walk() {
    let mut tree = BinaryTree::new(Comparator::natural());
    tree.add_all([1, 2, 3, -1]);

    let mut cursor = tree.iterator();
    assert_eq!(cursor.current(), Ok(&1), "The cursor should start at the root.");
    assert!(cursor.has_left());
    assert!(cursor.has_right());
    assert!(!cursor.has_parent());

    assert_eq!(cursor.right(), Ok(&2));
    assert_eq!(cursor.right(), Ok(&3));
    assert!(!cursor.has_right());

    assert_eq!(cursor.parent(), Ok(&2));
    assert_eq!(cursor.parent(), Ok(&1));
    assert_eq!(cursor.left(), Ok(&-1));
    assert_eq!(cursor.parent(), Ok(&1), "Parent edges should lead back to the root.");
}

#[test]
fn test_failed_step_leaves_position() {
    let mut tree = BinaryTree::new(Comparator::natural());
    tree.add_all([1, 2]);

    let mut cursor = tree.iterator();
    assert_eq!(
        cursor.left(),
        Err(NoSuchNeighbor {
            direction: Direction::Left
        })
    );
    assert_eq!(cursor.current(), Ok(&1), "A failed step should not move the cursor.");

    cursor.right().unwrap();
    assert_eq!(
        cursor.right(),
        Err(NoSuchNeighbor {
            direction: Direction::Right
        })
    );
    assert_eq!(cursor.current(), Ok(&2));
}

#[test]
fn test_cursor_on_empty_tree() {
    let tree: BinaryTree<u8> = BinaryTree::new(Comparator::natural());
    let mut cursor = tree.iterator();

    assert_eq!(cursor.current(), Err(EmptyCursor));
    assert!(!cursor.has_left());
    assert!(!cursor.has_right());
    assert!(!cursor.has_parent());
    assert!(cursor.left().is_err());
    assert!(cursor.right().is_err());
    assert!(cursor.parent().is_err());
}

#[test]
fn test_clear() {
    let mut tree = BinaryTree::new(Comparator::natural());
    tree.add_all([2, 1, 3]);

    tree.clear();
    assert_eq!(tree.len(), 0);
    assert!(!tree.has(&2));

    tree.add(5);
    assert_eq!(tree.len(), 1, "A cleared tree should accept new values.");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new();
    {
        let mut tree = BinaryTree::new(Comparator::new(|a: &(i32, CountedDrop), b: &(i32, CountedDrop)| {
            a.0.cmp(&b.0)
        }));
        for i in 0..4 {
            tree.add((i, counter.clone()));
        }
        tree.add((0, counter.clone()));
        assert_eq!(counter.count(), 1, "A dropped duplicate should be the only drop so far.");
    }
    assert_eq!(counter.count(), 5, "Every node's value should be dropped exactly once.");
}

#[test]
fn test_clone_is_deep() {
    let mut tree = BinaryTree::new(Comparator::natural());
    tree.add_all([2, 1, 3]);

    let mut clone = tree.clone();
    clone.add(4);
    assert_eq!(tree.len(), 3, "Mutating a clone should not affect the original.");
    assert_eq!(clone.len(), 4);

    // The clone's parent edges must point into its own nodes.
    let mut cursor = clone.iterator();
    cursor.right().unwrap();
    cursor.right().unwrap();
    assert_eq!(cursor.parent(), Ok(&3));
    assert_eq!(cursor.parent(), Ok(&2));
}
