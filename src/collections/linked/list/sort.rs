//! Merge sort over node chains.
//!
//! The list is split recursively with a slow / fast pointer walk and the sorted halves are merged
//! back together iteratively, so the only non-constant space cost is the `O(log n)` recursion of
//! the splitting itself. The merge takes from the left chain only when its element is strictly
//! less than the right's; on a tie the right element is emitted first.

use super::{Link, NodePtr};
use crate::compare::Comparator;

/// Sorts the chain starting at `head`, returning the new head. The caller's tail pointer is
/// stale afterwards and must be recomputed.
pub(crate) fn merge_sort<T>(head: Link<T>, cmp: &Comparator<T>) -> Link<T> {
    let Some(first) = head else {
        return None;
    };
    if first.next().is_none() {
        return head;
    }

    let back = split(first);
    let front = merge_sort(Some(first), cmp);
    let back = merge_sort(back, cmp);
    merge(front, back, cmp)
}

/// Severs the chain starting at `head` in the middle, returning the head of the back half. The
/// caller must pass a chain of at least two nodes.
fn split<T>(head: NodePtr<T>) -> Link<T> {
    let mut prev = head;
    let mut slow = head;
    let mut fast = Some(head);

    while let Some(node) = fast {
        let Some(step) = *node.next() else {
            break;
        };
        prev = slow;
        match *slow.next() {
            Some(next) => slow = next,
            None => break,
        }
        fast = *step.next();
    }

    *prev.next_mut() = None;
    Some(slow)
}

/// Merges two sorted chains into one, relinking nodes without moving values.
fn merge<T>(mut left: Link<T>, mut right: Link<T>, cmp: &Comparator<T>) -> Link<T> {
    let mut head: Link<T> = None;
    let mut tail: Link<T> = None;

    loop {
        let next = match (left, right) {
            (Some(l), Some(r)) => {
                // Strictly-less keeps ties right-biased.
                if cmp.compare(l.value(), r.value()).is_lt() {
                    left = *l.next();
                    l
                } else {
                    right = *r.next();
                    r
                }
            },
            (remaining, None) | (None, remaining) => {
                match tail {
                    Some(t) => *t.next_mut() = remaining,
                    None => head = remaining,
                }
                break;
            },
        };

        *next.next_mut() = None;
        match tail {
            Some(t) => *t.next_mut() = Some(next),
            None => head = Some(next),
        }
        tail = Some(next);
    }

    head
}
