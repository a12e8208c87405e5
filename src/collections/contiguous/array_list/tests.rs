#![cfg(test)]

use std::cmp::Ordering;
use std::ptr;

use super::*;
use crate::collections::traits::{Collection, Iterable, List};
use crate::compare::Comparator;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn unordered<T>() -> Comparator<T> {
    Comparator::new(|_: &T, _: &T| Ordering::Equal)
}

#[test]
fn test_new() {
    let list: ArrayList<u8> = ArrayList::new(Comparator::natural());
    assert_eq!(list.len(), 0);
    assert_eq!(list.cap(), 0, "No memory should be allocated before the first push.");
}

#[test]
fn test_push_and_at() {
    let mut list = ArrayList::new(Comparator::natural());
    list.push(10);
    list.push(20);
    list.push(30);

    assert_eq!(list.len(), 3);
    assert_eq!(list.at(0), Ok(&10));
    assert_eq!(list.at(2), Ok(&30));
    assert_eq!(
        list.at(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }.into()),
        "An index one past the end should be rejected."
    );
}

#[test]
fn test_growth_policy() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3]);
    assert_eq!(
        list.cap(),
        6,
        "A batch of 3 into an empty list should allocate (0 + 3) * 2 slots."
    );

    list.add_all([4, 5, 6, 7]);
    assert_eq!(
        list.cap(),
        20,
        "Growth should reallocate to (cap + requested) * 2 whenever cap <= len + requested."
    );
}

#[test]
fn test_with_cap_defers_growth() {
    let mut list = ArrayList::with_cap(8, Comparator::natural());
    for i in 0..7 {
        list.push(i);
    }
    assert_eq!(list.cap(), 8, "Pushes within capacity should not reallocate.");
}

#[test]
fn test_pop() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2]);

    assert_eq!(list.pop(), Some(2));
    assert_eq!(list.pop(), Some(1));
    assert_eq!(list.pop(), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_take_at_shifts_remainder() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3, 4]);

    assert_eq!(list.take_at(1), Some(2));
    assert_eq!(&*list, &[1, 3, 4]);
    assert_eq!(list.take_at(9), None, "An out of bounds take should leave the list alone.");
    assert_eq!(list.len(), 3);
}

#[test]
fn test_remove_uses_comparator() {
    let mut list = ArrayList::new(Comparator::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs())));
    list.add_all([-1, 2, 3]);

    assert!(list.remove(&1), "Removal should match by comparator equality.");
    assert_eq!(&*list, &[2, 3]);
    assert!(!list.remove(&9));
}

#[test]
fn test_remove_at_and_replace_at() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3]);

    assert!(list.remove_at(0));
    assert!(!list.remove_at(5), "An invalid index should report false, not panic.");
    assert!(list.replace_at(0, 9));
    assert!(!list.replace_at(5, 9));
    assert_eq!(&*list, &[9, 3]);
}

#[test]
fn test_replace_at_drops_previous_value() {
    let counter = CountedDrop::new();
    let mut list = ArrayList::new(unordered());
    list.push(counter.clone());

    assert!(list.replace_at(0, counter.clone()));
    assert_eq!(counter.count(), 1, "The overwritten element should be dropped exactly once.");
}

#[test]
fn test_sort_and_reverse() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([3, 1, 2, -10, 4]);

    list.sort();
    assert_eq!(&*list, &[-10, 1, 2, 3, 4]);

    list.sort();
    assert_eq!(&*list, &[-10, 1, 2, 3, 4], "Sorting a sorted list should change nothing.");

    list.reverse();
    assert_eq!(&*list, &[4, 3, 2, 1, -10]);
}

#[test]
fn test_sort_follows_comparator() {
    let mut list = ArrayList::new(Comparator::<i32>::natural().reversed());
    list.add_all([3, 1, 2]);
    list.sort();
    assert_eq!(&*list, &[3, 2, 1]);
}

#[test]
fn test_contains_and_index_of() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([5, 6, 7]);

    assert!(list.contains(&6));
    assert!(!list.contains(&8));
    assert_eq!(list.index_of(&7), Some(2));
    assert_eq!(list.index_of(&8), None);
}

#[test]
fn test_for_each_order() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([10, 11, 12]);

    let mut seen = Vec::new();
    list.for_each(&mut |element, index| seen.push((*element, index)));
    assert_eq!(seen, vec![(10, 0), (11, 1), (12, 2)]);
}

#[test]
fn test_some() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3]);

    assert!(list.some(&mut |element, _| *element > 2));
    assert!(!list.some(&mut |element, _| *element > 3));
    assert!(list.some(&mut |_, index| index == 0));
}

#[test]
fn test_filter() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3, 4, 5]);

    let evens = list.filter(&mut |element| element % 2 == 0);
    assert_eq!(&*evens, &[2, 4]);
    assert_eq!(list.len(), 5, "Filtering should not modify the source list.");
}

#[test]
fn test_sub_list_valid_range() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3, 4, 5]);

    let sub = list.sub_list(1, 4);
    assert!(sub.is_range());
    assert_eq!(&**sub.as_list(), &[2, 3, 4], "The range should be half-open.");

    let empty = list.sub_list(2, 2);
    assert_eq!(empty.as_list().len(), 0, "An empty range is still a valid range.");
}

#[test]
fn test_sub_list_invalid_range_returns_original() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3]);

    for (start, end) in [(2, 1), (0, 4), (5, 6)] {
        let sub = list.sub_list(start, end);
        assert!(sub.is_whole(), "An invalid range should return the list itself.");
        assert!(
            ptr::eq(sub.as_list(), &list),
            "The whole-list result should be the same instance, not a copy."
        );
    }
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut list = ArrayList::new(unordered());
    list.push(counter.clone());
    list.push(counter.clone());

    list.clear();
    assert_eq!(list.len(), 0);
    assert_eq!(list.cap(), 0, "Clearing should release the backing store.");
    assert_eq!(counter.count(), 2);

    list.push(counter.clone());
    assert_eq!(list.len(), 1, "A cleared list should accept new elements.");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new();
    {
        let mut list = ArrayList::new(unordered());
        for _ in 0..5 {
            list.push(counter.clone());
        }
        drop(list.take_at(0));
        assert_eq!(counter.count(), 1);
    }
    assert_eq!(counter.count(), 5, "Every element should be dropped exactly once.");
}

#[test]
fn test_clone_is_deep() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3]);

    let mut clone = list.clone();
    assert_eq!(clone.cap(), 3, "A clone should allocate exactly its length.");

    clone.push(4);
    assert_eq!(&*list, &[1, 2, 3], "Mutating a clone should not affect the original.");
    assert_eq!(&*clone, &[1, 2, 3, 4]);
}

#[test]
fn test_from_iterable() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3]);

    let copy = ArrayList::from_iterable(&list, Comparator::natural());
    assert_eq!(copy, list);
}

#[test]
fn test_extend() {
    let mut list = ArrayList::new(Comparator::natural());
    list.extend([1, 2, 3].into_iter().filter(|n| n % 2 == 1));
    assert_eq!(&*list, &[1, 3]);
}

#[test]
fn test_zero_sized_elements() {
    let mut list = ArrayList::new(unordered());
    for _ in 0..1000 {
        list.push(ZeroSizedType);
    }

    assert_eq!(list.len(), 1000);
    assert_eq!(list.cap(), usize::MAX, "Zero-sized elements never need real capacity.");
    assert_eq!(list.pop(), Some(ZeroSizedType));
    assert_eq!(list.len(), 999);
}

#[test]
fn test_slice_index_panics_out_of_bounds() {
    assert_panics!(
        {
            let mut list = ArrayList::new(Comparator::natural());
            list.add_all([1, 2, 3]);
            list[10]
        },
        "Direct slice indexing should panic out of bounds, unlike at."
    );
}

#[test]
fn test_display() {
    let mut list = ArrayList::new(Comparator::natural());
    list.add_all([1, 2, 3]);
    assert_eq!(format!("{}", list), "[1, 2, 3]");
}
