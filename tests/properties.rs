//! Randomized properties over the list and set types, checking them against [`Vec`] as a model.

use ordered_collections::collections::contiguous::ArrayList;
use ordered_collections::collections::linked::LinkedList;
use ordered_collections::collections::set::Set;
use ordered_collections::collections::traits::List;
use ordered_collections::compare::Comparator;
use quickcheck::quickcheck;

quickcheck! {
    fn array_list_sort_matches_model(elements: Vec<i32>) -> bool {
        let mut list = ArrayList::new(Comparator::natural());
        list.add_all(elements.clone());
        list.sort();

        let mut expected = elements;
        expected.sort_unstable();
        &*list == expected.as_slice()
    }

    fn linked_list_sort_matches_model(elements: Vec<i32>) -> bool {
        let mut list = LinkedList::new(Comparator::natural());
        list.extend(elements.clone());
        list.sort();

        let mut expected = elements;
        expected.sort_unstable();
        list.iter().copied().collect::<Vec<_>>() == expected
    }

    fn linked_list_sort_preserves_tail(elements: Vec<i32>) -> bool {
        let mut list = LinkedList::new(Comparator::natural());
        list.extend(elements);
        list.sort();
        list.push_back(i32::MAX);

        list.back() == Some(&i32::MAX) && list.iter().last() == Some(&i32::MAX)
    }

    fn array_list_reverse_matches_model(elements: Vec<i32>) -> bool {
        let mut list = ArrayList::new(Comparator::natural());
        list.add_all(elements.clone());
        list.reverse();

        let expected: Vec<_> = elements.into_iter().rev().collect();
        &*list == expected.as_slice()
    }

    fn sub_list_matches_slice(elements: Vec<i32>, start: usize, end: usize) -> bool {
        let mut list = ArrayList::new(Comparator::natural());
        list.add_all(elements.clone());

        let result = list.sub_list(start, end);
        if start > elements.len() || end > elements.len() || start > end {
            result.is_whole()
        } else {
            result.is_range() && &**result.as_list() == &elements[start..end]
        }
    }

    fn set_never_holds_duplicates(elements: Vec<i8>) -> bool {
        let mut set = Set::new(Comparator::natural());
        set.add_all(elements.clone());

        let stored: Vec<i8> = set.iter().copied().collect();
        let unique = stored
            .iter()
            .enumerate()
            .all(|(index, a)| stored[..index].iter().all(|b| a != b));
        let complete = elements.iter().all(|element| set.contains(element));

        unique && complete && set.len() <= elements.len()
    }

    fn set_union_excludes_common_elements(left: Vec<i8>, right: Vec<i8>) -> bool {
        let mut a = Set::new(Comparator::natural());
        a.add_all(left);
        let mut b = Set::new(Comparator::natural());
        b.add_all(right);

        a.union(&b)
            .iter()
            .all(|element| a.contains(element) != b.contains(element))
    }
}
