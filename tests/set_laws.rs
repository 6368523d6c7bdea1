//! Property-based tests for Set laws.
//!
//! These tests verify that Set satisfies the algebraic properties expected
//! of a mathematical set.

use proptest::prelude::*;
use setalgebra::Set;
use std::collections::HashSet;

fn set_of(elements: Vec<i32>) -> Set<i32> {
    elements.into_iter().collect()
}

// =============================================================================
// Distinct Length Law
// Description: len equals the number of distinct constructor arguments
// =============================================================================

proptest! {
    #[test]
    fn prop_distinct_length_law(elements in prop::collection::vec(0..20i32, 0..60)) {
        let distinct: HashSet<i32> = elements.iter().copied().collect();
        let set = Set::from_values(elements);

        prop_assert_eq!(set.len(), distinct.len());
    }
}

// =============================================================================
// Insert-Contains Law
// Description: An inserted value is always contained in the set
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        new_element: i32
    ) {
        let mut set = set_of(elements);
        set.insert(new_element);

        prop_assert!(set.contains(&new_element));
    }
}

// =============================================================================
// Delete-Contains Law
// Description: A deleted value is never contained, whatever the prior state
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_contains_law(
        elements in prop::collection::vec(0..20i32, 0..50),
        element_to_delete in 0..20i32
    ) {
        let mut set = set_of(elements);
        set.delete(&element_to_delete);

        prop_assert!(!set.contains(&element_to_delete));
    }
}

// =============================================================================
// Idempotence Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_idempotence_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        value: i32
    ) {
        let mut once = set_of(elements);
        once.insert(value);
        let mut twice = once.clone();
        twice.insert(value);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_delete_idempotence_law(
        elements in prop::collection::vec(0..20i32, 0..50),
        value in 0..20i32
    ) {
        let mut once = set_of(elements);
        once.delete(&value);
        let mut twice = once.clone();
        twice.delete(&value);

        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Union Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        prop_assert_eq!(set_a.union(&set_b), set_b.union(&set_a));
    }

    #[test]
    fn prop_union_identity_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set = set_of(elements);
        let empty: Set<i32> = Set::new();

        prop_assert_eq!(set.union(&empty), set.clone());
        prop_assert_eq!(empty.union(&set), set);
    }

    #[test]
    fn prop_union_membership_law(
        elements_a in prop::collection::vec(0..30i32, 0..30),
        elements_b in prop::collection::vec(0..30i32, 0..30),
        probe in 0..30i32
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);
        let union = set_a.union(&set_b);

        prop_assert_eq!(
            union.contains(&probe),
            set_a.contains(&probe) || set_b.contains(&probe)
        );
    }
}

// =============================================================================
// Intersection Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_commutativity_law(
        elements_a in prop::collection::vec(0..40i32, 0..30),
        elements_b in prop::collection::vec(0..40i32, 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        prop_assert_eq!(set_a.intersection(&set_b), set_b.intersection(&set_a));
    }

    #[test]
    fn prop_intersection_membership_law(
        elements_a in prop::collection::vec(0..30i32, 0..30),
        elements_b in prop::collection::vec(0..30i32, 0..30),
        probe in 0..30i32
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);
        let intersection = set_a.intersection(&set_b);

        prop_assert_eq!(
            intersection.contains(&probe),
            set_a.contains(&probe) && set_b.contains(&probe)
        );
    }

    #[test]
    fn prop_intersection_is_subset_of_both(
        elements_a in prop::collection::vec(0..40i32, 0..30),
        elements_b in prop::collection::vec(0..40i32, 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);
        let intersection = set_a.intersection(&set_b);

        prop_assert!(set_a.is_superset(&intersection));
        prop_assert!(set_b.is_superset(&intersection));
    }
}

// =============================================================================
// Difference Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_self_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set = set_of(elements);
        prop_assert!(set.difference(&set).is_empty());
    }

    #[test]
    fn prop_difference_empty_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set = set_of(elements);
        let empty: Set<i32> = Set::new();

        prop_assert_eq!(set.difference(&empty), set);
    }

    #[test]
    fn prop_difference_membership_law(
        elements_a in prop::collection::vec(0..30i32, 0..30),
        elements_b in prop::collection::vec(0..30i32, 0..30),
        probe in 0..30i32
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);
        let difference = set_a.difference(&set_b);

        prop_assert_eq!(
            difference.contains(&probe),
            set_a.contains(&probe) && !set_b.contains(&probe)
        );
    }

    #[test]
    fn prop_difference_partitions_union(
        elements_a in prop::collection::vec(0..40i32, 0..30),
        elements_b in prop::collection::vec(0..40i32, 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        let rebuilt = set_a
            .difference(&set_b)
            .union(&set_a.intersection(&set_b))
            .union(&set_b.difference(&set_a));

        prop_assert_eq!(rebuilt, set_a.union(&set_b));
    }
}

// =============================================================================
// Equality and Superset Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_insertion_order(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let forward = set_of(elements.clone());
        let backward: Set<i32> = elements.into_iter().rev().collect();

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_equal_iff_mutual_superset(
        elements_a in prop::collection::vec(0..8i32, 0..8),
        elements_b in prop::collection::vec(0..8i32, 0..8)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        prop_assert_eq!(
            set_a == set_b,
            set_a.is_superset(&set_b) && set_b.is_superset(&set_a)
        );
    }

    #[test]
    fn prop_union_is_superset_of_operands(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);
        let union = set_a.union(&set_b);

        prop_assert!(union.is_superset(&set_a));
        prop_assert!(union.is_superset(&set_b));
    }
}

// =============================================================================
// PopAny, Values and Clone Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_pop_any_removes_one_member(elements in prop::collection::vec(any::<i32>(), 1..50)) {
        let original = set_of(elements);
        let mut set = original.clone();

        let popped = set.pop_any();

        prop_assert!(popped.is_some());
        let popped = popped.unwrap();
        prop_assert!(original.contains(&popped));
        prop_assert!(!set.contains(&popped));
        prop_assert_eq!(set.len() + 1, original.len());
    }

    #[test]
    fn prop_values_matches_membership(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set = set_of(elements);
        let values = set.values();

        prop_assert_eq!(values.len(), set.len());
        prop_assert!(values.iter().all(|value| set.contains(value)));
        prop_assert_eq!(Set::from_values(values), set);
    }

    #[test]
    fn prop_clone_independence(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        extra: i32
    ) {
        let original = set_of(elements);
        let snapshot = original.values();
        let mut cloned = original.clone();

        prop_assert_eq!(&cloned, &original);

        cloned.insert(extra);
        cloned.clear();

        prop_assert_eq!(original.len(), snapshot.len());
        prop_assert!(original.contains_all(&snapshot));
    }
}
