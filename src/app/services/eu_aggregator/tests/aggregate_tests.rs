//! Tests for the insertion-ordered country aggregate

use crate::app::services::eu_aggregator::CountryAggregate;

#[test]
fn test_add_accumulates() {
    let mut aggregate = CountryAggregate::new();
    aggregate.add("Germany", 1.0);
    aggregate.add("France", 1.0);
    aggregate.add("Germany", 1.0);

    assert_eq!(aggregate.len(), 2);
    assert_eq!(aggregate.get("Germany"), Some(2.0));
    assert_eq!(aggregate.get("France"), Some(1.0));
    assert_eq!(aggregate.get("Spain"), None);
}

#[test]
fn test_insertion_order_before_sort() {
    let mut aggregate = CountryAggregate::new();
    aggregate.add("Sweden", 5.0);
    aggregate.add("Austria", 3.0);
    aggregate.add("Malta", 4.0);

    assert_eq!(aggregate.keys(), vec!["Sweden", "Austria", "Malta"]);
    assert_eq!(aggregate.values(), vec![5.0, 3.0, 4.0]);
}

#[test]
fn test_min_assign_keeps_minimum() {
    let mut aggregate = CountryAggregate::new();
    aggregate.min_assign("Germany", 7);
    aggregate.min_assign("Germany", 2);
    aggregate.min_assign("Germany", 5);

    assert_eq!(aggregate.get("Germany"), Some(2));
}

#[test]
fn test_min_assign_first_sight_has_no_sentinel() {
    let mut aggregate = CountryAggregate::new();
    // A legitimate rank of 0 must survive
    aggregate.min_assign("Germany", 0);

    assert_eq!(aggregate.get("Germany"), Some(0));
}

#[test]
fn test_sort_values_ascending() {
    let mut aggregate = CountryAggregate::new();
    aggregate.add("Sweden", 5.0);
    aggregate.add("Austria", 3.0);
    aggregate.add("Malta", 4.0);

    aggregate.sort_values();

    assert_eq!(aggregate.keys(), vec!["Austria", "Malta", "Sweden"]);
    assert_eq!(aggregate.values(), vec![3.0, 4.0, 5.0]);
    // Lookups still work after the index rebuild
    assert_eq!(aggregate.get("Sweden"), Some(5.0));
}

#[test]
fn test_sort_values_descending() {
    let mut aggregate = CountryAggregate::new();
    aggregate.min_assign("Germany", 5);
    aggregate.min_assign("France", 3);
    aggregate.min_assign("Italy", 9);

    aggregate.sort_values_reverse();

    assert_eq!(aggregate.keys(), vec!["Italy", "Germany", "France"]);
    assert_eq!(aggregate.values(), vec![9, 5, 3]);
}

#[test]
fn test_sort_is_stable_on_ties() {
    let mut aggregate = CountryAggregate::new();
    aggregate.add("Sweden", 1.0);
    aggregate.add("Austria", 1.0);
    aggregate.add("Malta", 1.0);

    aggregate.sort_values();
    assert_eq!(aggregate.keys(), vec!["Sweden", "Austria", "Malta"]);

    aggregate.sort_values_reverse();
    assert_eq!(aggregate.keys(), vec!["Sweden", "Austria", "Malta"]);
}

#[test]
fn test_iter_matches_parallel_sequences() {
    let mut aggregate = CountryAggregate::new();
    aggregate.add("Sweden", 5.0);
    aggregate.add("Austria", 3.0);

    let pairs: Vec<(&str, f64)> = aggregate.iter().collect();
    assert_eq!(pairs, vec![("Sweden", 5.0), ("Austria", 3.0)]);
}
