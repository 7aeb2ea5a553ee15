use std::str::FromStr;

use krakenballs_lib::sets::{self, add_set, parse_numeric, remove_set, update_field};
use krakenballs_lib::{Set, SetBounds, SetField};

fn seeded_rep_sets(count: usize) -> Vec<Set> {
    let mut sets = vec![Set::seeded(false)];
    for _ in 1..count {
        add_set(&mut sets, SetBounds::default());
    }
    sets
}

#[test]
fn test_add_set_copies_last_with_new_id() {
    let mut sets = vec![Set::seeded(false)];
    update_field(&mut sets, 0, SetField::Weight, "42.5");

    assert!(add_set(&mut sets, SetBounds::default()));
    assert_eq!(sets.len(), 2);
    assert_ne!(sets[0].id, sets[1].id);
    assert_eq!(sets[1].reps, Some(10.0));
    assert_eq!(sets[1].weight, 42.5);
    assert_eq!(sets[1].time_interval, None);
}

#[test]
fn test_add_set_to_empty_list_uses_template() {
    let mut sets = Vec::new();
    assert!(add_set(&mut sets, SetBounds::default()));
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].reps, Some(10.0));
    assert_eq!(sets[0].weight, 20.0);
    assert_eq!(sets[0].time_interval, Some(30.0));
}

#[test]
fn test_add_set_stops_at_max() {
    let mut sets = seeded_rep_sets(10);
    assert_eq!(sets.len(), 10);
    assert!(!add_set(&mut sets, SetBounds::default()));
    assert_eq!(sets.len(), 10);

    let tight = SetBounds {
        min_sets: 1,
        max_sets: 3,
    };
    let mut sets = seeded_rep_sets(3);
    assert!(!add_set(&mut sets, tight));
}

#[test]
fn test_remove_set_keeps_minimum() {
    let mut sets = vec![Set::seeded(true)];
    assert!(!remove_set(&mut sets, 0, SetBounds::default()));
    assert_eq!(sets.len(), 1);

    let mut sets = seeded_rep_sets(3);
    let bounds = SetBounds {
        min_sets: 2,
        max_sets: 10,
    };
    assert!(remove_set(&mut sets, 0, bounds));
    assert!(!remove_set(&mut sets, 0, bounds));
    assert_eq!(sets.len(), 2);
}

#[test]
fn test_remove_set_renumbers_later_sets() {
    let mut sets = seeded_rep_sets(3);
    let third_id = sets[2].id.clone();

    assert!(remove_set(&mut sets, 1, SetBounds::default()));
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[1].id, third_id);
    assert_eq!(sets::set_number(1), 2);

    assert!(!remove_set(&mut sets, 7, SetBounds::default()));
    assert_eq!(sets.len(), 2);
}

#[test]
fn test_bounds_hold_over_any_edit_sequence() {
    let bounds = SetBounds::default();
    let mut sets = vec![Set::seeded(false)];
    for step in 0..60 {
        if step % 3 == 2 {
            remove_set(&mut sets, step % 4, bounds);
        } else {
            add_set(&mut sets, bounds);
        }
        assert!(sets.len() >= bounds.min_sets);
        assert!(sets.len() <= bounds.max_sets);
    }
}

#[test]
fn test_update_field_parses_numbers() {
    let mut sets = vec![Set::seeded(true)];

    assert!(update_field(&mut sets, 0, SetField::TimeInterval, "45s"));
    assert_eq!(sets[0].time_interval, Some(45.0));

    assert!(update_field(&mut sets, 0, SetField::Weight, "heavy"));
    assert_eq!(sets[0].weight, 0.0);

    assert!(update_field(&mut sets, 0, SetField::Reps, " 8 "));
    assert_eq!(sets[0].reps, Some(8.0));

    assert!(update_field(&mut sets, 0, SetField::Id, "custom-id"));
    assert_eq!(sets[0].id, "custom-id");

    assert!(!update_field(&mut sets, 3, SetField::Reps, "5"));
}

#[test]
fn test_parse_numeric_takes_leading_number() {
    assert_eq!(parse_numeric("12"), 12.0);
    assert_eq!(parse_numeric("12.5kg"), 12.5);
    assert_eq!(parse_numeric("  7"), 7.0);
    assert_eq!(parse_numeric(".5"), 0.5);
    assert_eq!(parse_numeric("-3"), -3.0);
    assert_eq!(parse_numeric("3."), 3.0);
    assert_eq!(parse_numeric(""), 0.0);
    assert_eq!(parse_numeric("abc"), 0.0);
    assert_eq!(parse_numeric("."), 0.0);
    assert_eq!(parse_numeric("-"), 0.0);
}

#[test]
fn test_set_field_names() {
    assert_eq!(SetField::from_str("timeInterval").ok(), Some(SetField::TimeInterval));
    assert_eq!(SetField::from_str("REPS").ok(), Some(SetField::Reps));
    assert!(SetField::from_str("tempo").is_err());
    assert_eq!(SetField::TimeInterval.to_string(), "timeInterval");
    assert!(!SetField::Id.is_numeric());
    assert!(SetField::Weight.is_numeric());
}

#[test]
fn test_seeded_set_and_target() {
    let hold = Set::seeded(true);
    assert_eq!(hold.target(true), Some(30.0));
    assert_eq!(hold.weight, 0.0);

    let reps = Set::seeded(false);
    assert_eq!(reps.target(false), Some(10.0));
    assert_eq!(reps.target(true), None);
}
