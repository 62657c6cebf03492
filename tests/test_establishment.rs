//! Establishment aggregate: ratings, averages, active flag and catalog lookups.

use saborexpress::{Dish, Establishment, Price, ValidationError};

#[test]
fn new_establishment_is_inactive_and_empty() {
    let establishment = Establishment::new("Praça", "Gourmet");
    assert!(!establishment.is_active());
    assert!(establishment.ratings().is_empty());
    assert!(establishment.catalog().is_empty());
    assert_eq!(establishment.average_rating(), None);
}

#[test]
fn ratings_inside_the_range_are_recorded() {
    let mut establishment = Establishment::new("Praça", "Gourmet");
    establishment.add_rating("Gui", 1.0).unwrap();
    establishment.add_rating("Lais", 5.0).unwrap();
    establishment.add_rating("Emy", 3.5).unwrap();
    assert_eq!(establishment.ratings().len(), 3);
    assert_eq!(establishment.ratings()[2].author(), "Emy");
}

#[test]
fn out_of_range_ratings_leave_no_trace() {
    let mut establishment = Establishment::new("Praça", "Gourmet");
    for score in [0.0, 0.99, 5.01, 10.0, -3.0, f64::NAN, f64::INFINITY] {
        let result = establishment.add_rating("Gui", score);
        assert!(matches!(result, Err(ValidationError::OutOfRange(_))), "score {}", score);
    }
    assert_eq!(
        establishment.add_rating("   ", 4.0),
        Err(ValidationError::EmptyAuthor)
    );
    assert!(establishment.ratings().is_empty());
}

#[test]
fn average_is_rounded_to_one_decimal() {
    let mut establishment = Establishment::new("Praça", "Gourmet");
    establishment.add_rating("Gui", 5.0).unwrap();
    establishment.add_rating("Lais", 3.0).unwrap();
    assert_eq!(establishment.average_rating(), Some(4.0));

    establishment.add_rating("Emy", 4.0).unwrap();
    establishment.add_rating("Zé", 4.0).unwrap();
    establishment.add_rating("Ana", 5.0).unwrap();
    establishment.add_rating("Bia", 4.0).unwrap();
    // 25 / 6 = 4.1666..
    assert_eq!(establishment.average_rating(), Some(4.2));
}

#[test]
fn average_ties_round_to_even() {
    for (scores, expected) in [([4.0, 4.5], 4.2), ([1.0, 1.5], 1.2), ([3.0, 3.5], 3.2), ([4.5, 4.0], 4.2)] {
        let mut establishment = Establishment::new("Praça", "Gourmet");
        for score in scores {
            establishment.add_rating("Gui", score).unwrap();
        }
        assert_eq!(establishment.average_rating(), Some(expected), "scores {:?}", scores);
    }
}

#[test]
fn toggle_flips_and_names_the_new_state() {
    let mut establishment = Establishment::new("Praça", "Gourmet");
    let message = establishment.toggle_active();
    assert!(establishment.is_active());
    assert!(message.contains("Praça"));
    assert!(message.contains("activated"));

    let message = establishment.toggle_active();
    assert!(!establishment.is_active());
    assert!(message.contains("deactivated"));
}

#[test]
fn name_matching_ignores_case() {
    let establishment = Establishment::new("Praça", "Gourmet");
    assert!(establishment.matches_name("PRAÇA"));
    assert!(establishment.matches_name("praça"));
    assert!(!establishment.matches_name("Praca"));
}

#[test]
fn catalog_keeps_insertion_order_and_finds_first_match() {
    let mut establishment = Establishment::new("Praça", "Gourmet");
    let first = Dish::new("Arroz", "10.00".parse::<Price>().unwrap(), None);
    let second = Dish::new("arroz", "12.00".parse::<Price>().unwrap(), None);
    establishment.add_catalog_item(first.into());
    establishment.add_catalog_item(second.into());

    assert_eq!(establishment.catalog().len(), 2);
    let found = establishment.find_catalog_item("ARROZ").unwrap();
    assert_eq!(found.price().to_string(), "10.00");
    assert!(establishment.find_catalog_item("Feijão").is_none());
}

#[test]
fn summary_reflects_state() {
    let mut establishment = Establishment::new("Praça", "Gourmet");
    establishment.toggle_active();
    establishment.add_rating("Gui", 4.0).unwrap();

    let summary = establishment.summary();
    assert_eq!(summary.name, "Praça");
    assert_eq!(summary.category, "Gourmet");
    assert!(summary.active);
    assert_eq!(summary.average_rating, Some(4.0));
}
