use super::*;

const HEADINGS: &[&str] = &["Fist", "Open Hand", "Point"];

#[test]
fn lowercase_gesture_activates_only_matching_card() {
    assert_eq!(active_flags(HEADINGS, "open hand"), vec![false, true, false]);
}

#[test]
fn unknown_gesture_activates_nothing() {
    assert_eq!(active_flags(HEADINGS, "unknown"), vec![false, false, false]);
}

#[test]
fn matching_ignores_case_on_both_sides() {
    assert!(heading_matches("POINT", "point"));
    assert!(heading_matches("point", "Point"));
}

#[test]
fn matching_is_exact_not_prefix() {
    assert!(!heading_matches("Open Hand", "Open"));
    assert!(!heading_matches("Fist", "Fist "));
}

#[test]
fn duplicate_headings_are_all_activated() {
    assert_eq!(active_flags(&["Fist", "fist", "Point"], "FIST"), vec![true, true, false]);
}

#[test]
fn catalogue_headings_are_distinct_ignoring_case() {
    for (i, a) in GESTURE_CARDS.iter().enumerate() {
        for (j, b) in GESTURE_CARDS.iter().enumerate() {
            if i != j {
                assert!(!heading_matches(a.name, b.name));
            }
        }
    }
}

#[test]
fn no_gesture_placeholder_matches_no_card() {
    let headings: Vec<&str> = GESTURE_CARDS.iter().map(|c| c.name).collect();
    assert!(active_flags(&headings, "No Gesture").iter().all(|active| !active));
}
