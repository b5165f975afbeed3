//! Property-based tests for the favorites registry and draft validation.

use proptest::collection::vec;
use proptest::prelude::*;

use evorg::app::FavoritesRegistry;
use evorg::shared::event::{millis_to_local, EventDraft, OTHER_EVENT_TYPE};

proptest! {
    /// Toggling only ever marks; repeated toggles never un-favorite.
    #[test]
    fn toggle_is_idempotent(ids in vec("[a-z0-9]{1,8}", 1..20), repeats in 1..4usize) {
        let mut registry = FavoritesRegistry::new();
        for _ in 0..repeats {
            for id in &ids {
                registry.toggle(id);
            }
        }
        for id in &ids {
            prop_assert!(registry.contains(id));
        }
    }

    /// Remove is the only way out, and it only affects the removed id.
    #[test]
    fn remove_affects_only_the_target(ids in vec("[a-z0-9]{1,8}", 2..20)) {
        let mut registry = FavoritesRegistry::new();
        for id in &ids {
            registry.toggle(id);
        }
        let target = ids[0].clone();
        registry.remove(&target);
        prop_assert!(!registry.contains(&target));
        for id in ids.iter().filter(|id| **id != target) {
            prop_assert!(registry.contains(id));
        }
    }

    /// A draft with any required text field blank never validates.
    #[test]
    fn blank_required_field_fails_validation(which in 0..4usize, filler in "[a-zA-Z ]{1,20}") {
        let mut draft = EventDraft {
            title: filler.clone(),
            description: filler.clone(),
            location: filler.clone(),
            event_type: "Conference".to_string(),
            custom_event_type: String::new(),
            date: Some(chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            time: Some(chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
        };
        match which {
            0 => draft.title = "   ".to_string(),
            1 => draft.description = String::new(),
            2 => draft.location = "  ".to_string(),
            _ => draft.time = None,
        }
        prop_assert!(draft.validate().is_err());
    }

    /// "Other" without a custom name fails; with one, the custom name wins.
    #[test]
    fn other_requires_and_uses_custom_type(custom in "[a-zA-Z]{1,15}") {
        let mut draft = EventDraft {
            title: "t".to_string(),
            description: "d".to_string(),
            location: "l".to_string(),
            event_type: OTHER_EVENT_TYPE.to_string(),
            custom_event_type: String::new(),
            date: Some(chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            time: Some(chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
        };
        prop_assert!(draft.validate().is_err());

        draft.custom_event_type = custom.clone();
        prop_assert!(draft.validate().is_ok());
        prop_assert_eq!(draft.resolved_event_type(), custom.as_str());
    }

    /// Any representable millisecond timestamp converts to a local time.
    #[test]
    fn millis_within_range_convert(ms in 0i64..4_102_444_800_000) {
        prop_assert!(millis_to_local(ms).is_some());
    }
}
