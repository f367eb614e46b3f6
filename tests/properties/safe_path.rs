//! Property tests for project-relative path validation.

use std::path::{Component, Path};

use proptest::prelude::*;

use tsinit::domain::value_objects::SafePath;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![Just(".".to_string()), Just("..".to_string()), "[a-z]{1,6}"]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics.
    #[test]
    fn property_safe_path_never_panics(input in ".{0,64}") {
        let _ = SafePath::new(&input);
    }

    /// PROPERTY: an accepted path resolves inside the root.
    #[test]
    fn property_accepted_paths_stay_inside_root(
        segments in proptest::collection::vec(segment(), 1..6),
    ) {
        let input = segments.join("/");
        let root = Path::new("project");

        if let Ok(safe) = SafePath::new(&input) {
            prop_assert!(!segments.iter().any(|s| s == ".."));
            prop_assert!(safe
                .as_path()
                .components()
                .all(|c| matches!(c, Component::Normal(_))));
            prop_assert!(safe.resolve(root).starts_with(root));
        } else {
            prop_assert!(segments.iter().any(|s| s == ".."));
        }
    }
}
