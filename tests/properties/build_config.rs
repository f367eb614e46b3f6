//! Property tests for the tsconfig merge.

use proptest::prelude::*;
use serde_json::{Map, Value};

use tsinit::domain::entities::build_config::{
    compiler_dir, merge_required_dirs, COMPILER_OPTIONS, OUT_DIR, ROOT_DIR,
};
use tsinit::domain::entities::CompilerDirs;

fn option_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(ROOT_DIR.to_string()),
        Just(OUT_DIR.to_string()),
        "[a-zA-Z]{1,12}",
    ]
}

fn options() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map(option_key(), "[a-z./]{1,10}", 0..6).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect()
    })
}

fn document(options: Map<String, Value>) -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert(COMPILER_OPTIONS.to_string(), Value::Object(options));
    doc.insert(
        "exclude".to_string(),
        Value::Array(vec![Value::String("node_modules".to_string())]),
    );
    doc
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every value the user set survives the merge unchanged.
    #[test]
    fn property_merge_preserves_existing_values(existing in options()) {
        let mut doc = document(existing.clone());

        merge_required_dirs(&mut doc, &CompilerDirs::default()).unwrap();

        let merged = doc[COMPILER_OPTIONS].as_object().unwrap();
        for (key, value) in &existing {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        prop_assert!(compiler_dir(&doc, ROOT_DIR).is_some());
        prop_assert!(compiler_dir(&doc, OUT_DIR).is_some());
        prop_assert_eq!(&doc["exclude"][0], "node_modules");
    }

    /// PROPERTY: a merged document needs no further merge.
    #[test]
    fn property_merge_is_idempotent(existing in options()) {
        let dirs = CompilerDirs::default();
        let mut doc = document(existing);
        merge_required_dirs(&mut doc, &dirs).unwrap();
        let once = doc.clone();

        let added = merge_required_dirs(&mut doc, &dirs).unwrap();

        prop_assert!(added.is_empty());
        prop_assert_eq!(doc, once);
    }
}
