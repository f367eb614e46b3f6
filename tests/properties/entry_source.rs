//! Property tests for the entry file import rewrite.

use proptest::prelude::*;

use tsinit::domain::entities::entry_source::{rewrite_app_import, rewritten_import};

const APP_IMPORT: &str = "import App from './App';";

fn other_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ;{}()=.'/]{0,40}")
        .unwrap()
        .prop_filter("not the app import", |s| s != APP_IMPORT)
}

fn out_dir() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(\\./)?[a-z]{1,8}(/[a-z]{1,8})?/?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: only the import line changes.
    #[test]
    fn property_rewrite_touches_only_the_import(
        before in proptest::collection::vec(other_line(), 0..8),
        after in proptest::collection::vec(other_line(), 0..8),
        out_dir in out_dir(),
    ) {
        let mut lines = before.clone();
        lines.push(APP_IMPORT.to_string());
        lines.extend(after.clone());
        let source = lines.join("\n");

        let rewritten = rewrite_app_import(&source, &out_dir).unwrap().unwrap();

        let mut expected = before;
        expected.push(rewritten_import(&out_dir));
        expected.extend(after);
        prop_assert_eq!(rewritten, expected.join("\n"));
    }

    /// PROPERTY: a rewritten file is left alone on the next run.
    #[test]
    fn property_rewrite_is_idempotent(
        lines in proptest::collection::vec(other_line(), 0..8),
        out_dir in out_dir(),
    ) {
        let mut lines = lines;
        lines.push(APP_IMPORT.to_string());
        let source = lines.join("\n");

        let once = rewrite_app_import(&source, &out_dir).unwrap().unwrap();

        prop_assert_eq!(rewrite_app_import(&once, &out_dir).unwrap(), None);
    }

    /// PROPERTY: rewriting never panics on arbitrary input.
    #[test]
    fn property_rewrite_never_panics(source in "(?s).{0,256}", out_dir in ".{0,16}") {
        let _ = rewrite_app_import(&source, &out_dir);
    }
}
