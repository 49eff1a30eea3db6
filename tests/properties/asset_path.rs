//! Property tests for asset path parsing and coverage.

use proptest::prelude::*;

use assetsync::AssetPath;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = AssetPath::parse(&s);
    }

    /// PROPERTY: Any path containing a `..` segment is rejected.
    #[test]
    fn property_traversal_is_rejected(
        before in proptest::collection::vec(segment(), 0..3),
        after in proptest::collection::vec(segment(), 0..3)
    ) {
        let mut segments = before;
        segments.push("..".to_string());
        segments.extend(after);
        prop_assert!(AssetPath::parse(&segments.join("/")).is_err());
    }

    /// PROPERTY: A directory entry covers every file beneath it.
    #[test]
    fn property_directory_covers_descendants(
        dir in proptest::collection::vec(segment(), 1..3),
        rest in proptest::collection::vec(segment(), 1..3)
    ) {
        prop_assume!(dir.iter().chain(rest.iter()).all(|s| s != "." && s != ".."));
        let directory = AssetPath::parse(&format!("{}/", dir.join("/"))).unwrap();
        let file = AssetPath::parse(&format!("{}/{}", dir.join("/"), rest.join("/"))).unwrap();
        prop_assert!(directory.is_directory());
        prop_assert!(directory.covers(&file));
        prop_assert!(!file.covers(&directory));
    }
}
