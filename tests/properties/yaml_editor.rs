//! Property tests for manifest list edits.

use proptest::prelude::*;

use assetsync::domain::services::declared_assets;
use assetsync::{add_list_item, remove_list_item};

const SECTION: &[&str] = &["flutter", "assets"];

fn asset_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("assets/[a-z0-9_-]{1,8}(/[a-z0-9_-]{1,8}){0,2}\\.(png|json|ttf)")
        .unwrap()
}

fn block_manifest(items: &[String]) -> String {
    let mut doc = String::from("name: demo\n# keep me\nflutter:\n  uses-material-design: true\n");
    if items.is_empty() {
        doc.push_str("  assets: []\n");
    } else {
        doc.push_str("  assets:\n");
        for item in items {
            doc.push_str(&format!("    - {}\n", item));
        }
    }
    doc.push_str("\ndev_dependencies:\n  test: any\n");
    doc
}

fn declared(doc: &str) -> Vec<String> {
    declared_assets(doc, SECTION)
        .unwrap()
        .into_iter()
        .map(|p| p.to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Adding the same value twice changes nothing the second time.
    #[test]
    fn property_add_is_idempotent(
        existing in proptest::collection::btree_set(asset_path(), 0..5),
        value in asset_path()
    ) {
        let items: Vec<String> = existing.into_iter().collect();
        let doc = block_manifest(&items);

        let once = add_list_item(&doc, SECTION, &value).unwrap();
        let twice = add_list_item(&once, SECTION, &value).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(declared(&once).contains(&value));
    }

    /// PROPERTY: Adding then removing a new value restores the block list
    /// byte for byte.
    #[test]
    fn property_add_then_remove_round_trips(
        existing in proptest::collection::btree_set(asset_path(), 1..5),
        value in asset_path()
    ) {
        prop_assume!(!existing.contains(&value));
        let items: Vec<String> = existing.into_iter().collect();
        let doc = block_manifest(&items);

        let added = add_list_item(&doc, SECTION, &value).unwrap();
        let removed = remove_list_item(&added, SECTION, &value).unwrap();
        prop_assert_eq!(removed, doc);
    }

    /// PROPERTY: Edits only touch the target list; other keys and comments
    /// survive and prior entries keep their order.
    #[test]
    fn property_edit_preserves_other_entries(
        existing in proptest::collection::btree_set(asset_path(), 0..5),
        value in asset_path()
    ) {
        let items: Vec<String> = existing.into_iter().collect();
        let doc = block_manifest(&items);

        let added = add_list_item(&doc, SECTION, &value).unwrap();
        prop_assert!(added.starts_with("name: demo\n# keep me\nflutter:\n"));
        prop_assert!(added.ends_with("\ndev_dependencies:\n  test: any\n"));

        let after: Vec<String> = declared(&added)
            .into_iter()
            .filter(|p| p != &value)
            .collect();
        let before: Vec<String> = items.into_iter().filter(|p| p != &value).collect();
        prop_assert_eq!(after, before);
    }

    /// PROPERTY: Edits never panic on arbitrary text.
    #[test]
    fn property_edit_never_panics(
        doc in "(?s).{0,256}",
        value in asset_path()
    ) {
        let _ = add_list_item(&doc, SECTION, &value);
        let _ = remove_list_item(&doc, SECTION, &value);
    }
}
