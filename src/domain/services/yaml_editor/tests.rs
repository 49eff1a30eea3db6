use super::*;

const SECTION: &[&str] = &["flutter", "assets"];

fn listed(doc: &str) -> Vec<String> {
    logical_items(doc, SECTION).unwrap()
}

// === add_list_item ===

#[test]
fn add_appends_to_block_list_and_keeps_comments() {
    let doc = "\
name: demo
# top comment
flutter:
  uses-material-design: true
  assets:
    - assets/a.png # first

dev_dependencies: {}
";
    let out = add_list_item(doc, SECTION, "assets/b.png").unwrap();
    assert_eq!(
        out,
        "\
name: demo
# top comment
flutter:
  uses-material-design: true
  assets:
    - assets/a.png # first
    - assets/b.png

dev_dependencies: {}
"
    );
}

#[test]
fn add_is_idempotent() {
    let doc = "flutter:\n  assets:\n    - assets/a.png\n";
    let once = add_list_item(doc, SECTION, "assets/b.png").unwrap();
    let twice = add_list_item(&once, SECTION, "assets/b.png").unwrap();
    assert_eq!(once, twice);
    assert_eq!(add_list_item(doc, SECTION, "assets/a.png").unwrap(), doc);
}

#[test]
fn add_creates_missing_sections_at_end_of_document() {
    let doc = "name: demo\nversion: 1.0.0\n";
    let out = add_list_item(doc, SECTION, "assets/logo.png").unwrap();
    assert_eq!(
        out,
        "name: demo\nversion: 1.0.0\nflutter:\n  assets:\n    - assets/logo.png\n"
    );
}

#[test]
fn add_creates_list_under_existing_parent_with_its_indent() {
    let doc = "flutter:\n    uses-material-design: true\n\n# trailing\n";
    let out = add_list_item(doc, SECTION, "assets/x.png").unwrap();
    assert_eq!(
        out,
        "flutter:\n    uses-material-design: true\n    assets:\n        - assets/x.png\n\n# trailing\n"
    );
}

#[test]
fn add_into_empty_document() {
    let out = add_list_item("", SECTION, "assets/a.png").unwrap();
    assert_eq!(out, "flutter:\n  assets:\n    - assets/a.png\n");
    assert_eq!(listed(&out), vec!["assets/a.png"]);
}

#[test]
fn add_after_last_line_without_newline() {
    let doc = "flutter:\n  assets:\n    - a.png";
    let out = add_list_item(doc, SECTION, "b.png").unwrap();
    assert_eq!(out, "flutter:\n  assets:\n    - a.png\n    - b.png");
}

#[test]
fn add_fills_null_list() {
    for doc in ["flutter:\n  assets:\n", "flutter:\n  assets: ~\n", "flutter:\n  assets: null # none\n"] {
        let out = add_list_item(doc, SECTION, "a.png").unwrap();
        assert_eq!(listed(&out), vec!["a.png"], "{doc:?} -> {out:?}");
    }
    let out = add_list_item("flutter:\n  assets: ~\n", SECTION, "a.png").unwrap();
    assert_eq!(out, "flutter:\n  assets:\n    - a.png\n");
}

#[test]
fn add_fills_null_parent() {
    let out = add_list_item("name: x\nflutter: ~\n", SECTION, "a.png").unwrap();
    assert_eq!(out, "name: x\nflutter:\n  assets:\n    - a.png\n");
}

#[test]
fn add_to_flow_lists() {
    let out = add_list_item("flutter:\n  assets: []\n", SECTION, "a.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: [a.png]\n");

    let out = add_list_item("flutter:\n  assets: [a.png,b.png]  # c\n", SECTION, "c.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: [a.png,b.png,c.png]  # c\n");

    let out = add_list_item("flutter:\n  assets: [ a.png ]\n", SECTION, "b.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: [ a.png, b.png ]\n");
}

#[test]
fn add_to_flow_map_parent() {
    let out = add_list_item("flutter: {}\n", SECTION, "a.png").unwrap();
    assert_eq!(out, "flutter: {assets: [a.png]}\n");

    let out = add_list_item("flutter: {uses-material-design: true}\n", SECTION, "a.png").unwrap();
    assert_eq!(out, "flutter: {uses-material-design: true, assets: [a.png]}\n");
}

#[test]
fn add_follows_existing_quote_style() {
    let doc = "flutter:\n  assets:\n    - \"assets/a.png\"\n";
    let out = add_list_item(doc, SECTION, "assets/b.png").unwrap();
    assert!(out.ends_with("    - \"assets/b.png\"\n"), "{out}");
}

#[test]
fn add_quotes_values_that_need_it() {
    let out = add_list_item("flutter:\n  assets: []\n", SECTION, "a, b.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: ['a, b.png']\n");
    assert_eq!(listed(&out), vec!["a, b.png"]);
}

#[test]
fn add_preserves_crlf() {
    let doc = "name: demo\r\nflutter:\r\n  assets:\r\n    - a.png\r\n";
    let out = add_list_item(doc, SECTION, "b.png").unwrap();
    assert_eq!(out, "name: demo\r\nflutter:\r\n  assets:\r\n    - a.png\r\n    - b.png\r\n");
}

#[test]
fn add_supports_compact_sequences() {
    let doc = "flutter:\n  assets:\n  - a.png\n  fonts: []\n";
    let out = add_list_item(doc, SECTION, "b.png").unwrap();
    assert_eq!(out, "flutter:\n  assets:\n  - a.png\n  - b.png\n  fonts: []\n");
}

#[test]
fn add_rejects_scalar_list() {
    let err = add_list_item("flutter:\n  assets: assets/\n", SECTION, "a.png").unwrap_err();
    assert!(matches!(err, AssetSyncError::MalformedDocument { .. }), "{err}");
}

#[test]
fn add_rejects_non_map_root() {
    let err = add_list_item("- a\n- b\n", SECTION, "a.png").unwrap_err();
    assert!(matches!(err, AssetSyncError::MalformedDocument { .. }));
}

#[test]
fn add_rejects_unparseable_document() {
    let err = add_list_item("flutter: [unclosed\n", SECTION, "a.png").unwrap_err();
    assert!(matches!(err, AssetSyncError::MalformedDocument { .. }));
}

#[test]
fn add_refuses_multiline_flow_list() {
    let doc = "flutter:\n  assets: [\n    a.png,\n  ]\n";
    let err = add_list_item(doc, SECTION, "b.png").unwrap_err();
    assert!(matches!(err, AssetSyncError::UnsupportedLayout { .. }), "{err}");
}

// === remove_list_item ===

#[test]
fn remove_block_item_keeps_surroundings() {
    let doc = "\
flutter:
  assets:
    # images
    - assets/a.png
    - assets/b.png # second
    - assets/c.png
  fonts: []
";
    let out = remove_list_item(doc, SECTION, "assets/b.png").unwrap();
    assert_eq!(
        out,
        "\
flutter:
  assets:
    # images
    - assets/a.png
    - assets/c.png
  fonts: []
"
    );
}

#[test]
fn remove_absent_item_is_noop() {
    let doc = "flutter:\n  assets:\n    - a.png\n";
    assert_eq!(remove_list_item(doc, SECTION, "b.png").unwrap(), doc);
    assert_eq!(remove_list_item("name: x\n", SECTION, "b.png").unwrap(), "name: x\n");
}

#[test]
fn remove_last_block_item_leaves_empty_list() {
    let doc = "flutter:\n  assets: # declared assets\n    - a.png\nname: x\n";
    let out = remove_list_item(doc, SECTION, "a.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: [] # declared assets\nname: x\n");
    assert!(listed(&out).is_empty());
}

#[test]
fn remove_from_flow_lists() {
    let out = remove_list_item("flutter:\n  assets: [a.png, b.png, c.png]\n", SECTION, "b.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: [a.png, c.png]\n");

    let out = remove_list_item("flutter:\n  assets: [ a.png, b.png ]\n", SECTION, "a.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: [ b.png ]\n");

    let out = remove_list_item("flutter:\n  assets: [ a.png, b.png ]\n", SECTION, "b.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: [ a.png ]\n");

    let out = remove_list_item("flutter:\n  assets: ['a.png']\n", SECTION, "a.png").unwrap();
    assert_eq!(out, "flutter:\n  assets: []\n");
}

#[test]
fn remove_quoted_block_item() {
    let doc = "flutter:\n  assets:\n    - 'it''s.png'\n    - b.png\n";
    let out = remove_list_item(doc, SECTION, "it's.png").unwrap();
    assert_eq!(out, "flutter:\n  assets:\n    - b.png\n");
}

#[test]
fn add_then_remove_restores_declared_list() {
    let docs = [
        "flutter:\n  assets:\n    - a.png\n",
        "flutter:\n  assets: [a.png]\n",
        "name: x\n",
        "flutter:\n  assets: []\n",
    ];
    for doc in docs {
        let added = add_list_item(doc, SECTION, "new.png").unwrap();
        let removed = remove_list_item(&added, SECTION, "new.png").unwrap();
        assert_eq!(listed(&removed), listed(doc), "{doc:?}");
    }
}

#[test]
fn block_add_then_remove_is_byte_identical() {
    let doc = "name: x # app\nflutter:\n  assets:\n    - a.png\n\n# end\n";
    let added = add_list_item(doc, SECTION, "b.png").unwrap();
    assert_eq!(remove_list_item(&added, SECTION, "b.png").unwrap(), doc);
}

#[test]
fn other_sections_are_editable() {
    let doc = "flutter:\n  fonts:\n    - a.ttf\n";
    let out = add_list_item(doc, &["flutter", "fonts"], "b.ttf").unwrap();
    assert_eq!(out, "flutter:\n  fonts:\n    - a.ttf\n    - b.ttf\n");
}
