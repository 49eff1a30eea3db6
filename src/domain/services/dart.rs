//! Dart source rendering for the generated asset class
//!
//! Output is a pure function of the scanned assets and options: no
//! timestamps, no host paths, stable ordering.

use std::fmt::Write;

use crate::domain::entities::{AssetCategory, ScannedAsset};
use crate::domain::services::identifier::{derive_identifier, IdentifierAllocator};

/// Names used in the generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartOptions {
    pub class_name: String,
    pub list_name: String,
}

impl Default for DartOptions {
    fn default() -> Self {
        Self {
            class_name: "Assets".to_string(),
            list_name: "values".to_string(),
        }
    }
}

/// One emitted constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartBinding {
    pub identifier: String,
    pub path: String,
    pub category: AssetCategory,
}

/// Assign identifiers in scan order, so collision suffixes never depend on
/// category, then arrange them in emission order: grouped by category,
/// scan order inside a group.
pub fn bindings(assets: &[ScannedAsset], options: &DartOptions) -> Vec<DartBinding> {
    let mut ids = IdentifierAllocator::new();
    ids.reserve(options.list_name.clone());

    let allocated: Vec<DartBinding> = assets
        .iter()
        .map(|asset| DartBinding {
            identifier: ids.allocate(&derive_identifier(&asset.name)),
            path: asset.relative_path.clone(),
            category: asset.category,
        })
        .collect();

    AssetCategory::ALL
        .iter()
        .flat_map(|category| allocated.iter().filter(move |b| b.category == *category))
        .cloned()
        .collect()
}

/// Render the full Dart source for `assets` (expected sorted by path).
pub fn render_dart(assets: &[ScannedAsset], options: &DartOptions) -> String {
    let bindings = bindings(assets, options);
    let mut out = String::new();

    out.push_str("// GENERATED CODE - DO NOT MODIFY BY HAND\n");
    out.push_str("// Generated by assetsync. Run `assetsync generate` to update.\n");
    out.push('\n');
    out.push_str("// ignore_for_file: lines_longer_than_80_chars\n");
    out.push('\n');
    let _ = writeln!(out, "class {} {{", options.class_name);
    let _ = writeln!(out, "  {}._();", options.class_name);

    for category in AssetCategory::ALL {
        let mut group = bindings.iter().filter(|b| b.category == category).peekable();
        if group.peek().is_none() {
            continue;
        }
        out.push('\n');
        let _ = writeln!(out, "  // {}", category.heading());
        for binding in group {
            let _ = writeln!(
                out,
                "  static const String {} = {};",
                binding.identifier,
                dart_string(&binding.path)
            );
        }
    }

    out.push('\n');
    if bindings.is_empty() {
        let _ = writeln!(out, "  static const List<String> {} = [];", options.list_name);
    } else {
        let _ = writeln!(out, "  static const List<String> {} = [", options.list_name);
        for binding in &bindings {
            let _ = writeln!(out, "    {},", binding.identifier);
        }
        out.push_str("  ];\n");
    }
    out.push_str("}\n");
    out
}

/// Single-quoted Dart string literal
fn dart_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(path: &str) -> ScannedAsset {
        ScannedAsset::from_relative_path(path, 1).unwrap()
    }

    #[test]
    fn groups_by_category_in_fixed_order() {
        let assets = vec![
            asset("assets/data/config.json"),
            asset("assets/fonts/Inter.ttf"),
            asset("assets/images/logo.png"),
        ];
        let ids: Vec<_> = bindings(&assets, &DartOptions::default())
            .into_iter()
            .map(|b| b.identifier)
            .collect();
        assert_eq!(ids, vec!["logo", "inter", "config"]);
    }

    #[test]
    fn collisions_follow_scan_order() {
        let assets = vec![asset("assets/icon.png"), asset("assets/icon.svg")];
        let found = bindings(&assets, &DartOptions::default());
        assert_eq!(found[0].identifier, "icon");
        assert_eq!(found[0].path, "assets/icon.png");
        assert_eq!(found[1].identifier, "icon2");
        assert_eq!(found[1].path, "assets/icon.svg");
    }

    #[test]
    fn collisions_across_categories_follow_scan_order() {
        let assets = vec![asset("assets/data/logo.json"), asset("assets/images/logo.png")];
        let found = bindings(&assets, &DartOptions::default());
        // images are emitted first but the data file was scanned first
        assert_eq!(found[0].path, "assets/images/logo.png");
        assert_eq!(found[0].identifier, "logo2");
        assert_eq!(found[1].path, "assets/data/logo.json");
        assert_eq!(found[1].identifier, "logo");
    }

    #[test]
    fn list_name_is_never_reused() {
        let assets = vec![asset("assets/data/values.json")];
        let found = bindings(&assets, &DartOptions::default());
        assert_eq!(found[0].identifier, "values2");
    }

    #[test]
    fn empty_asset_set_renders_empty_list() {
        let out = render_dart(&[], &DartOptions::default());
        assert!(out.contains("class Assets {\n  Assets._();\n\n  static const List<String> values = [];\n}\n"));
        assert!(!out.contains("// Images"));
    }

    #[test]
    fn renders_bindings_and_list() {
        let out = render_dart(&[asset("assets/images/logo.png")], &DartOptions::default());
        assert!(out.contains("  // Images\n  static const String logo = 'assets/images/logo.png';\n"));
        assert!(out.contains("  static const List<String> values = [\n    logo,\n  ];\n"));
    }

    #[test]
    fn custom_names() {
        let options = DartOptions {
            class_name: "AppAssets".to_string(),
            list_name: "all".to_string(),
        };
        let out = render_dart(&[], &options);
        assert!(out.contains("class AppAssets {\n  AppAssets._();\n"));
        assert!(out.contains("static const List<String> all = [];"));
    }

    #[test]
    fn dart_strings_are_escaped() {
        assert_eq!(dart_string("a/b.png"), "'a/b.png'");
        assert_eq!(dart_string("it's $x.png"), "'it\\'s \\$x.png'");
    }
}
