//! Dart identifier derivation for generated asset constants

use std::collections::HashSet;

/// Words that cannot be used as Dart member names
const DART_RESERVED: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "base", "break", "case", "catch", "class",
    "const", "continue", "covariant", "default", "deferred", "do", "dynamic", "else", "enum",
    "export", "extends", "extension", "external", "factory", "false", "final", "finally", "for",
    "function", "get", "hide", "if", "implements", "import", "in", "interface", "is", "late",
    "library", "mixin", "new", "null", "of", "on", "operator", "part", "required", "rethrow",
    "return", "sealed", "set", "show", "static", "super", "switch", "sync", "this", "throw",
    "true", "try", "type", "typedef", "var", "void", "when", "while", "with", "yield",
];

/// Derive a lowerCamelCase identifier from a file base name (extension
/// already stripped).
///
/// Characters outside `[A-Za-z0-9_]` become `_`; `-`, `_` and whitespace
/// are word boundaries; an all-caps word is lowercased before casing; a
/// leading digit gets a `_` prefix.
pub fn derive_identifier(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut out = String::with_capacity(sanitized.len());
    for word in sanitized
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
    {
        let word = if is_shouting(word) {
            word.to_ascii_lowercase()
        } else {
            word.to_string()
        };
        if out.is_empty() {
            out.push_str(&lower_first(&word));
        } else {
            out.push_str(&upper_first(&word));
        }
    }

    if out.is_empty() {
        return "asset".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if DART_RESERVED.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// `ICON`, `2X`; mixed-case words keep their humps.
fn is_shouting(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_alphabetic()) && !word.chars().any(|c| c.is_ascii_lowercase())
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Hands out unique identifiers in call order. A taken name gets the
/// smallest integer suffix >= 2 that is still free.
#[derive(Debug, Default)]
pub struct IdentifierAllocator {
    used: HashSet<String>,
}

impl IdentifierAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark names as taken without handing them out (e.g. the name of the
    /// aggregate list).
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.used.insert(name.into());
    }

    pub fn allocate(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_cases_on_delimiters() {
        assert_eq!(derive_identifier("app_logo"), "appLogo");
        assert_eq!(derive_identifier("app-logo-dark"), "appLogoDark");
        assert_eq!(derive_identifier("hero image"), "heroImage");
        assert_eq!(derive_identifier("Logo"), "logo");
        assert_eq!(derive_identifier("iconHome"), "iconHome");
        assert_eq!(derive_identifier("APP_LOGO"), "appLogo");
        assert_eq!(derive_identifier("ICON"), "icon");
        assert_eq!(derive_identifier("logo_DARK"), "logoDark");
        assert_eq!(derive_identifier("HERO-imageWide"), "heroImageWide");
    }

    #[test]
    fn invalid_characters_become_boundaries() {
        assert_eq!(derive_identifier("app.logo"), "appLogo");
        assert_eq!(derive_identifier("logo@2x"), "logo2x");
        assert_eq!(derive_identifier("café"), "caf");
    }

    #[test]
    fn leading_digit_gets_underscore() {
        assert_eq!(derive_identifier("2x_logo"), "_2xLogo");
        assert_eq!(derive_identifier("404"), "_404");
    }

    #[test]
    fn empty_and_reserved_names() {
        assert_eq!(derive_identifier("---"), "asset");
        assert_eq!(derive_identifier(""), "asset");
        assert_eq!(derive_identifier("class"), "class_");
        assert_eq!(derive_identifier("switch"), "switch_");
    }

    #[test]
    fn allocator_appends_smallest_free_suffix() {
        let mut ids = IdentifierAllocator::new();
        assert_eq!(ids.allocate("icon"), "icon");
        assert_eq!(ids.allocate("icon"), "icon2");
        assert_eq!(ids.allocate("icon"), "icon3");
    }

    #[test]
    fn allocator_skips_names_taken_by_earlier_assets() {
        let mut ids = IdentifierAllocator::new();
        assert_eq!(ids.allocate("icon2"), "icon2");
        assert_eq!(ids.allocate("icon"), "icon");
        assert_eq!(ids.allocate("icon"), "icon3");
    }

    #[test]
    fn reserved_names_are_never_handed_out() {
        let mut ids = IdentifierAllocator::new();
        ids.reserve("values");
        assert_eq!(ids.allocate("values"), "values2");
    }
}
