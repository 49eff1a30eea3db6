//! Property tests for Dart identifier derivation.

use std::collections::HashSet;

use proptest::prelude::*;

use assetsync::domain::services::{derive_identifier, IdentifierAllocator};

fn is_dart_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any file name yields a syntactically valid identifier.
    #[test]
    fn property_identifier_is_valid(name in "(?s).{0,64}") {
        let id = derive_identifier(&name);
        prop_assert!(is_dart_identifier(&id), "{:?} -> {:?}", name, id);
        prop_assert!(!["class", "if", "for", "null", "true", "false"].contains(&id.as_str()));
    }

    /// PROPERTY: Derivation is deterministic.
    #[test]
    fn property_identifier_is_stable(name in "[A-Za-z0-9 _.-]{0,32}") {
        prop_assert_eq!(derive_identifier(&name), derive_identifier(&name));
    }

    /// PROPERTY: The allocator never hands out the same name twice, even
    /// when every base collides.
    #[test]
    fn property_allocator_is_unique(
        names in proptest::collection::vec("[a-c]{1,2}[0-9]?", 0..40)
    ) {
        let mut allocator = IdentifierAllocator::new();
        allocator.reserve("values");
        let mut seen = HashSet::new();
        seen.insert("values".to_string());

        for name in &names {
            let id = allocator.allocate(&derive_identifier(name));
            prop_assert!(seen.insert(id.clone()), "duplicate {}", id);
        }
    }
}
