//! Logical view of a manifest document
//!
//! `DocNode` is the small tagged union every reader and the editor resolve
//! against, so both apply identical shape rules.

use serde_yaml_ng::Value;

/// Parsed YAML node with scalars flattened to their string form
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    Null,
    Scalar(String),
    List(Vec<DocNode>),
    Map(Vec<(String, DocNode)>),
}

impl DocNode {
    /// Parse YAML text. An empty or comment-only document is `Null`.
    pub fn parse(text: &str) -> Result<DocNode, serde_yaml_ng::Error> {
        let value: Value = serde_yaml_ng::from_str(text)?;
        Ok(DocNode::from(value))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DocNode::Null => "null",
            DocNode::Scalar(_) => "scalar",
            DocNode::List(_) => "list",
            DocNode::Map(_) => "map",
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            DocNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key in a map node
    pub fn get(&self, key: &str) -> Option<&DocNode> {
        match self {
            DocNode::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<Value> for DocNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DocNode::Null,
            Value::Bool(b) => DocNode::Scalar(b.to_string()),
            Value::Number(n) => DocNode::Scalar(n.to_string()),
            Value::String(s) => DocNode::Scalar(s),
            Value::Sequence(items) => DocNode::List(items.into_iter().map(DocNode::from).collect()),
            Value::Mapping(mapping) => DocNode::Map(
                mapping
                    .into_iter()
                    .map(|(k, v)| (key_string(k), DocNode::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => DocNode::from(tagged.value),
        }
    }
}

fn key_string(key: Value) -> String {
    match DocNode::from(key) {
        DocNode::Scalar(s) => s,
        DocNode::Null => "null".to_string(),
        other => format!("<{}>", other.kind()),
    }
}

/// Outcome of resolving a key path to a list field
#[derive(Debug, Clone, PartialEq)]
pub enum SectionLookup<'a> {
    /// The list exists (possibly empty)
    List(&'a [DocNode]),
    /// Some key along the path is missing or null, or the list itself is null
    Absent,
}

/// Resolve `section` (e.g. `["flutter", "assets"]`) against `root`.
///
/// The `Err` string describes the shape mismatch; callers wrap it in the
/// error variant that fits their role.
pub fn resolve_section<'a>(
    root: &'a DocNode,
    section: &[&str],
) -> Result<SectionLookup<'a>, String> {
    let mut current = match root {
        DocNode::Null => return Ok(SectionLookup::Absent),
        DocNode::Map(_) => root,
        other => return Err(format!("document root is a {}, expected a map", other.kind())),
    };

    for (depth, key) in section.iter().enumerate() {
        let is_last = depth + 1 == section.len();
        let child = match current.get(key) {
            Some(child) => child,
            None => return Ok(SectionLookup::Absent),
        };

        match (child, is_last) {
            (DocNode::Null, _) => return Ok(SectionLookup::Absent),
            (DocNode::List(items), true) => return Ok(SectionLookup::List(items)),
            (DocNode::Map(_), false) => current = child,
            (other, true) => {
                return Err(format!(
                    "'{}' is a {}, expected a list",
                    section.join("."),
                    other.kind()
                ))
            }
            (other, false) => {
                return Err(format!(
                    "'{}' is a {}, expected a map",
                    section[..=depth].join("."),
                    other.kind()
                ))
            }
        }
    }

    // An empty section path names the root itself, which is never a list.
    Err("empty section path".to_string())
}

/// Render list items for comparisons and error messages
pub(crate) fn item_strings(items: &[DocNode]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            DocNode::Scalar(s) => s.clone(),
            other => format!("<{}>", other.kind()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: &[&str] = &["flutter", "assets"];

    #[test]
    fn parses_empty_document_as_null() {
        assert_eq!(DocNode::parse("").unwrap(), DocNode::Null);
        assert_eq!(DocNode::parse("# only a comment\n").unwrap(), DocNode::Null);
    }

    #[test]
    fn resolves_existing_list() {
        let doc = DocNode::parse("flutter:\n  assets:\n    - a.png\n    - b.png\n").unwrap();
        match resolve_section(&doc, SECTION).unwrap() {
            SectionLookup::List(items) => {
                assert_eq!(item_strings(items), vec!["a.png", "b.png"]);
            }
            other => panic!("unexpected lookup: {:?}", other),
        }
    }

    #[test]
    fn missing_or_null_keys_are_absent() {
        for text in [
            "name: app\n",
            "flutter:\n",
            "flutter:\n  uses-material-design: true\n",
            "flutter:\n  assets:\n",
            "flutter:\n  assets: ~\n",
        ] {
            let doc = DocNode::parse(text).unwrap();
            assert_eq!(resolve_section(&doc, SECTION).unwrap(), SectionLookup::Absent, "{text}");
        }
    }

    #[test]
    fn scalar_section_is_a_shape_error() {
        let doc = DocNode::parse("flutter:\n  assets: assets/\n").unwrap();
        let err = resolve_section(&doc, SECTION).unwrap_err();
        assert!(err.contains("flutter.assets"));
        assert!(err.contains("scalar"));
    }

    #[test]
    fn non_map_root_is_a_shape_error() {
        let doc = DocNode::parse("- a\n- b\n").unwrap();
        let err = resolve_section(&doc, SECTION).unwrap_err();
        assert!(err.contains("root"));
    }

    #[test]
    fn non_map_parent_is_a_shape_error() {
        let doc = DocNode::parse("flutter: true\n").unwrap();
        let err = resolve_section(&doc, SECTION).unwrap_err();
        assert_eq!(err, "'flutter' is a scalar, expected a map");
    }
}
