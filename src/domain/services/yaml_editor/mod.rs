//! Format-preserving YAML list editor
//!
//! Adds or removes one scalar in a list nested under a key path (for a
//! pubspec, `["flutter", "assets"]`) without touching any other byte of
//! the document. Comments, key order, blank lines, quoting and line
//! endings outside the changed range are preserved.
//!
//! ## Strategy
//!
//! 1. Parse the logical view (`DocNode`) to decide no-ops and report shape
//!    errors (`MalformedDocument`).
//! 2. Locate the key path in a line-oriented scan of the raw text.
//! 3. Splice the minimal byte range.
//! 4. Re-parse the result and check the list equals the expected list.
//!
//! The editor is a pure text transform; writing is the caller's job.

mod lines;
mod scalar;
#[cfg(test)]
mod tests;

use std::ops::Range;

use crate::domain::services::document::{item_strings, resolve_section, DocNode, SectionLookup};
use crate::error::{AssetSyncError, AssetSyncResult};

use lines::{
    child_indent, find_key, indent_unit, item_end, item_token, line_ending, root_block,
    seq_items, split_lines, value_block, InlineValue, KeyEntry, Line,
};
use scalar::{needs_quotes, render_scalar, split_flow_items, unquote, QuoteStyle};

/// Append `value` to the list at `section`, creating missing maps and the
/// list itself. Returns the document unchanged if `value` is already listed.
pub fn add_list_item(document: &str, section: &[&str], value: &str) -> AssetSyncResult<String> {
    let current = logical_items(document, section)?;
    if current.iter().any(|item| item == value) {
        return Ok(document.to_string());
    }

    let editor = Splicer::new(document);
    let splices = editor.plan_add(section, value)?;
    let edited = apply(document, splices);

    let mut expected = current;
    expected.push(value.to_string());
    verify(&edited, section, &expected)?;
    Ok(edited)
}

/// Remove `value` from the list at `section`. Returns the document
/// unchanged if `value` is not listed. Removing the last element leaves
/// an empty list behind.
pub fn remove_list_item(document: &str, section: &[&str], value: &str) -> AssetSyncResult<String> {
    let current = logical_items(document, section)?;
    let Some(index) = current.iter().position(|item| item == value) else {
        return Ok(document.to_string());
    };

    let editor = Splicer::new(document);
    let splices = editor.plan_remove(section, value)?;
    let edited = apply(document, splices);

    let mut expected = current;
    expected.remove(index);
    verify(&edited, section, &expected)?;
    Ok(edited)
}

/// Current list items as strings; an absent or null list is empty.
fn logical_items(document: &str, section: &[&str]) -> AssetSyncResult<Vec<String>> {
    let root = DocNode::parse(document).map_err(|e| AssetSyncError::malformed(e.to_string()))?;
    match resolve_section(&root, section).map_err(AssetSyncError::malformed)? {
        SectionLookup::List(items) => Ok(item_strings(items)),
        SectionLookup::Absent => Ok(Vec::new()),
    }
}

fn verify(edited: &str, section: &[&str], expected: &[String]) -> AssetSyncResult<()> {
    let found = logical_items(edited, section)?;
    if found != expected {
        return Err(AssetSyncError::EditVerification {
            expected: expected.to_vec(),
            found,
        });
    }
    Ok(())
}

#[derive(Debug)]
struct Splice {
    range: Range<usize>,
    text: String,
}

impl Splice {
    fn insert(at: usize, text: String) -> Self {
        Self { range: at..at, text }
    }

    fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            text: String::new(),
        }
    }
}

fn apply(document: &str, mut splices: Vec<Splice>) -> String {
    splices.sort_by(|a, b| b.range.start.cmp(&a.range.start));
    let mut out = document.to_string();
    for splice in splices {
        out.replace_range(splice.range, &splice.text);
    }
    out
}

struct Splicer<'a> {
    doc: &'a str,
    lines: Vec<Line<'a>>,
    newline: &'static str,
    unit: usize,
}

impl<'a> Splicer<'a> {
    fn new(doc: &'a str) -> Self {
        let lines = split_lines(doc);
        let unit = indent_unit(&lines);
        Self {
            doc,
            newline: line_ending(doc),
            lines,
            unit,
        }
    }

    fn plan_add(&self, section: &[&str], value: &str) -> AssetSyncResult<Vec<Splice>> {
        let mut block = root_block(&self.lines);
        let mut parent: Option<KeyEntry> = None;

        for (depth, key) in section.iter().enumerate() {
            let remaining = &section[depth..];
            if let Some(entry) = &parent {
                match entry.value {
                    InlineValue::Empty => {}
                    InlineValue::Null => return Ok(self.replace_null(entry, remaining, value)),
                    InlineValue::FlowMap => return self.insert_into_flow_map(entry, remaining, value),
                    InlineValue::FlowSeq | InlineValue::Other => {
                        return Err(self.unsupported_at(entry, "inline value where a map is needed"))
                    }
                }
            }

            match find_key(&self.lines, &block, key) {
                Some(entry) => {
                    block = value_block(&self.lines, entry.line);
                    parent = Some(entry);
                }
                None => return Ok(vec![self.synthesize(parent.as_ref(), &block, remaining, value)]),
            }
        }

        let Some(entry) = parent else {
            return Err(AssetSyncError::malformed("empty section path"));
        };

        match entry.value {
            InlineValue::FlowSeq => Ok(vec![self.append_flow(&entry, value)]),
            InlineValue::Null => Ok(self.replace_null(&entry, &[], value)),
            InlineValue::Empty => self.append_block(&entry, &block, value).map(|s| vec![s]),
            InlineValue::FlowMap | InlineValue::Other => {
                Err(self.unsupported_at(&entry, "list is not written as a block or flow sequence"))
            }
        }
    }

    fn plan_remove(&self, section: &[&str], value: &str) -> AssetSyncResult<Vec<Splice>> {
        let mut block = root_block(&self.lines);
        let mut parent: Option<KeyEntry> = None;

        for key in section {
            if let Some(entry) = &parent {
                if entry.value != InlineValue::Empty {
                    return Err(self.unsupported_at(entry, "flow or inline mapping on the key path"));
                }
            }
            let entry = find_key(&self.lines, &block, key).ok_or_else(|| {
                AssetSyncError::unsupported(format!(
                    "could not locate '{}' in the document text",
                    section.join(".")
                ))
            })?;
            block = value_block(&self.lines, entry.line);
            parent = Some(entry);
        }

        let Some(entry) = parent else {
            return Err(AssetSyncError::malformed("empty section path"));
        };

        match entry.value {
            InlineValue::FlowSeq => self.remove_from_flow(&entry, value).map(|s| vec![s]),
            InlineValue::Empty => self.remove_from_block(&entry, &block, value),
            _ => Err(self.unsupported_at(&entry, "list is not written as a block or flow sequence")),
        }
    }

    /// Build the text for `keys` nested below one another, ending in a
    /// one-item block list. `indent` is the column of the first key.
    fn nested_lines(&self, indent: usize, keys: &[&str], value: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(keys.len() + 1);
        for (level, key) in keys.iter().enumerate() {
            out.push(format!(
                "{}{}:",
                " ".repeat(indent + level * self.unit),
                render_key(key)
            ));
        }
        out.push(format!(
            "{}- {}",
            " ".repeat(indent + keys.len() * self.unit),
            render_scalar(value, QuoteStyle::Plain, false)
        ));
        out
    }

    /// Insert missing `keys` at the end of `block` (the value of `parent`,
    /// or the whole document).
    fn synthesize(
        &self,
        parent: Option<&KeyEntry>,
        block: &Range<usize>,
        keys: &[&str],
        value: &str,
    ) -> Splice {
        let indent = child_indent(&self.lines, block)
            .or_else(|| parent.map(|p| p.indent + self.unit))
            .unwrap_or(0);
        let new_lines = self.nested_lines(indent, keys, value);

        if block.end > block.start {
            self.insert_after_line(block.end - 1, &new_lines)
        } else if let Some(p) = parent {
            self.insert_after_line(p.line, &new_lines)
        } else {
            self.insert_at_end(&new_lines)
        }
    }

    /// `key: ~` becomes `key:` followed by the nested `keys` (empty when the
    /// null is the list itself).
    fn replace_null(&self, entry: &KeyEntry, keys: &[&str], value: &str) -> Vec<Splice> {
        let new_lines = self.nested_lines(entry.indent + self.unit, keys, value);
        vec![
            Splice::delete(self.with_leading_spaces(&entry.value_span)),
            self.insert_after_line(entry.line, &new_lines),
        ]
    }

    fn insert_into_flow_map(
        &self,
        entry: &KeyEntry,
        keys: &[&str],
        value: &str,
    ) -> AssetSyncResult<Vec<Splice>> {
        let span = &self.doc[entry.value_span.clone()];
        let inner = &span[1..span.len() - 1];

        let mut text = format!("[{}]", render_scalar(value, QuoteStyle::Plain, true));
        for (level, key) in keys.iter().enumerate().rev() {
            text = format!("{}: {}", render_key(key), text);
            if level > 0 {
                text = format!("{{{}}}", text);
            }
        }

        let inner_start = entry.value_span.start + 1;
        if inner.trim().is_empty() {
            return Ok(vec![Splice {
                range: inner_start..inner_start + inner.len(),
                text,
            }]);
        }
        let has_key = split_flow_items(inner).iter().any(|&(s, e)| {
            let item = &inner[s..e];
            let key = item.split_once(": ").map_or(item, |(k, _)| k);
            keys.first().is_some_and(|first| unquote(key) == *first)
        });
        if has_key || inner.contains('{') || inner.contains('[') {
            return Err(self.unsupported_at(entry, "nested flow mapping"));
        }
        let at = inner_start + inner.trim_end().len();
        Ok(vec![Splice::insert(at, format!(", {}", text))])
    }

    fn append_flow(&self, entry: &KeyEntry, value: &str) -> Splice {
        let span = &self.doc[entry.value_span.clone()];
        let inner_start = entry.value_span.start + 1;
        let inner = &span[1..span.len() - 1];
        let items = split_flow_items(inner);

        let style = items
            .first()
            .map(|&(s, e)| QuoteStyle::of(&inner[s..e]))
            .unwrap_or_default();
        let rendered = render_scalar(value, style, true);

        let Some(&(last_start, last_end)) = items.last() else {
            return Splice {
                range: inner_start..inner_start + inner.len(),
                text: rendered,
            };
        };

        let separator = match items.get(1) {
            Some(&(s, e)) => {
                let raw = &inner[s..e];
                format!(",{}", &raw[..raw.len() - raw.trim_start().len()])
            }
            None => ", ".to_string(),
        };
        let raw_last = &inner[last_start..last_end];
        let at = inner_start + last_start + raw_last.trim_end().len();
        Splice::insert(at, format!("{}{}", separator, rendered))
    }

    fn append_block(
        &self,
        entry: &KeyEntry,
        block: &Range<usize>,
        value: &str,
    ) -> AssetSyncResult<Splice> {
        let items = seq_items(&self.lines, block);

        let Some(&first) = items.first() else {
            if block.end > block.start {
                return Err(self.unsupported_at(entry, "list value is not a block sequence"));
            }
            let line = format!(
                "{}- {}",
                " ".repeat(entry.indent + self.unit),
                render_scalar(value, QuoteStyle::Plain, false)
            );
            return Ok(self.insert_after_line(entry.line, &[line]));
        };

        let item_line = &self.lines[first];
        let style = QuoteStyle::of(item_token(item_line));
        let line = format!(
            "{}- {}",
            " ".repeat(item_line.indent),
            render_scalar(value, style, false)
        );
        Ok(self.insert_after_line(block.end - 1, &[line]))
    }

    fn remove_from_flow(&self, entry: &KeyEntry, value: &str) -> AssetSyncResult<Splice> {
        let span = &self.doc[entry.value_span.clone()];
        let inner_start = entry.value_span.start + 1;
        let inner = &span[1..span.len() - 1];
        let items = split_flow_items(inner);

        let index = items
            .iter()
            .position(|&(s, e)| unquote(&inner[s..e]) == value)
            .ok_or_else(|| self.unsupported_at(entry, "list item not found in the document text"))?;

        if items.len() == 1 {
            return Ok(Splice {
                range: inner_start..inner_start + inner.len(),
                text: String::new(),
            });
        }

        let leading = |(s, e): (usize, usize)| {
            let raw = &inner[s..e];
            s + raw.len() - raw.trim_start().len()
        };
        let range = if index == 0 {
            leading(items[0])..leading(items[1])
        } else {
            let (s, e) = items[index];
            let previous_end = items[index - 1].1;
            previous_end..s + inner[s..e].trim_end().len()
        };

        Ok(Splice::delete(
            inner_start + range.start..inner_start + range.end,
        ))
    }

    fn remove_from_block(
        &self,
        entry: &KeyEntry,
        block: &Range<usize>,
        value: &str,
    ) -> AssetSyncResult<Vec<Splice>> {
        let items = seq_items(&self.lines, block);
        let item = items
            .iter()
            .copied()
            .find(|&i| unquote(item_token(&self.lines[i])) == value)
            .ok_or_else(|| self.unsupported_at(entry, "list item not found in the document text"))?;

        let end = item_end(&self.lines, item, block.end);
        let mut splices = vec![Splice::delete(
            self.lines[item].start..self.lines[end - 1].end,
        )];

        if items.len() == 1 {
            splices.push(Splice::insert(entry.value_span.start, " []".to_string()));
        }
        Ok(splices)
    }

    fn insert_after_line(&self, index: usize, new_lines: &[String]) -> Splice {
        let line = &self.lines[index];
        let body = new_lines.join(self.newline);
        if line.has_newline {
            Splice::insert(line.end, format!("{}{}", body, self.newline))
        } else {
            Splice::insert(line.end, format!("{}{}", self.newline, body))
        }
    }

    fn insert_at_end(&self, new_lines: &[String]) -> Splice {
        let body = new_lines.join(self.newline);
        let text = if self.doc.is_empty() || self.doc.ends_with('\n') {
            format!("{}{}", body, self.newline)
        } else {
            format!("{}{}", self.newline, body)
        };
        Splice::insert(self.doc.len(), text)
    }

    /// Extend a value span backwards over the spaces separating it from
    /// the colon.
    fn with_leading_spaces(&self, span: &Range<usize>) -> Range<usize> {
        let prefix = &self.doc[..span.start];
        let start = prefix.trim_end_matches(' ').len();
        start..span.end
    }

    fn unsupported_at(&self, entry: &KeyEntry, what: &str) -> AssetSyncError {
        AssetSyncError::unsupported(format!(
            "{} on line {}: `{}`",
            what,
            entry.line + 1,
            self.lines[entry.line].text.trim()
        ))
    }
}

fn render_key(key: &str) -> String {
    if needs_quotes(key, true) {
        render_scalar(key, QuoteStyle::Single, false)
    } else {
        key.to_string()
    }
}
