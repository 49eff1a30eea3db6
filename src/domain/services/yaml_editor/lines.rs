//! Line-oriented view of a block YAML document
//!
//! Every byte of the source stays addressable through `Line::start` /
//! `Line::end`, so edits are splices into the original text.

use std::ops::Range;

use super::scalar::{comment_start, unquote};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    Blank,
    Comment,
    /// `---`, `...` and `%` directives
    Marker,
    Content,
}

#[derive(Debug, Clone)]
pub(crate) struct Line<'a> {
    /// Line text without its terminator
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset just past the terminator (or end of document)
    pub end: usize,
    pub has_newline: bool,
    pub indent: usize,
    pub kind: LineKind,
}

impl Line<'_> {
    /// Text after the indentation
    pub fn body(&self) -> &str {
        &self.text[self.indent..]
    }

    pub fn is_content(&self) -> bool {
        self.kind == LineKind::Content
    }

    /// True for `- item` / `-` lines
    pub fn is_seq_item(&self) -> bool {
        let body = self.body();
        body == "-" || body.starts_with("- ")
    }
}

pub(crate) fn split_lines(doc: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for raw in doc.split_inclusive('\n') {
        let has_newline = raw.ends_with('\n');
        let text = raw.trim_end_matches('\n').trim_end_matches('\r');
        let indent = text.len() - text.trim_start_matches(' ').len();
        let body = &text[indent..];

        let kind = if body.trim().is_empty() {
            LineKind::Blank
        } else if body.starts_with('#') {
            LineKind::Comment
        } else if indent == 0
            && (body == "---" || body.starts_with("--- ") || body == "..." || body.starts_with('%'))
        {
            LineKind::Marker
        } else {
            LineKind::Content
        };

        lines.push(Line {
            text,
            start: offset,
            end: offset + raw.len(),
            has_newline,
            indent,
            kind,
        });
        offset += raw.len();
    }

    lines
}

/// `\r\n` if the document's first line uses it, else `\n`
pub(crate) fn line_ending(doc: &str) -> &'static str {
    match doc.find('\n') {
        Some(i) if i > 0 && doc.as_bytes()[i - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}

/// Indentation step used by the document (first increase between a
/// content line and its first child), defaulting to two spaces.
pub(crate) fn indent_unit(lines: &[Line<'_>]) -> usize {
    let mut prev: Option<usize> = None;
    for line in lines.iter().filter(|l| l.is_content()) {
        if let Some(p) = prev {
            if line.indent > p {
                return line.indent - p;
            }
        }
        prev = Some(line.indent);
    }
    2
}

/// Inline value written after `key:` on the key line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InlineValue {
    /// Nothing (value is a nested block, or null)
    Empty,
    /// `~` / `null`
    Null,
    /// `[ ... ]` closed on the same line
    FlowSeq,
    /// `{ ... }` closed on the same line
    FlowMap,
    /// Anything else (scalars, anchors, aliases, tags, open flow collections)
    Other,
}

/// A `key: value` line found inside a block
#[derive(Debug, Clone)]
pub(crate) struct KeyEntry {
    /// Index into the line list
    pub line: usize,
    pub indent: usize,
    pub value: InlineValue,
    /// Byte range of the inline value in the document (comment excluded,
    /// trimmed). Empty and positioned right after the colon when there is
    /// no inline value.
    pub value_span: Range<usize>,
}

/// Parse the key of a content line body. Returns the key and the byte
/// offset (within `body`) just past the colon.
pub(crate) fn parse_key(body: &str) -> Option<(String, usize)> {
    if body.starts_with("- ") || body == "-" || body.starts_with('?') {
        return None;
    }

    if let Some(quote) = body.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let close = find_closing_quote(body, quote)?;
        let rest = &body[close + 1..];
        let trimmed = rest.trim_start_matches(' ');
        let colon = close + 1 + (rest.len() - trimmed.len());
        if !trimmed.starts_with(':') || !colon_terminates(body, colon) {
            return None;
        }
        return Some((unquote(&body[..=close]), colon + 1));
    }

    let limit = comment_start(body).unwrap_or(body.len());
    let mut search = 0;
    while let Some(pos) = body[search..limit].find(':') {
        let colon = search + pos;
        if colon_terminates(body, colon) {
            let key = body[..colon].trim_end();
            if key.is_empty() {
                return None;
            }
            return Some((key.to_string(), colon + 1));
        }
        search = colon + 1;
    }
    None
}

fn colon_terminates(body: &str, colon: usize) -> bool {
    matches!(body[colon + 1..].chars().next(), None | Some(' ') | Some('\t'))
}

fn find_closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut chars = body.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        if quote == '"' && c == '\\' {
            chars.next();
            continue;
        }
        if c == quote {
            if quote == '\'' && matches!(chars.peek(), Some((_, '\''))) {
                chars.next();
                continue;
            }
            return Some(i);
        }
    }
    None
}

/// Classify the inline value that follows a key. `after_colon` is an
/// offset into the line body.
pub(crate) fn inline_value(line: &Line<'_>, after_colon: usize) -> (InlineValue, Range<usize>) {
    let body = line.body();
    let rest = &body[after_colon..];
    let value_end = comment_start(rest).unwrap_or(rest.len());
    let raw = &rest[..value_end];
    let lead = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();

    let base = line.start + line.indent + after_colon;
    let span = if trimmed.is_empty() {
        base..base
    } else {
        base + lead..base + lead + trimmed.len()
    };

    let kind = if trimmed.is_empty() {
        InlineValue::Empty
    } else if matches!(trimmed, "~" | "null" | "Null" | "NULL") {
        InlineValue::Null
    } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
        InlineValue::FlowSeq
    } else if trimmed.starts_with('{') && trimmed.ends_with('}') {
        InlineValue::FlowMap
    } else {
        InlineValue::Other
    };

    (kind, span)
}

/// Lines that make up the value of the key at `key_line`: everything more
/// indented, plus a compact sequence (`- item` at the key's own column).
/// The range stops after the last content line, so trailing blanks and
/// comments stay outside.
pub(crate) fn value_block(lines: &[Line<'_>], key_line: usize) -> Range<usize> {
    let key_indent = lines[key_line].indent;
    let start = key_line + 1;
    let mut end = start;
    let mut compact: Option<bool> = None;

    for (i, line) in lines.iter().enumerate().skip(start) {
        if !line.is_content() {
            if line.kind == LineKind::Marker {
                break;
            }
            continue;
        }
        let is_compact_item = line.indent == key_indent && line.is_seq_item();
        let compact_mode = *compact.get_or_insert(is_compact_item);

        let inside = line.indent > key_indent || (compact_mode && is_compact_item);
        if !inside {
            break;
        }
        end = i + 1;
    }

    start..end
}

/// Whole-document block for root keys
pub(crate) fn root_block(lines: &[Line<'_>]) -> Range<usize> {
    let end = lines
        .iter()
        .rposition(|l| l.is_content())
        .map(|i| i + 1)
        .unwrap_or(0);
    0..end
}

/// Indentation of the first content line in `block`
pub(crate) fn child_indent(lines: &[Line<'_>], block: &Range<usize>) -> Option<usize> {
    lines[block.clone()]
        .iter()
        .find(|l| l.is_content())
        .map(|l| l.indent)
}

/// Find `key` among the direct children of `block`.
pub(crate) fn find_key(lines: &[Line<'_>], block: &Range<usize>, key: &str) -> Option<KeyEntry> {
    let indent = child_indent(lines, block)?;

    for i in block.clone() {
        let line = &lines[i];
        if !line.is_content() || line.indent != indent {
            continue;
        }
        let Some((name, after_colon)) = parse_key(line.body()) else {
            continue;
        };
        if name == key {
            let (value, value_span) = inline_value(line, after_colon);
            return Some(KeyEntry {
                line: i,
                indent,
                value,
                value_span,
            });
        }
    }
    None
}

/// Sequence items directly inside `block`
pub(crate) fn seq_items(lines: &[Line<'_>], block: &Range<usize>) -> Vec<usize> {
    let Some(indent) = child_indent(lines, block) else {
        return Vec::new();
    };
    block
        .clone()
        .filter(|&i| lines[i].is_content() && lines[i].indent == indent && lines[i].is_seq_item())
        .collect()
}

/// Raw scalar token of a sequence item line (after `- `, comment removed)
pub(crate) fn item_token<'a>(line: &Line<'a>) -> &'a str {
    let body = &line.text[line.indent..];
    let rest = body.strip_prefix('-').unwrap_or(body);
    let end = comment_start(rest).unwrap_or(rest.len());
    rest[..end].trim()
}

/// Lines belonging to the item at `item` (continuation lines are more
/// indented). Returns the exclusive end index.
pub(crate) fn item_end(lines: &[Line<'_>], item: usize, block_end: usize) -> usize {
    let indent = lines[item].indent;
    let mut end = item + 1;
    for (i, line) in lines.iter().enumerate().take(block_end).skip(item + 1) {
        if line.is_content() {
            if line.indent <= indent {
                break;
            }
            end = i + 1;
        }
    }
    end
}
