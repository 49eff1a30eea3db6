//! Scalar quoting helpers for the YAML editor

/// How an existing list writes its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum QuoteStyle {
    #[default]
    Plain,
    Single,
    Double,
}

impl QuoteStyle {
    /// Style of a raw item token
    pub(crate) fn of(raw: &str) -> Self {
        match raw.trim_start().chars().next() {
            Some('\'') => QuoteStyle::Single,
            Some('"') => QuoteStyle::Double,
            _ => QuoteStyle::Plain,
        }
    }
}

const RESERVED_PLAIN: &[&str] = &[
    "~", "null", "Null", "NULL", "true", "True", "TRUE", "false", "False", "FALSE", "yes", "Yes",
    "YES", "no", "No", "NO", "on", "On", "ON", "off", "Off", "OFF",
];

/// True if `value` cannot be written as a plain scalar without changing
/// its meaning. `flow` adds the characters that end a flow-sequence item.
pub(crate) fn needs_quotes(value: &str, flow: bool) -> bool {
    let Some(first) = value.chars().next() else {
        return true;
    };

    if "-?:,[]{}#&*!|>'\"%@`".contains(first) || first.is_whitespace() {
        return true;
    }
    if value.ends_with(char::is_whitespace) || value.ends_with(':') {
        return true;
    }
    if value.contains(": ") || value.contains(" #") || value.contains('\t') || value.contains('\n')
    {
        return true;
    }
    if flow && value.contains([',', '[', ']', '{', '}']) {
        return true;
    }
    RESERVED_PLAIN.contains(&value) || value.parse::<f64>().is_ok()
}

/// Render `value` as a scalar token, following `style` when the list
/// already quotes its items.
pub(crate) fn render_scalar(value: &str, style: QuoteStyle, flow: bool) -> String {
    match style {
        QuoteStyle::Double => double_quoted(value),
        QuoteStyle::Single => single_quoted(value),
        QuoteStyle::Plain if needs_quotes(value, flow) => single_quoted(value),
        QuoteStyle::Plain => value.to_string(),
    }
}

fn single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Decode a raw scalar token (already stripped of comments).
pub(crate) fn unquote(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].replace("''", "'");
    }
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        let inner = &raw[1..raw.len() - 1];
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('0') => out.push('\0'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        }
        return out;
    }
    raw.to_string()
}

/// Byte offset where a trailing `# comment` starts, ignoring `#` inside
/// quotes. A `#` only opens a comment at the start or after whitespace.
pub(crate) fn comment_start(text: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut prev_is_space = true;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match quote {
            Some('\'') if c == '\'' => {
                // '' is an escaped quote inside a single-quoted scalar
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                } else {
                    quote = None;
                }
            }
            Some('"') if c == '\\' => {
                chars.next();
            }
            Some('"') if c == '"' => quote = None,
            Some(_) => {}
            None => {
                if c == '#' && prev_is_space {
                    return Some(i);
                }
                if (c == '\'' || c == '"') && prev_is_space_or_flow(text, i) {
                    quote = Some(c);
                }
            }
        }
        prev_is_space = c.is_whitespace();
    }
    None
}

fn prev_is_space_or_flow(text: &str, i: usize) -> bool {
    text[..i]
        .chars()
        .next_back()
        .map(|p| p.is_whitespace() || "[{,:-".contains(p))
        .unwrap_or(true)
}

/// Split the inside of a single-line flow sequence on top-level commas.
/// Returned ranges are byte offsets into `inner`, untrimmed.
pub(crate) fn split_flow_items(inner: &str) -> Vec<(usize, usize)> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0usize;
    let mut chars = inner.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match quote {
            Some('\'') if c == '\'' => {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                } else {
                    quote = None;
                }
            }
            Some('"') if c == '\\' => {
                chars.next();
            }
            Some('"') if c == '"' => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '[' | '{' => depth += 1,
                ']' | '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    items.push((start, i));
                    start = i + 1;
                }
                _ => {}
            },
        }
    }

    // A trailing comma does not open another item.
    if !inner[start..].trim().is_empty() {
        items.push((start, inner.len()));
    }
    items
}
