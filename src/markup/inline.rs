//! Inline rich-text markup: the opaque tag soup notes carry in `content`.
//!
//! The format is a flat string with `<b>`/`<i>` (or `<strong>`/`<em>`) pairs
//! and a handful of entities. There is no document model — plain-text views
//! strip tags by pattern removal, styled views segment a line into runs.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?[a-zA-Z][a-zA-Z0-9]*(?:\s[^>]*)?/?>").unwrap())
}

fn br_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").unwrap())
}

/// Strip all markup from `text`, yielding plain text for previews, search
/// and export. `<br>` becomes a newline; every other tag is removed; the
/// entities the format produces are decoded.
pub fn strip_markup(text: &str) -> String {
    let text = br_re().replace_all(text, "\n");
    let text = tag_re().replace_all(&text, "");
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// One styled run within a single line of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Segment a single line into styled runs. Bold/italic tags toggle state;
/// unknown tags are dropped from the output (they are markup, not text).
pub fn line_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut bold = 0usize;
    let mut italic = 0usize;
    let mut last_end = 0;

    let mut push = |text: &str, bold: usize, italic: usize, segments: &mut Vec<Segment>| {
        if text.is_empty() {
            return;
        }
        let decoded = text
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&");
        segments.push(Segment {
            text: decoded,
            bold: bold > 0,
            italic: italic > 0,
        });
    };

    for m in tag_re().find_iter(line) {
        push(&line[last_end..m.start()], bold, italic, &mut segments);
        last_end = m.end();
        match m.as_str().to_ascii_lowercase().as_str() {
            "<b>" | "<strong>" => bold += 1,
            "</b>" | "</strong>" => bold = bold.saturating_sub(1),
            "<i>" | "<em>" => italic += 1,
            "</i>" | "</em>" => italic = italic.saturating_sub(1),
            _ => {}
        }
    }
    push(&line[last_end..], bold, italic, &mut segments);
    segments
}

/// Byte ranges of every tag occurrence in `line` (for dimming tags while
/// editing the raw source)
pub fn tag_ranges(line: &str) -> Vec<Range<usize>> {
    tag_re().find_iter(line).map(|m| m.range()).collect()
}

/// Toggle a tag pair around `start..end` (byte offsets into `text`).
///
/// If the range is already wrapped — either the selection itself carries the
/// tags, or they sit immediately outside it — the pair is removed; otherwise
/// the range is wrapped. Returns the new text and the new selection range.
pub fn toggle_wrap(
    text: &str,
    start: usize,
    end: usize,
    open: &str,
    close: &str,
) -> (String, usize, usize) {
    let selected = &text[start..end];

    // Selection includes the tags: <b>word</b>
    if selected.len() >= open.len() + close.len()
        && selected.starts_with(open)
        && selected.ends_with(close)
    {
        let inner = &selected[open.len()..selected.len() - close.len()];
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..start]);
        out.push_str(inner);
        out.push_str(&text[end..]);
        return (out, start, start + inner.len());
    }

    // Tags sit just outside the selection: <b>|word|</b>
    if text[..start].ends_with(open) && text[end..].starts_with(close) {
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..start - open.len()]);
        out.push_str(selected);
        out.push_str(&text[end + close.len()..]);
        let new_start = start - open.len();
        return (out, new_start, new_start + selected.len());
    }

    // Not wrapped: wrap it
    let mut out = String::with_capacity(text.len() + open.len() + close.len());
    out.push_str(&text[..start]);
    out.push_str(open);
    out.push_str(selected);
    out.push_str(close);
    out.push_str(&text[end..]);
    let new_start = start + open.len();
    (out, new_start, new_start + selected.len())
}

/// Find the word (alphanumeric run) containing byte offset `at`, if any
pub fn word_range_at(text: &str, at: usize) -> Option<Range<usize>> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '\'';

    // Back up to a char boundary
    let mut at = at.min(text.len());
    while at > 0 && !text.is_char_boundary(at) {
        at -= 1;
    }

    let before = text[..at].chars().next_back();
    let after = text[at..].chars().next();
    if !before.is_some_and(is_word) && !after.is_some_and(is_word) {
        return None;
    }

    let start = text[..at]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(at);
    let end = text[at..]
        .char_indices()
        .find(|(_, c)| !is_word(*c))
        .map(|(i, _)| at + i)
        .unwrap_or(text.len());
    Some(start..end)
}
