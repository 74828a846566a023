//! Display-width-aware text wrapping and truncation.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedy word wrap to `width` columns. Words wider than the whole line are
/// broken at grapheme boundaries. Existing newlines are respected.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for line in text.split('\n') {
        if line.is_empty() {
            out.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for word in line.split_whitespace() {
            let word_width = display_width(word);
            let sep = if current.is_empty() { 0 } else { 1 };

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Break an oversized word at grapheme boundaries
                for g in word.graphemes(true) {
                    let gw = display_width(g);
                    if current_width + gw > width && !current.is_empty() {
                        out.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push_str(g);
                    current_width += gw;
                }
            }
        }

        out.push(current);
    }

    out
}

/// Truncate to `width` columns, appending `…` when anything was cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let gw = display_width(g);
        if used + gw > budget {
            break;
        }
        out.push_str(g);
        used += gw;
    }
    out.push('…');
    out
}
