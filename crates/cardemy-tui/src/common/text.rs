//! Unicode-aware text helpers for terminal rendering.
//!
//! Widths are display columns (via `unicode-width`), not char counts, so CJK
//! and other wide glyphs lay out correctly.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncates `text` to at most `max_width` display columns, appending an
/// ellipsis when content was removed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

/// Wraps `text` to lines of at most `width` display columns.
///
/// Word wrap with a hard break for words wider than a full line. Splitting on
/// single spaces keeps runs of internal spaces intact (empty segments carry
/// the extra spaces); only the one space at a wrap point is dropped. Always
/// returns at least one line so callers can render empty strings.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        let mut first_on_line = true;

        for (i, word) in raw_line.split(' ').enumerate() {
            let word_width = word.width();
            let sep = usize::from(i > 0 && !first_on_line);

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                first_on_line = false;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            first_on_line = true;

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                first_on_line = false;
            } else {
                // Hard-break an oversized word grapheme by grapheme.
                for grapheme in word.graphemes(true) {
                    let w = grapheme.width();
                    if current_width + w > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push_str(grapheme);
                    current_width += w;
                }
                first_on_line = false;
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
