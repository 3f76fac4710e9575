//! Text layout and code-page utilities for Western thermal printers
//!
//! Receipt printers sold for Western markets print Windows-1252 (WPC1252).
//! This module provides utilities for:
//! - Measuring, truncating, padding and wrapping text to a column width
//! - Converting UTF-8 content to WPC1252 while preserving ESC/POS commands

use tracing::instrument;

/// ESC t 16 - select character code table WPC1252
const SELECT_WPC1252: [u8; 3] = [0x1B, 0x74, 16];

/// Printed width of a string in columns (one column per character)
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to fit within `max_width` columns
pub fn truncate_text(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad a string to a specific width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_text(s: &str, width: usize, align_right: bool) -> String {
    let current_width = text_width(s);
    if current_width >= width {
        return truncate_text(s, width);
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Word-wrap `s` into lines of at most `width` columns
///
/// Leading indentation is repeated on every line. Words longer than a full
/// line are split hard. Returns at least one (possibly empty) line.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    let body = s.trim_start();
    let indent = &s[..s.len() - body.len()];
    let indent_width = text_width(indent);
    if indent_width > 0 && indent_width < width / 2 {
        return wrap_words(body, width - indent_width)
            .into_iter()
            .map(|line| format!("{}{}", indent, line))
            .collect();
    }
    wrap_words(body, width)
}

fn wrap_words(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let mut word: String = word.to_string();
        while text_width(&word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head = truncate_text(&word, width);
            word = word.chars().skip(width).collect();
            lines.push(head);
        }
        if word.is_empty() {
            continue;
        }
        if current.is_empty() {
            current = word;
        } else if text_width(&current) + 1 + text_width(&word) <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Convert mixed UTF-8 content (with ESC/POS commands) to WPC1252
///
/// ASCII bytes (0x00-0x7F) are kept exactly as is, which protects ESC/POS
/// commands from being corrupted. Only bytes >= 0x80 are treated as UTF-8
/// sequences and converted. Characters with no WPC1252 mapping print as `?`.
///
/// The code table is re-selected after every INIT command (ESC @).
#[instrument(skip(bytes))]
pub fn convert_to_codepage(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + SELECT_WPC1252.len());
    result.extend_from_slice(&SELECT_WPC1252);

    let mut buffer = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        // INIT resets the code table, so select it again right after
        if b == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == 0x40 {
            flush_buffer(&mut buffer, &mut result);
            result.extend_from_slice(&[0x1B, 0x40]);
            result.extend_from_slice(&SELECT_WPC1252);
            i += 2;
            continue;
        }

        if b < 128 {
            flush_buffer(&mut buffer, &mut result);
            result.push(b);
        } else {
            buffer.push(b);
        }
        i += 1;
    }

    flush_buffer(&mut buffer, &mut result);
    result
}

/// Flush the non-ASCII buffer, converting UTF-8 to WPC1252
fn flush_buffer(buffer: &mut Vec<u8>, result: &mut Vec<u8>) {
    if buffer.is_empty() {
        return;
    }

    let s = String::from_utf8_lossy(buffer);
    let mut char_buf = [0u8; 4];
    for c in s.chars() {
        let (encoded, _, had_errors) =
            encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut char_buf));
        if had_errors {
            result.push(b'?');
        } else {
            result.extend_from_slice(&encoded);
        }
    }
    buffer.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("hello"), 5);
        assert_eq!(text_width("crème brûlée"), 12);
    }

    #[test]
    fn test_truncate_and_pad() {
        assert_eq!(truncate_text("hello world", 5), "hello");
        assert_eq!(pad_text("hi", 5, false), "hi   ");
        assert_eq!(pad_text("hi", 5, true), "   hi");
        assert_eq!(pad_text("hello world", 5, false), "hello");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("no nuts please, severe allergy", 12),
            vec!["no nuts", "please,", "severe", "allergy"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_indent() {
        assert_eq!(
            wrap_text("  - BK-1 Priya Shah", 12),
            vec!["  - BK-1", "  Priya Shah"]
        );
    }

    #[test]
    fn test_convert_preserves_commands() {
        let input = [0x1B, 0x45, 0x01, b'A'];
        let out = convert_to_codepage(&input);
        assert_eq!(&out[..3], &SELECT_WPC1252);
        assert_eq!(&out[3..], &input);
    }

    #[test]
    fn test_convert_accents_and_euro() {
        let out = convert_to_codepage("é€".as_bytes());
        assert_eq!(&out[3..], &[0xE9, 0x80]);
    }

    #[test]
    fn test_convert_unmappable() {
        let out = convert_to_codepage("辣".as_bytes());
        assert_eq!(&out[3..], b"?");
    }

    #[test]
    fn test_init_reselects_code_table() {
        let out = convert_to_codepage(&[0x1B, 0x40, b'x']);
        assert_eq!(out, vec![0x1B, 0x74, 16, 0x1B, 0x40, 0x1B, 0x74, 16, b'x']);
    }
}
