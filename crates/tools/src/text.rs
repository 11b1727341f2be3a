//! Source position and case-folding helpers shared by the scanner, validator and rewriter.
//!
//! Positions are reported the way editors show them: 1-based lines and 1-based columns,
//! where a column counts Unicode scalar values rather than bytes.

/// Maps byte offsets into 1-based `(line, column)` pairs.
///
/// Built once per source buffer; lookups are a binary search over line starts plus a
/// character count within the line.
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of the byte at `offset`. Offsets past the end clamp to the end of input.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        debug_assert!(
            self.text.is_char_boundary(offset),
            "offset must be on a UTF-8 boundary"
        );
        // `line_starts[0] == 0`, so at least one start is <= offset.
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.text[line_start..offset].chars().count() + 1;
        (line, column)
    }
}

/// Byte length of the prefix of `haystack` that equals `needle` under Unicode lowercase
/// folding, or `None` if `haystack` does not start with `needle`.
///
/// `needle` must already be lowercase. A haystack character whose lowercase form expands
/// to several scalars only matches if the whole expansion fits inside `needle`.
pub fn prefix_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let mut expected = needle.chars();
    for (idx, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
        if expected.as_str().is_empty() {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}

/// `true` if `text` equals the lowercase `token` ignoring case.
pub fn eq_ignore_case(text: &str, token: &str) -> bool {
    prefix_len_ignore_case(text, token) == Some(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_columns_are_one_based() {
        let index = LineIndex::new("<a>");
        assert_eq!(index.position(0), (1, 1));
        assert_eq!(index.position(2), (1, 3));
    }

    #[test]
    fn positions_after_newlines() {
        let index = LineIndex::new("\n  <x>\n    y\n  </x>");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.position(3), (2, 3));
        assert_eq!(index.position(15), (4, 3));
    }

    #[test]
    fn columns_count_chars_not_bytes() {
        let text = "<título><sección>";
        let index = LineIndex::new(text);
        let second = text.find("<sección").expect("second tag");
        assert_eq!(index.position(second), (1, 9));
    }

    #[test]
    fn offsets_past_end_clamp() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.position(100), (2, 3));
    }

    #[test]
    fn prefix_matching_folds_case() {
        assert_eq!(prefix_len_ignore_case("BOTÓN>", "botón"), Some("BOTÓN".len()));
        assert_eq!(prefix_len_ignore_case("Botón", "botón"), Some("Botón".len()));
        assert_eq!(prefix_len_ignore_case("bot", "botón"), None);
        assert_eq!(prefix_len_ignore_case("ta", ""), Some(0));
    }

    #[test]
    fn prefix_matching_stops_at_needle_end() {
        assert_eq!(prefix_len_ignore_case("tamaño=\"3\"", "ta"), Some(2));
        assert_eq!(prefix_len_ignore_case("tamaño=\"3\"", "tamaño"), Some("tamaño".len()));
    }

    #[test]
    fn multi_scalar_lowercase_must_fit_entirely() {
        // U+0130 lowercases to "i\u{307}".
        assert_eq!(prefix_len_ignore_case("\u{130}x", "i"), None);
        assert_eq!(
            prefix_len_ignore_case("\u{130}x", "i\u{307}"),
            Some('\u{130}'.len_utf8())
        );
    }

    #[test]
    fn equality_requires_full_consumption() {
        assert!(eq_ignore_case("Texto", "texto"));
        assert!(!eq_ignore_case("textos", "texto"));
        assert!(!eq_ignore_case("text", "texto"));
    }
}
