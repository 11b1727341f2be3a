//! Attribute lexer for the text between a tag name and the end of the tag.
//!
//! Accepts the loose syntax found in hand-written markup: boolean attributes, values in
//! double or single quotes, unquoted values, and whitespace around `=`. Anything that
//! cannot start a name (stray quotes, `=` without a name) is skipped one character at a
//! time. Spans are relative to the attribute text.

use crate::span::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeValue<'a> {
    /// Value text without quotes.
    pub raw: &'a str,
    pub quote: Option<char>,
    /// Value text including its quotes.
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeToken<'a> {
    pub name: &'a str,
    pub name_span: Span,
    /// The name directly follows ASCII whitespace.
    pub preceded_by_whitespace: bool,
    pub value: Option<AttributeValue<'a>>,
}

/// Iterate the attributes in `text`.
pub fn attributes(text: &str) -> Attributes<'_> {
    Attributes { text, pos: 0 }
}

pub struct Attributes<'a> {
    text: &'a str,
    pos: usize,
}

fn ends_name(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b'=' | b'>' | b'/' | b'"' | b'\'')
}

impl<'a> Attributes<'a> {
    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn value(&mut self) -> AttributeValue<'a> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        match bytes.get(start) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                let body = start + 1;
                let (raw_end, end) = match memchr::memchr(quote, &bytes[body..]) {
                    Some(rel) => (body + rel, body + rel + 1),
                    None => (bytes.len(), bytes.len()),
                };
                self.pos = end;
                AttributeValue {
                    raw: &self.text[body..raw_end],
                    quote: Some(char::from(quote)),
                    span: Span::new(start, end),
                }
            }
            _ => {
                let end = bytes[start..]
                    .iter()
                    .position(|b| b.is_ascii_whitespace())
                    .map_or(bytes.len(), |rel| start + rel);
                self.pos = end;
                AttributeValue {
                    raw: &self.text[start..end],
                    quote: None,
                    span: Span::new(start, end),
                }
            }
        }
    }
}

impl<'a> Iterator for Attributes<'a> {
    type Item = AttributeToken<'a>;

    fn next(&mut self) -> Option<AttributeToken<'a>> {
        let bytes = self.text.as_bytes();
        loop {
            while self.pos < bytes.len()
                && (bytes[self.pos].is_ascii_whitespace() || bytes[self.pos] == b'/')
            {
                self.pos += 1;
            }
            if self.pos >= bytes.len() {
                return None;
            }

            let name_start = self.pos;
            let name_end = bytes[name_start..]
                .iter()
                .position(|&b| ends_name(b))
                .map_or(bytes.len(), |rel| name_start + rel);
            if name_end == name_start {
                // Junk such as a stray quote or `=`; step over one character.
                let skip = self.text[name_start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.pos = name_start + skip;
                continue;
            }

            self.pos = name_end;
            self.skip_whitespace();
            let value = if bytes.get(self.pos) == Some(&b'=') {
                self.pos += 1;
                self.skip_whitespace();
                Some(self.value())
            } else {
                self.pos = name_end;
                None
            };

            return Some(AttributeToken {
                name: &self.text[name_start..name_end],
                name_span: Span::new(name_start, name_end),
                preceded_by_whitespace: name_start > 0
                    && bytes[name_start - 1].is_ascii_whitespace(),
                value,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<&str> {
        attributes(text).map(|attr| attr.name).collect()
    }

    #[test]
    fn quoted_unquoted_and_boolean_attributes() {
        let attrs: Vec<_> = attributes(r#" tipo="texto" requerido valor='a b' tamaño=3"#).collect();
        assert_eq!(attrs.len(), 4);
        assert_eq!(attrs[0].name, "tipo");
        assert_eq!(
            attrs[0].value,
            Some(AttributeValue {
                raw: "texto",
                quote: Some('"'),
                span: Span::new(6, 13),
            })
        );
        assert_eq!(attrs[1].name, "requerido");
        assert_eq!(attrs[1].value, None);
        assert_eq!(attrs[2].value.map(|v| v.raw), Some("a b"));
        assert_eq!(attrs[2].value.and_then(|v| v.quote), Some('\''));
        assert_eq!(attrs[3].name, "tamaño");
        assert_eq!(attrs[3].value.map(|v| v.raw), Some("3"));
        assert_eq!(attrs[3].value.and_then(|v| v.quote), None);
    }

    #[test]
    fn whitespace_around_equals() {
        let attrs: Vec<_> = attributes(" clase = \"x\"  id").collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].value.map(|v| v.raw), Some("x"));
        assert_eq!(attrs[1].name, "id");
        assert!(attrs[1].preceded_by_whitespace);
    }

    #[test]
    fn name_spans_point_into_the_text() {
        let text = " data-x=\"1\" aria-label";
        for attr in attributes(text) {
            assert_eq!(attr.name_span.slice(text), attr.name);
        }
        assert_eq!(names(text), vec!["data-x", "aria-label"]);
    }

    #[test]
    fn quoted_values_may_contain_delimiters() {
        assert_eq!(
            names(r#" título="a=b 'c'" otro"#),
            vec!["título", "otro"]
        );
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let attrs: Vec<_> = attributes(" a=\"open b").collect();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].value.map(|v| v.raw), Some("open b"));
    }

    #[test]
    fn junk_is_skipped() {
        assert_eq!(names(" =\"x\" ok"), vec!["x", "ok"]);
    }

    #[test]
    fn slashes_separate_names() {
        let attrs: Vec<_> = attributes("/b /").collect();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "b");
        assert!(!attrs[0].preceded_by_whitespace);
    }

    #[test]
    fn empty_text_has_no_attributes() {
        assert_eq!(attributes("").count(), 0);
        assert_eq!(attributes("   ").count(), 0);
    }
}
