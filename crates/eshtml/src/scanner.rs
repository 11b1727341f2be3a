//! Lexical scanner for localized markup.
//!
//! Splits source text into contiguous segments: plain text, verbatim regions (comments,
//! CDATA, processing instructions, declarations, raw-text element content) and tag
//! occurrences. Concatenating the spans of all segments reproduces the input exactly.
//! A comment, CDATA section, processing instruction or declaration that never reaches
//! its terminator is not a region: its opener is ordinary text and scanning goes on.
//!
//! Tag names start with an alphabetic character (any script, so accented names such as
//! `título` are ordinary names) and continue with alphanumerics, `-`, `_` or `:`. A name
//! only forms a tag if it is followed by ASCII whitespace, `>` or `/`; this keeps a name
//! that is a prefix of another from being split off.
//!
//! The scan is a single linear pass. Slices are only cut at ASCII structural bytes or at
//! char boundaries reached by `char_indices`, so every span is a valid UTF-8 boundary.

use crate::mapping::MappingTables;
use crate::span::Span;
use memchr::{memchr, memmem};
use tools::text::prefix_len_ignore_case;

const COMMENT_START: &[u8] = b"<!--";
const COMMENT_END: &[u8] = b"-->";
const CDATA_START: &[u8] = b"<![CDATA[";
const CDATA_END: &[u8] = b"]]>";
const PI_START: &[u8] = b"<?";
const PI_END: &[u8] = b"?>";
const DECLARATION_START: &[u8] = b"<!";
const DECLARATION_END: &[u8] = b">";

/// Decides which elements have raw-text content (no tags are recognized inside).
pub trait RawTextElements {
    fn is_raw_text_element(&self, normalized: &str) -> bool;
}

impl RawTextElements for MappingTables {
    fn is_raw_text_element(&self, normalized: &str) -> bool {
        MappingTables::is_raw_text_element(self, normalized)
    }
}

/// No raw-text elements: every `<name` is a tag candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRawText;

impl RawTextElements for NoRawText {
    fn is_raw_text_element(&self, _normalized: &str) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerbatimKind {
    Comment,
    Cdata,
    ProcessingInstruction,
    Declaration,
    RawText,
}

/// One `<name …>`, `<name …/>` or `</name …>` occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagOccurrence<'s> {
    /// Name as written.
    pub name: &'s str,
    /// Lowercased name.
    pub normalized: String,
    /// Text between the name and the closing `>` (or `/>`).
    pub attributes: &'s str,
    pub closing: bool,
    pub self_closing: bool,
    /// From `<` through `>`.
    pub span: Span,
    pub name_span: Span,
    pub attributes_span: Span,
}

impl TagOccurrence<'_> {
    /// Byte offset of the opening `<`.
    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn is_opening(&self) -> bool {
        !self.closing
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'s> {
    Text(Span),
    Verbatim { kind: VerbatimKind, span: Span },
    Tag(TagOccurrence<'s>),
}

impl Segment<'_> {
    pub fn span(&self) -> Span {
        match self {
            Segment::Text(span) => *span,
            Segment::Verbatim { span, .. } => *span,
            Segment::Tag(tag) => tag.span,
        }
    }
}

/// Iterator over the [`Segment`]s of a source buffer.
pub struct Scanner<'s, 'r> {
    source: &'s str,
    pos: usize,
    raw_text: &'r dyn RawTextElements,
    /// Normalized name of the raw-text element whose content comes next.
    raw_text_open: Option<String>,
    /// No `>` exists at or after this offset.
    no_tag_end_from: Option<usize>,
    /// Per verbatim kind: its terminator does not occur at or after this offset.
    no_terminator_from: [Option<usize>; 4],
}

impl<'s, 'r> Scanner<'s, 'r> {
    pub fn new(source: &'s str, raw_text: &'r dyn RawTextElements) -> Self {
        Self {
            source,
            pos: 0,
            raw_text,
            raw_text_open: None,
            no_tag_end_from: None,
            no_terminator_from: [None; 4],
        }
    }

    /// Only the tag occurrences, in source order.
    pub fn tags(self) -> impl Iterator<Item = TagOccurrence<'s>> {
        self.filter_map(|segment| match segment {
            Segment::Tag(tag) => Some(tag),
            _ => None,
        })
    }

    fn markup_at(&mut self, start: usize) -> Option<Segment<'s>> {
        let rest = &self.source.as_bytes()[start..];
        if rest.starts_with(COMMENT_START) {
            return self.verbatim(start, COMMENT_START, COMMENT_END, VerbatimKind::Comment);
        }
        if rest.starts_with(CDATA_START) {
            return self.verbatim(start, CDATA_START, CDATA_END, VerbatimKind::Cdata);
        }
        if rest.starts_with(PI_START) {
            return self.verbatim(
                start,
                PI_START,
                PI_END,
                VerbatimKind::ProcessingInstruction,
            );
        }
        if rest.starts_with(DECLARATION_START) {
            return self.verbatim(
                start,
                DECLARATION_START,
                DECLARATION_END,
                VerbatimKind::Declaration,
            );
        }

        let tag = self.tag_at(start)?;
        if !tag.closing && !tag.self_closing && self.raw_text.is_raw_text_element(&tag.normalized)
        {
            self.raw_text_open = Some(tag.normalized.clone());
        }
        self.pos = tag.span.end;
        Some(Segment::Tag(tag))
    }

    /// A region that runs through `terminator`. Without a terminator there is no region
    /// and the opener is plain text.
    fn verbatim(
        &mut self,
        start: usize,
        opener: &[u8],
        terminator: &[u8],
        kind: VerbatimKind,
    ) -> Option<Segment<'s>> {
        let slot = terminator_slot(kind);
        let body = start + opener.len();
        if self.no_terminator_from[slot].is_some_and(|from| body >= from) {
            return None;
        }
        let bytes = self.source.as_bytes();
        let Some(rel) = memmem::find(&bytes[body..], terminator) else {
            self.no_terminator_from[slot] = Some(body);
            return None;
        };
        let end = body + rel + terminator.len();
        debug_assert!(self.source.is_char_boundary(end));
        log::trace!(target: "eshtml.scanner", "{kind:?} region at {start}..{end}");
        self.pos = end;
        Some(Segment::Verbatim {
            kind,
            span: Span::new(start, end),
        })
    }

    fn tag_at(&mut self, start: usize) -> Option<TagOccurrence<'s>> {
        let source = self.source;
        let bytes = source.as_bytes();
        let closing = bytes.get(start + 1) == Some(&b'/');
        let name_start = start + if closing { 2 } else { 1 };
        let name_end = name_start + scan_name(&source[name_start..])?;
        match bytes.get(name_end) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {}
            _ => return None,
        }
        if self.no_tag_end_from.is_some_and(|from| name_end >= from) {
            return None;
        }
        let Some(gt) = find_tag_end(bytes, name_end) else {
            self.no_tag_end_from = Some(name_end);
            return None;
        };
        let self_closing = !closing && gt > name_end && bytes[gt - 1] == b'/';
        let attributes_end = if self_closing { gt - 1 } else { gt };
        let name = &source[name_start..name_end];
        Some(TagOccurrence {
            name,
            normalized: name.to_lowercase(),
            attributes: &source[name_end..attributes_end],
            closing,
            self_closing,
            span: Span::new(start, gt + 1),
            name_span: Span::new(name_start, name_end),
            attributes_span: Span::new(name_end, attributes_end),
        })
    }
}

impl<'s> Iterator for Scanner<'s, '_> {
    type Item = Segment<'s>;

    fn next(&mut self) -> Option<Segment<'s>> {
        let bytes = self.source.as_bytes();
        if let Some(name) = self.raw_text_open.take() {
            let start = self.pos;
            let end = find_raw_text_close(self.source, start, &name).unwrap_or(bytes.len());
            if end > start {
                self.pos = end;
                return Some(Segment::Verbatim {
                    kind: VerbatimKind::RawText,
                    span: Span::new(start, end),
                });
            }
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        if bytes[start] == b'<' {
            if let Some(segment) = self.markup_at(start) {
                return Some(segment);
            }
            // Not markup: the `<` is ordinary text.
            self.pos = start + 1;
        }
        let end = memchr(b'<', &bytes[self.pos..]).map_or(bytes.len(), |rel| self.pos + rel);
        self.pos = end;
        Some(Segment::Text(Span::new(start, end)))
    }
}

fn terminator_slot(kind: VerbatimKind) -> usize {
    match kind {
        VerbatimKind::Comment => 0,
        VerbatimKind::Cdata => 1,
        VerbatimKind::ProcessingInstruction => 2,
        VerbatimKind::Declaration | VerbatimKind::RawText => 3,
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':')
}

/// Byte length of the name at the start of `text`, if `text` starts with one.
fn scan_name(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;
    if !first.is_alphabetic() {
        return None;
    }
    Some(
        chars
            .find(|&(_, c)| !is_name_char(c))
            .map_or(text.len(), |(idx, _)| idx),
    )
}

/// Offset of the `>` closing a tag whose name ends at `from`.
///
/// Quoted attribute values may contain `>`. If a quote is never closed, the first `>`
/// wins instead.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let len = bytes.len();
    let mut i = from;
    let mut after_equals = false;
    while i < len {
        let b = bytes[i];
        if b == b'>' {
            return Some(i);
        }
        if b == b'=' {
            after_equals = true;
            i += 1;
            continue;
        }
        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        if after_equals && (b == b'"' || b == b'\'') {
            let Some(rel) = memchr(b, &bytes[i + 1..]) else {
                break;
            };
            i += rel + 2;
        } else {
            i += 1;
        }
        after_equals = false;
    }
    memchr(b'>', &bytes[from..]).map(|rel| from + rel)
}

/// Offset of the `</name` that closes a raw-text element, matched case-insensitively and
/// allowing only ASCII whitespace before `>`.
fn find_raw_text_close(source: &str, from: usize, name: &str) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut i = from;
    while let Some(rel) = memmem::find(&bytes[i..], b"</") {
        let at = i + rel;
        let after = at + 2;
        if let Some(len) = prefix_len_ignore_case(&source[after..], name) {
            let mut k = after + len;
            while k < bytes.len() && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if bytes.get(k) == Some(&b'>') {
                return Some(at);
            }
        }
        i = after;
    }
    None
}
