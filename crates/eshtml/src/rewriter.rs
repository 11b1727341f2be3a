//! Token-substitution rewriter.
//!
//! The source is segmented once. Each tag occurrence then goes through three passes in
//! order: tag name, attribute names, attribute values (forward direction only). Text,
//! comments, CDATA, processing instructions, declarations and raw-text element content
//! are copied through unchanged, so a rewrite never changes where those regions end.
//!
//! Every pass tries its entries longest token first, so an abbreviation never consumes
//! the start of a longer token (`ta` vs `tamaño`). Lookups are linear in the number of
//! entries, which makes a pass O(document length × entries) in the worst case. Passes
//! are compiled once per [`Rewriter`] and reused for every document.
//!
//! The rewriter never fails: tokens that no entry matches are left exactly as written.

use crate::attributes::{AttributeToken, attributes};
use crate::mapping::{Direction, MappingTable, MappingTables};
use crate::scanner::{Scanner, Segment, TagOccurrence};
use crate::span::Span;
use std::borrow::Cow;
use std::cmp::Reverse;
use std::sync::Arc;
use tools::text::{eq_ignore_case, prefix_len_ignore_case};

#[derive(Clone, Debug)]
struct CompiledEntry {
    token: String,
    replacement: String,
}

/// A mapping table ordered for matching: longest token first, declaration order among
/// tokens of equal length.
#[derive(Clone, Debug)]
pub struct CompiledPass {
    entries: Vec<CompiledEntry>,
}

impl CompiledPass {
    pub fn new(table: &MappingTable) -> Self {
        let mut entries: Vec<CompiledEntry> = table
            .entries()
            .iter()
            .map(|entry| CompiledEntry {
                token: entry.localized.clone(),
                replacement: entry.canonical.clone(),
            })
            .collect();
        entries.sort_by_key(|entry| Reverse(entry.token.chars().count()));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens in match order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.token.as_str())
    }

    /// The first entry, in match order, that `text` starts with (ignoring case) and that
    /// is followed by a character accepted by `is_boundary` or by the end of `text`.
    /// Returns the matched byte length of `text` and the replacement.
    pub fn match_prefix(
        &self,
        text: &str,
        is_boundary: impl Fn(char) -> bool,
    ) -> Option<(usize, &str)> {
        self.entries.iter().find_map(|entry| {
            let len = prefix_len_ignore_case(text, &entry.token)?;
            text[len..]
                .chars()
                .next()
                .is_none_or(|c| is_boundary(c))
                .then_some((len, entry.replacement.as_str()))
        })
    }

    /// Replacement for a token equal to `text` ignoring case.
    pub fn match_exact(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| eq_ignore_case(text, &entry.token))
            .map(|entry| entry.replacement.as_str())
    }
}

fn is_attribute_name_boundary(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '=' | '>' | '"' | '/')
}

#[derive(Clone, Debug)]
struct PassSet {
    tags: CompiledPass,
    attributes: CompiledPass,
    values: Option<CompiledPass>,
}

/// Applies one locale's tables in either direction.
#[derive(Clone, Debug)]
pub struct Rewriter {
    tables: Arc<MappingTables>,
    forward: PassSet,
    reverse: PassSet,
}

impl Rewriter {
    pub fn new(tables: Arc<MappingTables>) -> Self {
        let forward = PassSet {
            tags: CompiledPass::new(tables.tags()),
            attributes: CompiledPass::new(tables.attributes()),
            values: Some(CompiledPass::new(tables.values())),
        };
        let reverse = PassSet {
            tags: CompiledPass::new(&tables.tags().inverted()),
            attributes: CompiledPass::new(&tables.attributes().inverted()),
            values: None,
        };
        log::trace!(
            target: "eshtml.rewriter",
            "compiled passes: forward {}/{}/{}, reverse {}/{}",
            forward.tags.len(),
            forward.attributes.len(),
            forward.values.as_ref().map_or(0, CompiledPass::len),
            reverse.tags.len(),
            reverse.attributes.len()
        );
        Self {
            tables,
            forward,
            reverse,
        }
    }

    pub fn tables(&self) -> &MappingTables {
        &self.tables
    }

    pub fn rewrite(&self, source: &str, direction: Direction) -> String {
        let passes = match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        };

        let mut out = String::with_capacity(source.len());
        let mut counts = PassCounts::default();
        for segment in Scanner::new(source, &*self.tables) {
            match segment {
                Segment::Tag(tag) => passes.rewrite_tag(&tag, source, &mut out, &mut counts),
                other => out.push_str(other.span().slice(source)),
            }
        }

        log::trace!(
            target: "eshtml.rewriter",
            "{direction:?} rewrite of {} bytes: {} tags, {} attribute tags, {} value tags",
            source.len(),
            counts.tags,
            counts.attributes,
            counts.values
        );
        out
    }
}

#[derive(Default)]
struct PassCounts {
    tags: usize,
    attributes: usize,
    values: usize,
}

impl PassSet {
    /// Writes one tag occurrence with all passes applied to it.
    fn rewrite_tag(
        &self,
        tag: &TagOccurrence<'_>,
        source: &str,
        out: &mut String,
        counts: &mut PassCounts,
    ) {
        out.push_str(&source[tag.span.start..tag.name_span.start]);
        match self.tags.match_exact(tag.name) {
            Some(replacement) => {
                out.push_str(replacement);
                counts.tags += 1;
            }
            None => out.push_str(tag.name),
        }

        let mut attributes = Cow::Borrowed(tag.attributes);
        if tag.is_opening() {
            if let Some(renamed) = rename_attributes(&self.attributes, &attributes) {
                attributes = Cow::Owned(renamed);
                counts.attributes += 1;
            }
            if let Some(mapped) = self
                .values
                .as_ref()
                .and_then(|pass| map_values(pass, &attributes))
            {
                attributes = Cow::Owned(mapped);
                counts.values += 1;
            }
        }
        out.push_str(&attributes);
        out.push_str(&source[tag.attributes_span.end..tag.span.end]);
    }
}

/// Rebuilds `text` with the edits `edit` proposes for each attribute, or `None` when
/// nothing changed. Edits that would overlap an earlier one are dropped.
fn splice_attributes<F>(text: &str, mut edit: F) -> Option<String>
where
    F: FnMut(&AttributeToken<'_>) -> Option<(Span, String)>,
{
    let mut out = String::new();
    let mut cursor = 0;
    let mut edited = false;
    for attr in attributes(text) {
        let Some((span, replacement)) = edit(&attr) else {
            continue;
        };
        if span.start < cursor {
            continue;
        }
        out.push_str(&text[cursor..span.start]);
        out.push_str(&replacement);
        cursor = span.end;
        edited = true;
    }
    if !edited {
        return None;
    }
    out.push_str(&text[cursor..]);
    Some(out)
}

fn rename_attributes(pass: &CompiledPass, text: &str) -> Option<String> {
    if pass.is_empty() {
        return None;
    }
    splice_attributes(text, |attr| {
        if !attr.preceded_by_whitespace {
            return None;
        }
        let start = attr.name_span.start;
        let (len, replacement) = pass.match_prefix(&text[start..], is_attribute_name_boundary)?;
        Some((Span::new(start, start + len), replacement.to_string()))
    })
}

fn map_values(pass: &CompiledPass, text: &str) -> Option<String> {
    if pass.is_empty() {
        return None;
    }
    splice_attributes(text, |attr| {
        let value = attr.value?;
        let quote = value.quote?;
        // An unterminated quote has no closing character to preserve.
        if value.span.len() != value.raw.len() + 2 {
            return None;
        }
        let replacement = pass.match_exact(value.raw.trim())?;
        Some((value.span, format!("{quote}{replacement}{quote}")))
    })
}
