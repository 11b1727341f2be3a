//! Vocabulary and nesting checks run before rewriting.
//!
//! Validation happens in fixed phases over one scan of the source:
//!
//! 1. every tag occurrence (opening, closing and self-closing) must name a localized tag
//!    or an unchanged tag;
//! 2. every attribute of an opening tag must be a localized attribute, an unchanged
//!    attribute (exact or by prefix family), or one of [`TECHNICAL_ATTRIBUTES`];
//! 3. only when phases 1 and 2 found nothing, tags must nest properly. A self-closing
//!    `<x/>` of a non-void element opens it just like `<x>`.
//!
//! Comments, CDATA sections, processing instructions, declarations and raw-text element
//! content are skipped in place, so reported positions refer to the original source.
//! The validator never fails; it returns every finding and leaves the policy to the
//! caller.

mod error;
mod stack;

pub use error::{ValidationError, ValidationErrorKind};

use crate::attributes::attributes;
use crate::mapping::MappingTables;
use crate::scanner::{Scanner, TagOccurrence};
use stack::{CloseOutcome, OpenTag, OpenTagStack};
use std::sync::Arc;
use tools::text::LineIndex;

/// Attributes accepted in any document regardless of the tables.
pub const TECHNICAL_ATTRIBUTES: &[&str] = &["method", "action", "charset", "href"];

#[derive(Clone, Debug)]
pub struct Validator {
    tables: Arc<MappingTables>,
}

impl Validator {
    pub fn new(tables: Arc<MappingTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &MappingTables {
        &self.tables
    }

    /// All findings for `source`, in phase order and source order within a phase.
    pub fn validate_source(&self, source: &str) -> Vec<ValidationError> {
        let lines = LineIndex::new(source);
        let tags: Vec<TagOccurrence<'_>> = Scanner::new(source, &*self.tables).tags().collect();

        let mut errors = Vec::new();
        self.check_tags(&tags, &lines, &mut errors);
        self.check_attributes(&tags, &lines, &mut errors);
        let structural = errors.is_empty();
        if structural {
            self.check_structure(&tags, &lines, &mut errors);
        }

        log::debug!(
            target: "eshtml.validator",
            "validated {} bytes ({} tags): {} findings [{}], structural check {}",
            source.len(),
            tags.len(),
            errors.len(),
            summarize(&errors),
            if structural { "ran" } else { "skipped" }
        );
        errors
    }

    fn check_tags(
        &self,
        tags: &[TagOccurrence<'_>],
        lines: &LineIndex<'_>,
        errors: &mut Vec<ValidationError>,
    ) {
        for tag in tags {
            if !self.tables.is_known_tag(&tag.normalized) {
                errors.push(ValidationError::unknown_tag(
                    tag.name,
                    lines.position(tag.offset()),
                ));
            }
        }
    }

    fn check_attributes(
        &self,
        tags: &[TagOccurrence<'_>],
        lines: &LineIndex<'_>,
        errors: &mut Vec<ValidationError>,
    ) {
        for tag in tags.iter().filter(|tag| tag.is_opening()) {
            for attr in attributes(tag.attributes) {
                if !self.is_accepted_attribute(attr.name) {
                    errors.push(ValidationError::unknown_attribute(
                        attr.name,
                        lines.position(tag.offset()),
                    ));
                }
            }
        }
    }

    fn is_accepted_attribute(&self, name: &str) -> bool {
        self.tables.is_known_attribute(name)
            || TECHNICAL_ATTRIBUTES
                .iter()
                .any(|technical| name.eq_ignore_ascii_case(technical))
    }

    fn check_structure(
        &self,
        tags: &[TagOccurrence<'_>],
        lines: &LineIndex<'_>,
        errors: &mut Vec<ValidationError>,
    ) {
        let is_void = |name: &str| self.tables.is_void(name);
        let mut stack = OpenTagStack::default();
        for tag in tags {
            if tag.closing {
                if let CloseOutcome::Mismatched { top } = stack.close_greedy(&tag.normalized, is_void)
                {
                    errors.push(ValidationError::mismatched_close(
                        tag.name,
                        top.as_ref().map(|frame| frame.original.as_str()),
                        lines.position(tag.offset()),
                    ));
                }
            } else if !is_void(&tag.normalized) {
                stack.push(OpenTag::new(tag.name, &tag.normalized));
            }
        }
        log::trace!(
            target: "eshtml.validator",
            "structure: max depth {}, {} left open",
            stack.max_depth(),
            stack.len()
        );
        if !stack.is_empty() {
            errors.push(ValidationError::unclosed(stack.iter_original()));
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    ValidationErrorKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let count = errors.iter().filter(|err| err.kind == kind).count();
            (count > 0).then(|| format!("{kind}: {count}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
