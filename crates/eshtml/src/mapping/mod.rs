//! Mapping tables between a localized markup vocabulary and the canonical one.
//!
//! Tables are plain immutable data. They are built once (in code through
//! [`MappingTables::builder`], or from TOML with the `toml-tables` feature), validated for
//! internal consistency, and then shared read-only by the validator and the rewriter.
//!
//! Tokens are case-insensitive identifiers and are stored lowercased. Several localized
//! tokens may map to the same canonical token; a localized token never maps to two
//! different canonical tokens.

pub mod es;
#[cfg(feature = "toml-tables")]
mod toml_tables;

use std::collections::{HashMap, HashSet};

/// Which vocabulary a table translates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Tags,
    Attributes,
    Values,
}

impl TableKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::Attributes => "attributes",
            Self::Values => "values",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rewrite direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Localized vocabulary to canonical vocabulary.
    #[default]
    Forward,
    /// Canonical vocabulary back to localized vocabulary.
    Reverse,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MappingError {
    EmptyToken {
        table: TableKind,
    },
    /// The token contains a character that ends a name in markup.
    InvalidToken {
        table: TableKind,
        token: String,
    },
    ConflictingEntry {
        table: TableKind,
        token: String,
        first: String,
        second: String,
    },
    InvalidToml(String),
}

impl std::fmt::Display for MappingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingError::EmptyToken { table } => write!(f, "empty token in {table} table"),
            MappingError::InvalidToken { table, token } => {
                write!(f, "{table} table token \"{token}\" contains a markup delimiter")
            }
            MappingError::ConflictingEntry {
                table,
                token,
                first,
                second,
            } => write!(
                f,
                "{table} table maps \"{token}\" to both \"{first}\" and \"{second}\""
            ),
            MappingError::InvalidToml(message) => write!(f, "invalid mapping TOML: {message}"),
        }
    }
}

impl std::error::Error for MappingError {}

/// Characters a token may not contain. Tag and attribute names end at whitespace and at
/// `= > / " '`; values sit between quotes, so only quotes and angle brackets are out.
fn is_delimiter(kind: TableKind, c: char) -> bool {
    match kind {
        TableKind::Tags | TableKind::Attributes => {
            c.is_whitespace() || matches!(c, '=' | '<' | '>' | '/' | '"' | '\'')
        }
        TableKind::Values => matches!(c, '<' | '>' | '"' | '\''),
    }
}

/// A single (localized, canonical) pair, both lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingEntry {
    pub localized: String,
    pub canonical: String,
}

/// One-way token table that keeps declaration order.
///
/// Declaration order matters for [`MappingTable::inverted`] and for tie-breaking between
/// equally long tokens in a compiled pass.
#[derive(Clone, Debug)]
pub struct MappingTable {
    kind: TableKind,
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl MappingTable {
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_pairs<I, L, C>(kind: TableKind, pairs: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (L, C)>,
        L: AsRef<str>,
        C: AsRef<str>,
    {
        let mut table = Self::new(kind);
        for (localized, canonical) in pairs {
            table.insert(localized.as_ref(), canonical.as_ref())?;
        }
        Ok(table)
    }

    /// Add a pair. Re-declaring an identical pair is a no-op; re-declaring a token with a
    /// different canonical form is a [`MappingError::ConflictingEntry`].
    pub fn insert(&mut self, localized: &str, canonical: &str) -> Result<(), MappingError> {
        let localized = localized.trim().to_lowercase();
        let canonical = canonical.trim().to_lowercase();
        if localized.is_empty() || canonical.is_empty() {
            return Err(MappingError::EmptyToken { table: self.kind });
        }
        for token in [&localized, &canonical] {
            if token.chars().any(|c| is_delimiter(self.kind, c)) {
                return Err(MappingError::InvalidToken {
                    table: self.kind,
                    token: token.clone(),
                });
            }
        }
        if let Some(&existing) = self.index.get(&localized) {
            let first = &self.entries[existing].canonical;
            if *first == canonical {
                return Ok(());
            }
            return Err(MappingError::ConflictingEntry {
                table: self.kind,
                token: localized,
                first: first.clone(),
                second: canonical,
            });
        }
        self.push(localized, canonical);
        Ok(())
    }

    fn push(&mut self, localized: String, canonical: String) {
        self.index.insert(localized.clone(), self.entries.len());
        self.entries.push(MappingEntry {
            localized,
            canonical,
        });
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Canonical token for `localized`, matched case-insensitively.
    pub fn get(&self, localized: &str) -> Option<&str> {
        let idx = match self.index.get(localized) {
            Some(idx) => *idx,
            None => *self.index.get(localized.to_lowercase().as_str())?,
        };
        Some(self.entries[idx].canonical.as_str())
    }

    pub fn contains(&self, localized: &str) -> bool {
        self.get(localized).is_some()
    }

    /// The canonical-to-localized table.
    ///
    /// When several localized tokens share a canonical token, the first declared entry
    /// whose localized form differs from the canonical one wins. Identity entries
    /// (`a -> a`) are only used when no other spelling exists.
    pub fn inverted(&self) -> MappingTable {
        let mut out = MappingTable::new(self.kind);
        let (renames, identities): (Vec<&MappingEntry>, Vec<&MappingEntry>) = self
            .entries
            .iter()
            .partition(|entry| entry.localized != entry.canonical);
        for entry in renames.into_iter().chain(identities) {
            if !out.index.contains_key(&entry.canonical) {
                out.push(entry.canonical.clone(), entry.localized.clone());
            }
        }
        out
    }
}

/// Tokens accepted as-is: exact names plus prefix families such as `data-`.
#[derive(Clone, Debug, Default)]
pub struct AllowList {
    exact: HashSet<String>,
    prefixes: Vec<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str) {
        let token = token.trim().to_lowercase();
        if !token.is_empty() {
            self.exact.insert(token);
        }
    }

    pub fn insert_prefix(&mut self, prefix: &str) {
        let prefix = prefix.trim().to_lowercase();
        if !prefix.is_empty() && !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.exact.contains(&token) || self.prefixes.iter().any(|p| token.starts_with(p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixes.is_empty()
    }
}

/// All vocabulary data for one locale.
#[derive(Clone, Debug)]
pub struct MappingTables {
    tags: MappingTable,
    attributes: MappingTable,
    values: MappingTable,
    unchanged_tags: AllowList,
    unchanged_attributes: AllowList,
    void_elements: HashSet<String>,
    raw_text_elements: HashSet<String>,
}

impl MappingTables {
    pub fn builder() -> MappingTablesBuilder {
        MappingTablesBuilder::default()
    }

    pub fn tags(&self) -> &MappingTable {
        &self.tags
    }

    pub fn attributes(&self) -> &MappingTable {
        &self.attributes
    }

    pub fn values(&self) -> &MappingTable {
        &self.values
    }

    pub fn unchanged_tags(&self) -> &AllowList {
        &self.unchanged_tags
    }

    pub fn unchanged_attributes(&self) -> &AllowList {
        &self.unchanged_attributes
    }

    /// `true` if the tag name is a localized token or an unchanged tag.
    pub fn is_known_tag(&self, name: &str) -> bool {
        self.tags.contains(name) || self.unchanged_tags.contains(name)
    }

    /// `true` if the attribute name is a localized token or an unchanged attribute.
    pub fn is_known_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name) || self.unchanged_attributes.contains(name)
    }

    /// Void check by meaning: the name itself or the canonical tag it maps to.
    pub fn is_void(&self, normalized: &str) -> bool {
        self.void_elements.contains(normalized)
            || self
                .tags
                .get(normalized)
                .is_some_and(|canonical| self.void_elements.contains(canonical))
    }

    /// Raw-text check by meaning, like [`MappingTables::is_void`].
    pub fn is_raw_text_element(&self, normalized: &str) -> bool {
        self.raw_text_elements.contains(normalized)
            || self
                .tags
                .get(normalized)
                .is_some_and(|canonical| self.raw_text_elements.contains(canonical))
    }
}

/// Collects table data and validates it in [`MappingTablesBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct MappingTablesBuilder {
    tags: Vec<(String, String)>,
    attributes: Vec<(String, String)>,
    values: Vec<(String, String)>,
    unchanged_tags: Vec<String>,
    unchanged_attributes: Vec<String>,
    unchanged_attribute_prefixes: Vec<String>,
    void_elements: Vec<String>,
    raw_text_elements: Vec<String>,
}

fn owned_pairs<I, L, C>(pairs: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (L, C)>,
    L: AsRef<str>,
    C: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(l, c)| (l.as_ref().to_string(), c.as_ref().to_string()))
}

fn owned_tokens<I, T>(tokens: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tokens.into_iter().map(|t| t.as_ref().to_string())
}

impl MappingTablesBuilder {
    pub fn tag(mut self, localized: &str, canonical: &str) -> Self {
        self.tags.push((localized.to_string(), canonical.to_string()));
        self
    }

    pub fn tags<I, L, C>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: AsRef<str>,
        C: AsRef<str>,
    {
        self.tags.extend(owned_pairs(pairs));
        self
    }

    pub fn attribute(mut self, localized: &str, canonical: &str) -> Self {
        self.attributes
            .push((localized.to_string(), canonical.to_string()));
        self
    }

    pub fn attributes<I, L, C>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: AsRef<str>,
        C: AsRef<str>,
    {
        self.attributes.extend(owned_pairs(pairs));
        self
    }

    pub fn value(mut self, localized: &str, canonical: &str) -> Self {
        self.values.push((localized.to_string(), canonical.to_string()));
        self
    }

    pub fn values<I, L, C>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: AsRef<str>,
        C: AsRef<str>,
    {
        self.values.extend(owned_pairs(pairs));
        self
    }

    pub fn unchanged_tags<I: IntoIterator<Item = T>, T: AsRef<str>>(mut self, tokens: I) -> Self {
        self.unchanged_tags.extend(owned_tokens(tokens));
        self
    }

    pub fn unchanged_attributes<I: IntoIterator<Item = T>, T: AsRef<str>>(
        mut self,
        tokens: I,
    ) -> Self {
        self.unchanged_attributes.extend(owned_tokens(tokens));
        self
    }

    pub fn unchanged_attribute_prefixes<I: IntoIterator<Item = T>, T: AsRef<str>>(
        mut self,
        prefixes: I,
    ) -> Self {
        self.unchanged_attribute_prefixes
            .extend(owned_tokens(prefixes));
        self
    }

    pub fn void_elements<I: IntoIterator<Item = T>, T: AsRef<str>>(mut self, names: I) -> Self {
        self.void_elements.extend(owned_tokens(names));
        self
    }

    pub fn raw_text_elements<I: IntoIterator<Item = T>, T: AsRef<str>>(
        mut self,
        names: I,
    ) -> Self {
        self.raw_text_elements.extend(owned_tokens(names));
        self
    }

    pub fn build(self) -> Result<MappingTables, MappingError> {
        let tags = MappingTable::from_pairs(TableKind::Tags, self.tags)?;
        let attributes = MappingTable::from_pairs(TableKind::Attributes, self.attributes)?;
        let values = MappingTable::from_pairs(TableKind::Values, self.values)?;

        let mut unchanged_tags = AllowList::new();
        for tag in &self.unchanged_tags {
            unchanged_tags.insert(tag);
        }
        let mut unchanged_attributes = AllowList::new();
        for attr in &self.unchanged_attributes {
            unchanged_attributes.insert(attr);
        }
        for prefix in &self.unchanged_attribute_prefixes {
            unchanged_attributes.insert_prefix(prefix);
        }
        let lowered = |names: Vec<String>| -> HashSet<String> {
            names
                .iter()
                .map(|n| n.trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect()
        };

        Ok(MappingTables {
            tags,
            attributes,
            values,
            unchanged_tags,
            unchanged_attributes,
            void_elements: lowered(self.void_elements),
            raw_text_elements: lowered(self.raw_text_elements),
        })
    }
}
