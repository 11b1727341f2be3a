//! Loading mapping tables from TOML.
//!
//! Scalar arrays come first, then one table per vocabulary, each `localized = "canonical"`.
//! Entry order in the file is declaration order.
//!
//! ```toml
//! unchanged_tags = ["div", "span"]
//! unchanged_attributes = ["id", "class"]
//! unchanged_attribute_prefixes = ["data-", "aria-"]
//! void_elements = ["br", "img", "input"]
//! raw_text_elements = ["script", "style"]
//!
//! [tags]
//! "título" = "title"
//!
//! [attributes]
//! idioma = "lang"
//!
//! [values]
//! texto = "text"
//! ```

use super::{MappingError, MappingTables, TableKind};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TableFile {
    unchanged_tags: Vec<String>,
    unchanged_attributes: Vec<String>,
    unchanged_attribute_prefixes: Vec<String>,
    void_elements: Vec<String>,
    raw_text_elements: Vec<String>,
    tags: toml::Table,
    attributes: toml::Table,
    values: toml::Table,
}

fn string_pairs(kind: TableKind, table: toml::Table) -> Result<Vec<(String, String)>, MappingError> {
    table
        .into_iter()
        .map(|(localized, canonical)| match canonical {
            toml::Value::String(canonical) => Ok((localized, canonical)),
            other => Err(MappingError::InvalidToml(format!(
                "{kind} entry \"{localized}\" must be a string, found {}",
                other.type_str()
            ))),
        })
        .collect()
}

impl MappingTables {
    pub fn from_toml_str(source: &str) -> Result<Self, MappingError> {
        let file: TableFile =
            toml::from_str(source).map_err(|err| MappingError::InvalidToml(err.to_string()))?;
        MappingTables::builder()
            .tags(string_pairs(TableKind::Tags, file.tags)?)
            .attributes(string_pairs(TableKind::Attributes, file.attributes)?)
            .values(string_pairs(TableKind::Values, file.values)?)
            .unchanged_tags(file.unchanged_tags)
            .unchanged_attributes(file.unchanged_attributes)
            .unchanged_attribute_prefixes(file.unchanged_attribute_prefixes)
            .void_elements(file.void_elements)
            .raw_text_elements(file.raw_text_elements)
            .build()
    }
}
