//! Validator and token-substitution rewriter for markup written with a localized
//! vocabulary, such as EsHTML (Spanish tag and attribute names).
//!
//! ```
//! use eshtml::{TranspileOptions, Transpiler};
//!
//! let transpiler = Transpiler::spanish().expect("built-in tables are consistent");
//! let html = transpiler
//!     .transpile("<título idioma=\"es\">Hola</título>", &TranspileOptions::strict())
//!     .expect("valid document");
//! assert_eq!(html, "<title lang=\"es\">Hola</title>");
//! assert_eq!(transpiler.reverse_transpile(&html), "<título idioma=\"es\">Hola</título>");
//! ```

pub mod attributes;
pub mod mapping;
pub mod pipeline;
pub mod rewriter;
pub mod scanner;
pub mod span;
pub mod validator;

pub use crate::mapping::{
    AllowList, Direction, MappingEntry, MappingError, MappingTable, MappingTables,
    MappingTablesBuilder, TableKind,
};
pub use crate::pipeline::{
    DiagnosticSink, LogSink, TranspileError, TranspileOptions, Transpiled, Transpiler,
};
pub use crate::rewriter::{CompiledPass, Rewriter};
pub use crate::scanner::{Scanner, Segment, TagOccurrence, VerbatimKind};
pub use crate::span::Span;
pub use crate::validator::{TECHNICAL_ATTRIBUTES, ValidationError, ValidationErrorKind, Validator};
