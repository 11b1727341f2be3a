//! Validate, then rewrite.
//!
//! [`Transpiler`] owns a [`Validator`] and a [`Rewriter`] sharing one set of tables.
//! Forward transpilation validates first. In strict mode any finding aborts before the
//! rewriter runs. Otherwise findings go to a [`DiagnosticSink`] (unless
//! `ignore_warnings` is set) and the document is rewritten regardless.

use crate::mapping::{Direction, MappingError, MappingTables, es};
use crate::rewriter::Rewriter;
use crate::validator::{ValidationError, Validator};
use std::fmt;
use std::sync::Arc;

/// Error policy for one transpile call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Any validation finding aborts before rewriting.
    pub strict_mode: bool,
    /// Findings are not reported to the sink. Has no effect in strict mode.
    pub ignore_warnings: bool,
}

impl TranspileOptions {
    pub fn strict() -> Self {
        Self {
            strict_mode: true,
            ..Self::default()
        }
    }

    pub fn ignoring_warnings() -> Self {
        Self {
            ignore_warnings: true,
            ..Self::default()
        }
    }
}

/// Receives lenient-mode findings.
pub trait DiagnosticSink {
    fn report(&mut self, error: &ValidationError);
}

/// Reports each finding as a `log::warn!` record.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, error: &ValidationError) {
        log::warn!(target: "eshtml.transpile", "{error} [{}]", error.kind);
    }
}

impl DiagnosticSink for Vec<ValidationError> {
    fn report(&mut self, error: &ValidationError) {
        self.push(error.clone());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranspileError {
    /// Strict mode found problems; nothing was rewritten.
    Validation(Vec<ValidationError>),
}

impl TranspileError {
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            TranspileError::Validation(errors) => errors,
        }
    }
}

impl fmt::Display for TranspileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranspileError::Validation(errors) => {
                write!(f, "validation failed with {} error(s):", errors.len())?;
                for error in errors {
                    write!(f, "\n{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for TranspileError {}

/// Rewritten output together with the validation findings that were reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transpiled {
    pub output: String,
    pub diagnostics: Vec<ValidationError>,
}

#[derive(Clone, Debug)]
pub struct Transpiler {
    validator: Validator,
    rewriter: Rewriter,
}

impl Transpiler {
    pub fn new(tables: Arc<MappingTables>) -> Self {
        Self {
            validator: Validator::new(Arc::clone(&tables)),
            rewriter: Rewriter::new(tables),
        }
    }

    /// A transpiler for the Spanish tables.
    pub fn spanish() -> Result<Self, MappingError> {
        Ok(Self::new(Arc::new(es::spanish()?)))
    }

    pub fn tables(&self) -> &MappingTables {
        self.validator.tables()
    }

    pub fn validate_source(&self, source: &str) -> Vec<ValidationError> {
        self.validator.validate_source(source)
    }

    /// Forward transpilation with findings reported through [`LogSink`].
    pub fn transpile(
        &self,
        source: &str,
        options: &TranspileOptions,
    ) -> Result<String, TranspileError> {
        self.transpile_with_sink(source, Direction::Forward, options, &mut LogSink)
    }

    /// Canonical vocabulary back to localized vocabulary. Not validated: the tables
    /// describe the localized side only.
    pub fn reverse_transpile(&self, source: &str) -> String {
        self.rewriter.rewrite(source, Direction::Reverse)
    }

    pub fn transpile_with_sink(
        &self,
        source: &str,
        direction: Direction,
        options: &TranspileOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String, TranspileError> {
        let diagnostics = self.check(source, direction, options)?;
        if !options.ignore_warnings {
            for error in &diagnostics {
                sink.report(error);
            }
        }
        Ok(self.rewriter.rewrite(source, direction))
    }

    /// Like [`Transpiler::transpile_with_sink`], but hands the findings back with the
    /// output instead of reporting them. `ignore_warnings` does not drop them here.
    pub fn transpile_report(
        &self,
        source: &str,
        direction: Direction,
        options: &TranspileOptions,
    ) -> Result<Transpiled, TranspileError> {
        let diagnostics = self.check(source, direction, options)?;
        Ok(Transpiled {
            output: self.rewriter.rewrite(source, direction),
            diagnostics,
        })
    }

    fn check(
        &self,
        source: &str,
        direction: Direction,
        options: &TranspileOptions,
    ) -> Result<Vec<ValidationError>, TranspileError> {
        if direction == Direction::Reverse {
            return Ok(Vec::new());
        }
        let diagnostics = self.validator.validate_source(source);
        if options.strict_mode && !diagnostics.is_empty() {
            log::debug!(
                target: "eshtml.transpile",
                "strict mode: aborting with {} finding(s)",
                diagnostics.len()
            );
            return Err(TranspileError::Validation(diagnostics));
        }
        Ok(diagnostics)
    }
}
