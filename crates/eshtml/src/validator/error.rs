use std::fmt;

/// Category of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    UnknownTag,
    UnknownAttribute,
    MismatchedClose,
    UnclosedTags,
}

impl ValidationErrorKind {
    pub const ALL: [ValidationErrorKind; 4] = [
        Self::UnknownTag,
        Self::UnknownAttribute,
        Self::MismatchedClose,
        Self::UnclosedTags,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownTag => "unknown-tag",
            Self::UnknownAttribute => "unknown-attribute",
            Self::MismatchedClose => "mismatched-close",
            Self::UnclosedTags => "unclosed-tags",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation finding.
///
/// `line` and `column` are 1-based; the unclosed-tags summary is reported at `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        message: impl Into<String>,
        (line, column): (usize, usize),
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
        }
    }

    pub(crate) fn unknown_tag(name: &str, position: (usize, usize)) -> Self {
        Self::new(
            ValidationErrorKind::UnknownTag,
            format!("tag \"{name}\" is not a recognized tag"),
            position,
        )
    }

    pub(crate) fn unknown_attribute(name: &str, position: (usize, usize)) -> Self {
        Self::new(
            ValidationErrorKind::UnknownAttribute,
            format!("unknown attribute \"{name}\""),
            position,
        )
    }

    pub(crate) fn mismatched_close(
        closing: &str,
        open: Option<&str>,
        position: (usize, usize),
    ) -> Self {
        let open = open.unwrap_or("none");
        Self::new(
            ValidationErrorKind::MismatchedClose,
            format!("closing tag \"{closing}\" does not match opening tag \"{open}\""),
            position,
        )
    }

    pub(crate) fn unclosed<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = names.into_iter().collect();
        Self::new(
            ValidationErrorKind::UnclosedTags,
            format!("unclosed tags: {}", names.join(", ")),
            (0, 0),
        )
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Compact `kind@line:column` form used by fixtures and logs.
    pub fn short_form(&self) -> String {
        format!("{}@{}:{}", self.kind, self.line, self.column)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ValidationError {}
