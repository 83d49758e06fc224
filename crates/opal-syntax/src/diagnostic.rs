//! Position-tagged, non-fatal parse errors.

use thiserror::Error;

use crate::position::Position;

/// What went wrong at a point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("Unexpected end of file")]
    UnexpectedEndOfInput,
    #[error("Unexpected terminator")]
    UnexpectedTerminator,
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("Invalid tag name")]
    InvalidTagName,
    #[error("No URL provided in link tag")]
    MissingUrl,
    #[error("No tag name provided")]
    EmptyTagName,
    #[error("No tag content provided")]
    EmptyTagContent,
}

/// A diagnostic recorded on the document root.
///
/// `label` is the caller-supplied source label (usually a file path) and only
/// affects formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub column: usize,
    pub label: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, at: Position, label: Option<&str>) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
            label: label.map(str::to_owned),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} at {label}:{}:{}", self.kind, self.line, self.column),
            None => write!(
                f,
                "{} at line {}, column {}",
                self.kind, self.line, self.column
            ),
        }
    }
}
