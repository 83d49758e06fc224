use serde::Deserialize;

/// Per-parse settings.
///
/// Deserializable so an embedding application can keep it in its own
/// config file; the parser itself reads nothing from disk or the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Name of the document being parsed, usually its path. Diagnostics
    /// are formatted as `<message> at <label>:<line>:<column>` when set.
    pub source_label: Option<String>,
}

impl ParseOptions {
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }
}
