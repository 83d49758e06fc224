//! Keyword resolution for block and inline tags.

use crate::diagnostic::DiagnosticKind;
use crate::node_kind::NodeKind;

/// Maps a scanned tag keyword to the node kind it declares.
pub struct TagResolver;

impl TagResolver {
    /// Classifies `keyword`, case-insensitively.
    ///
    /// An empty keyword yields [`DiagnosticKind::EmptyTagName`] and an unknown
    /// one [`DiagnosticKind::InvalidTagName`]; the caller re-types the node to
    /// [`NodeKind::InvalidTag`] and records the diagnostic.
    pub fn classify(keyword: &str) -> Result<NodeKind, DiagnosticKind> {
        if keyword.is_empty() {
            return Err(DiagnosticKind::EmptyTagName);
        }

        let kind = match keyword.to_lowercase().as_str() {
            "1" => NodeKind::Heading(1),
            "2" => NodeKind::Heading(2),
            "3" => NodeKind::Heading(3),
            "4" => NodeKind::Heading(4),
            "5" => NodeKind::Heading(5),
            "6" => NodeKind::Heading(6),
            "b" => NodeKind::Bold,
            "i" => NodeKind::Italic,
            "u" => NodeKind::Underline,
            "bi" | "ib" => NodeKind::BoldItalic,
            "bu" | "ub" => NodeKind::BoldUnderline,
            "iu" | "ui" => NodeKind::ItalicUnderline,
            "c" => NodeKind::Code,
            "l" => NodeKind::Hyperlink,
            "list" => NodeKind::List,
            "table" => NodeKind::Table,
            "toc" => NodeKind::TableOfContents,
            "title" => NodeKind::Title,
            _ => return Err(DiagnosticKind::InvalidTagName),
        };
        Ok(kind)
    }
}
