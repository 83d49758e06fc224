//! NodeKind enum for every element of the Opal AST.
//!
//! Block and inline tags start out as [`NodeKind::BlockTag`] and
//! [`NodeKind::InlineTag`] and are re-typed once their keyword resolves.

/// All node kinds produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Document root, owner of the tree and of the diagnostics
    Root,
    /// Running text outside any block tag
    Paragraph,
    /// Plain text run
    Text,
    /// `.keyword ...` before its keyword resolves
    BlockTag,
    /// A `/attr` token of a block tag
    BlockTagAttr,
    /// One `- item` of a list body
    ListItem,
    /// `` `keyword text` `` before its keyword resolves
    InlineTag,
    /// `l`: a link with display text and URL
    Hyperlink,
    /// `1`..`6`
    Heading(u8),
    /// `b`
    Bold,
    /// `i`
    Italic,
    /// `u`
    Underline,
    /// `bi` / `ib`
    BoldItalic,
    /// `bu` / `ub`
    BoldUnderline,
    /// `iu` / `ui`
    ItalicUnderline,
    /// `c`
    Code,
    /// `list`
    List,
    /// `table`
    Table,
    /// One line of a table body
    TableRow,
    /// One `|`-separated cell of a table row
    TableData,
    /// `title`
    Title,
    /// `toc`
    TableOfContents,
    /// A tag whose keyword did not resolve
    InvalidTag,
}

impl NodeKind {
    /// Stable name used for the serialized `type` field.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Text => "Text",
            NodeKind::BlockTag => "BlockTag",
            NodeKind::BlockTagAttr => "BlockTagAttr",
            NodeKind::ListItem => "ListItem",
            NodeKind::InlineTag => "InlineTag",
            NodeKind::Hyperlink => "Hyperlink",
            NodeKind::Heading(_) => "Heading",
            NodeKind::Bold => "Bold",
            NodeKind::Italic => "Italic",
            NodeKind::Underline => "Underline",
            NodeKind::BoldItalic => "BoldItalic",
            NodeKind::BoldUnderline => "BoldUnderline",
            NodeKind::ItalicUnderline => "ItalicUnderline",
            NodeKind::Code => "Code",
            NodeKind::List => "List",
            NodeKind::Table => "Table",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableData => "TableData",
            NodeKind::Title => "Title",
            NodeKind::TableOfContents => "TableOfContents",
            NodeKind::InvalidTag => "InvalidTag",
        }
    }

    /// Returns true if adjacent siblings of this kind fold into one node.
    pub fn merges_with_sibling(self) -> bool {
        matches!(self, NodeKind::Text)
    }

    /// Heading level, for headings.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            NodeKind::Heading(level) => Some(level),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Heading(level) => write!(f, "Heading({level})"),
            kind => f.write_str(kind.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_text_merges() {
        assert!(NodeKind::Text.merges_with_sibling());
        assert!(!NodeKind::ListItem.merges_with_sibling());
        assert!(!NodeKind::Bold.merges_with_sibling());
    }

    #[test]
    fn heading_displays_its_level() {
        assert_eq!(NodeKind::Heading(3).to_string(), "Heading(3)");
        assert_eq!(NodeKind::Heading(3).name(), "Heading");
        assert_eq!(NodeKind::TableOfContents.to_string(), "TableOfContents");
    }
}
