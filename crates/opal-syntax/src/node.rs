//! The Opal syntax tree.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::kinds::{List, Table};
use crate::node_kind::NodeKind;
use crate::position::Position;

/// A node of the document tree.
///
/// Children are owned exclusively by their parent; the tree never shares
/// nodes. `errors` is only ever filled on the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Trimmed text content, internal newlines folded to spaces.
    pub value: String,
    pub attrs: Vec<String>,
    /// Hyperlink label.
    pub display_text: String,
    /// Hyperlink target.
    pub url: String,
    pub line: usize,
    pub column: usize,
    pub children: Vec<Node>,
    pub errors: Vec<String>,
}

impl Node {
    pub fn new(kind: NodeKind, at: Position) -> Self {
        Self {
            kind,
            value: String::new(),
            attrs: Vec::new(),
            display_text: String::new(),
            url: String::new(),
            line: at.line,
            column: at.column,
            children: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// An empty document root.
    pub fn root() -> Self {
        Self::new(NodeKind::Root, Position::default())
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Heading level, for headings.
    pub fn level(&self) -> Option<u8> {
        self.kind.heading_level()
    }

    /// Returns true for a list marked `/n` or `/number`.
    pub fn is_ordered_list(&self) -> bool {
        self.kind == NodeKind::List && self.has_attr(&List::ORDERED_ATTRS)
    }

    /// Returns true for a table marked `/h`.
    pub fn has_header_row(&self) -> bool {
        self.kind == NodeKind::Table && self.has_attr(&[Table::HEADER_ATTR])
    }

    fn has_attr(&self, names: &[&str]) -> bool {
        self.attrs
            .iter()
            .any(|attr| names.iter().any(|name| attr.eq_ignore_ascii_case(name)))
    }

    /// Iterates over this node and all its descendants, depth first, parents
    /// before children.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`Node::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.kind.name())?;
        if let Some(level) = self.level() {
            map.serialize_entry("level", &level.to_string())?;
        }
        if !self.errors.is_empty() {
            map.serialize_entry("errors", &self.errors)?;
        }
        if !self.value.is_empty() {
            map.serialize_entry("value", &self.value)?;
        }
        if !self.attrs.is_empty() {
            map.serialize_entry("attrs", &self.attrs)?;
        }
        if !self.display_text.is_empty() {
            map.serialize_entry("displayText", &self.display_text)?;
        }
        if !self.url.is_empty() {
            map.serialize_entry("url", &self.url)?;
        }
        if self.line != 0 {
            map.serialize_entry("line", &self.line)?;
        }
        if self.column != 0 {
            map.serialize_entry("column", &self.column)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry("children", &self.children)?;
        }
        map.end()
    }
}
