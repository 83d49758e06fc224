//! Markup punctuation, owned by the construct that uses it.

use crate::builder::normalize;

/// `.keyword[/attr]*[: text | \n body]`
pub struct BlockTag;

impl BlockTag {
    pub const OPEN: char = '.';
    pub const ONE_LINE: char = ':';
    pub const ATTR: char = '/';
}

/// `` `keyword text` ``
pub struct InlineTag;

impl InlineTag {
    pub const GRAVE: char = '`';
}

/// List body: each line starting with `-` opens an item.
pub struct List;

impl List {
    pub const ITEM: char = '-';
    /// Attribute values marking a numbered list.
    pub const ORDERED_ATTRS: [&'static str; 2] = ["n", "number"];
}

/// Table body: lines are rows, `|` separates cells.
pub struct Table;

impl Table {
    pub const CELL: char = '|';
    /// Attribute value marking the first row as a header.
    pub const HEADER_ATTR: &'static str = "h";
}

/// `` `l display url` ``
pub struct Hyperlink;

impl Hyperlink {
    /// Display text meaning "show the URL itself".
    pub const SELF_LABEL: &'static str = "_";

    /// Splits raw link text at the byte offset `boundary` into
    /// `(display, url)`, normalizing both parts.
    ///
    /// Returns `None` when either part is blank.
    pub fn split(raw: &str, boundary: usize) -> Option<(String, String)> {
        let (display, url) = raw.split_at_checked(boundary)?;
        let (display, url) = (normalize(display), normalize(url));
        if display.is_empty() || url.is_empty() {
            return None;
        }
        let display = if display == Self::SELF_LABEL {
            url.clone()
        } else {
            display
        };
        Some((display, url))
    }
}
