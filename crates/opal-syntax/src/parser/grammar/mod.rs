//! # Grammar Rules
//!
//! Each rule takes the session (`&mut Parser`) and works through its parts:
//!
//! 1. Inspect the current rune (`p.cur.at()`, `p.cur.at_boundary()`, ...)
//! 2. Consume runes (`p.cur.advance()`, `p.cur.advance_flat()`, ...)
//! 3. Build structure (`p.tree.open()` → `append_text`/setters → `close()`)
//!
//! Top-level rules return the next [`State`]; nested rules (text runs,
//! inline tags) return nothing and leave the cursor on the rune that
//! stopped them.
//!
//! ## Module Structure
//!
//! - [`block`] - block tag header, attributes and bodies
//! - [`inline`] - text runs and inline tags
//!
//! ## Error Recovery
//!
//! Rules are lenient: report, attach the partial node, and hand control
//! back. Nothing here returns an error or panics.

pub(super) mod block;
mod inline;

use crate::kinds::BlockTag;
use crate::node_kind::NodeKind;
use crate::parser::{Parser, State};

/// Skips terminators and whitespace up to the next top-level element.
pub(super) fn begin(p: &mut Parser<'_>) -> State {
    while p.cur.at_terminator() || p.cur.at_whitespace() {
        p.cur.advance_flat();
    }
    if p.cur.at_end() {
        return State::Done;
    }

    let at = p.cur.position();
    if p.cur.at(BlockTag::OPEN) {
        p.tree.open(NodeKind::BlockTag, at);
        State::BlockTagHeader
    } else {
        p.tree.open(NodeKind::Paragraph, at);
        State::Paragraph
    }
}

/// Running text up to the next terminator.
pub(super) fn paragraph(p: &mut Parser<'_>) -> State {
    inline::text_until(p, inline::TEXT);
    p.tree.close();
    State::Begin
}
