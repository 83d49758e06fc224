//! # Inline-Level Grammar
//!
//! Running text is scanned with [`text_until`], which flushes every run it
//! passes into a `Text` child and hands each `` ` `` to [`inline_tag`].
//!
//! ## Inline Tags
//!
//! `` `keyword text` ``: the keyword and the text are separated by one
//! whitespace boundary and must both be present. Failures keep the node:
//!
//! | Input | Diagnostic | Value |
//! |-------|------------|-------|
//! | ``` `` ``` | no tag name | - |
//! | `` `zz text` `` | invalid tag name | `text` |
//! | `` `b` `` | unexpected character `` ` `` | - |
//! | `` `b ` `` | no tag content | - |
//! | `` `b text`` then `;` | unexpected terminator | `text` |
//!
//! ## Hyperlinks
//!
//! For `l`, the text splits at its last unescaped whitespace boundary into
//! display text and URL; `_` as display text repeats the URL. `\ ` keeps a
//! space inside either part.

use crate::builder::normalize;
use crate::cursor::StopSet;
use crate::diagnostic::DiagnosticKind;
use crate::kinds::{Hyperlink, InlineTag};
use crate::node_kind::NodeKind;
use crate::parser::Parser;
use crate::position::Position;
use crate::tags::TagResolver;

/// Plain running text: only inline tags interrupt it.
pub(super) const TEXT: StopSet<'static> = StopSet::of(&[InlineTag::GRAVE]);

/// Tag text, one word at a time.
const TAG_WORD: StopSet<'static> = StopSet::of(&[InlineTag::GRAVE]).or_whitespace();

/// Scans text and inline tags into the current node until a terminator,
/// the end of input, or a rune in `stops`. `stops` must contain the grave.
pub(super) fn text_until(p: &mut Parser<'_>, stops: StopSet<'_>) {
    loop {
        p.cur.advance_until(stops);
        p.flush_text();
        if !p.cur.at(InlineTag::GRAVE) {
            return;
        }
        inline_tag(p);
    }
}

/// Parses one inline tag, starting on its opening grave.
fn inline_tag(p: &mut Parser<'_>) {
    let at = p.cur.position();
    p.tree.open(NodeKind::InlineTag, at);

    p.cur.advance_flat();
    p.cur.skip_whitespace();

    let keyword_at = p.cur.position();
    p.cur.advance_until(TAG_WORD);
    let (keyword, _) = p.cur.take_frame();
    match TagResolver::classify(&keyword) {
        Ok(kind) => p.tree.retype(kind),
        Err(DiagnosticKind::EmptyTagName) => {
            p.tree.retype(NodeKind::InvalidTag);
            p.report(DiagnosticKind::EmptyTagName, keyword_at);
            if p.cur.at(InlineTag::GRAVE) {
                p.cur.advance_flat();
            }
            p.tree.close();
            return;
        }
        Err(kind) => {
            p.tree.retype(NodeKind::InvalidTag);
            p.report(kind, keyword_at);
        }
    }

    // `b` directly followed by the grave, or cut off
    if !p.cur.at_whitespace() {
        p.fail();
        p.tree.close();
        return;
    }
    p.cur.advance_flat();

    // frame offsets of the whitespace boundaries between words
    let mut boundaries = vec![];
    loop {
        p.cur.advance_until(TAG_WORD);
        if !p.cur.at_whitespace() {
            break;
        }
        boundaries.push(p.cur.frame().len());
        p.cur.advance();
    }
    let (raw, _) = p.cur.take_frame();
    if p.cur.at_boundary() {
        p.tree.set_value(&raw);
        p.fail();
        p.tree.close();
        return;
    }

    let text = normalize(&raw);
    if text.is_empty() {
        p.report(DiagnosticKind::EmptyTagContent, p.cur.position());
    } else if p.tree.current_kind() == NodeKind::Hyperlink {
        hyperlink(p, &raw, &boundaries, text, at);
    } else {
        p.tree.set_value(&text);
    }

    p.cur.advance_flat();
    p.tree.close();
}

fn hyperlink(p: &mut Parser<'_>, raw: &str, boundaries: &[usize], text: String, at: Position) {
    let split = boundaries
        .iter()
        .rev()
        .find_map(|&boundary| Hyperlink::split(raw, boundary));
    match split {
        Some((display_text, url)) => p.tree.set_display_url(display_text, url),
        None => {
            p.report(DiagnosticKind::MissingUrl, at);
            p.tree.set_display_url(String::new(), text);
        }
    }
}
