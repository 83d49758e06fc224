//! Block tag grammar: `.keyword[/attr]*[: text | \n body]`.

use crate::cursor::StopSet;
use crate::diagnostic::DiagnosticKind;
use crate::kinds::{BlockTag, InlineTag, List, Table};
use crate::node_kind::NodeKind;
use crate::parser::{Parser, State};
use crate::tags::TagResolver;

use super::inline;

/// List item text runs to the end of its line.
const ITEM_TEXT: StopSet<'static> = StopSet::of(&[InlineTag::GRAVE]).or_newline();

/// Table cell text runs to the next `|` or the end of its row.
const CELL_TEXT: StopSet<'static> =
    StopSet::of(&[InlineTag::GRAVE, Table::CELL]).or_newline();

/// Parses the keyword of a block tag, starting on its `.`.
pub(crate) fn header(p: &mut Parser<'_>) -> State {
    p.cur.advance_flat();

    let keyword_at = p.cur.position();
    p.cur.scan_keyword();
    let (keyword, _) = p.cur.take_frame();
    match TagResolver::classify(&keyword) {
        Ok(kind) => p.tree.retype(kind),
        Err(DiagnosticKind::EmptyTagName) => {
            p.tree.retype(NodeKind::InvalidTag);
            p.report(DiagnosticKind::EmptyTagName, keyword_at);
            if !p.cur.at_boundary() {
                p.cur.advance_flat();
            }
            p.tree.close();
            return State::Begin;
        }
        Err(kind) => {
            p.tree.retype(NodeKind::InvalidTag);
            p.report(kind, keyword_at);
        }
    }

    p.cur.skip_inline_whitespace();
    if p.cur.at(BlockTag::ATTR) {
        return State::BlockTagAttrs;
    }
    tail(p)
}

/// Collects `/attr` tokens, starting on the first `/`.
pub(crate) fn attrs(p: &mut Parser<'_>) -> State {
    while p.cur.at(BlockTag::ATTR) {
        p.cur.advance_flat();
        p.cur.scan_keyword();
        let (attr, _) = p.cur.take_frame();
        if !attr.is_empty() {
            p.tree.push_attr(attr);
        }
    }
    p.cur.skip_inline_whitespace();
    tail(p)
}

/// Whatever follows the keyword and attributes: a one-line text, a body,
/// or nothing at all (`.toc`).
fn tail(p: &mut Parser<'_>) -> State {
    if p.cur.at(BlockTag::ONE_LINE) {
        p.cur.advance_flat();
        inline::text_until(p, inline::TEXT);
        p.tree.close();
        return State::Begin;
    }
    if p.cur.at_newline() {
        p.cur.advance_flat();
        return State::BlockBody;
    }
    if !p.cur.at_boundary() {
        p.fail();
    }
    p.tree.close();
    State::Begin
}

/// Parses a multi-line body according to the tag's kind.
pub(crate) fn body(p: &mut Parser<'_>) -> State {
    match p.tree.current_kind() {
        NodeKind::List => list_body(p),
        NodeKind::Table => table_body(p),
        _ => inline::text_until(p, inline::TEXT),
    }
    p.tree.close();
    State::Begin
}

/// One `ListItem` per line starting with `-`; other lines continue the
/// current item.
fn list_body(p: &mut Parser<'_>) {
    p.tree.open(NodeKind::ListItem, p.cur.position());
    if p.cur.at(List::ITEM) {
        p.cur.advance_flat();
    }

    loop {
        inline::text_until(p, ITEM_TEXT);
        if !p.cur.at_newline() {
            break;
        }
        p.cur.advance_flat();
        if p.cur.at(List::ITEM) {
            p.tree.close_if_nonempty();
            p.tree.open(NodeKind::ListItem, p.cur.position());
            p.cur.advance_flat();
        }
    }
    p.tree.close_if_nonempty();
}

/// One `TableRow` per line, one `TableData` per `|`-separated cell.
fn table_body(p: &mut Parser<'_>) {
    p.tree.open(NodeKind::TableRow, p.cur.position());
    p.tree.open(NodeKind::TableData, p.cur.position());

    loop {
        inline::text_until(p, CELL_TEXT);
        if p.cur.at(Table::CELL) {
            p.tree.close_if_nonempty();
            p.cur.advance_flat();
            p.cur.skip_inline_whitespace();
            p.tree.open(NodeKind::TableData, p.cur.position());
        } else if p.cur.at_newline() {
            p.tree.close_if_nonempty();
            p.tree.close_if_nonempty();
            p.cur.advance_flat();
            p.tree.open(NodeKind::TableRow, p.cur.position());
            p.tree.open(NodeKind::TableData, p.cur.position());
        } else {
            break;
        }
    }
    p.tree.close_if_nonempty();
    p.tree.close_if_nonempty();
}
