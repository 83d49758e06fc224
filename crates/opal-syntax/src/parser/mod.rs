//! # Parser - State Machine Over the Cursor
//!
//! A [`Parser`] is one parse session. It owns the three pieces of mutable
//! state a parse needs and nothing else:
//!
//! - the [`Cursor`], which turns the raw text into runes and keeps the frame
//! - the [`TreeBuilder`], holding the stack of open nodes
//! - the diagnostics collected so far
//!
//! ## Driving the Parse
//!
//! Top-level parsing is an explicit state machine ([`State`]). Each call to
//! [`State::step`] runs one grammar rule against the session and returns the
//! state to continue in, until [`State::Done`]:
//!
//! ```text
//! Begin ──`.`──▶ BlockTagHeader ──`/`──▶ BlockTagAttrs
//!   │                 │    │                  │
//!   │                 │    └──newline──▶ BlockBody ◀──newline──┘
//!   └──other──▶ Paragraph                     │
//!                     │                       │
//!   Begin ◀───────────┴───────────────────────┘
//! ```
//!
//! Text runs and inline tags are nested grammar routines: they return to
//! whichever rule called them rather than being states of their own.
//!
//! ## Errors
//!
//! Malformed markup never aborts a parse. Rules call [`Parser::fail`] or
//! [`Parser::report`] to record a [`Diagnostic`], attach whatever they built,
//! and fall back to `Begin`.
//!
//! ```
//! use opal_syntax::parse;
//!
//! let doc = parse("Foo `b bar` baz");
//! assert!(doc.diagnostics.is_empty());
//! assert_eq!(doc.root.children.len(), 1);
//! ```

mod grammar;
mod state;

pub use state::State;

use crate::builder::TreeBuilder;
use crate::cursor::{Cursor, Rune};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::node::Node;
use crate::options::ParseOptions;
use crate::position::Position;

/// The result of a parse: the tree and its diagnostics.
///
/// `root.errors` holds the same diagnostics rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub root: Node,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedDocument {
    pub fn into_parts(self) -> (Node, Vec<Diagnostic>) {
        (self.root, self.diagnostics)
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// A single parse session over one document.
pub struct Parser<'a> {
    cur: Cursor<'a>,
    tree: TreeBuilder,
    diagnostics: Vec<Diagnostic>,
    label: Option<String>,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str, options: &ParseOptions) -> Self {
        Self {
            cur: Cursor::new(text),
            tree: TreeBuilder::new(),
            diagnostics: vec![],
            label: options.source_label.clone(),
        }
    }

    /// Runs the state machine to completion.
    pub fn parse(mut self) -> ParsedDocument {
        let mut state = State::Begin;
        while state != State::Done {
            let next = state.step(&mut self);
            log::trace!("{state:?} -> {next:?} at {:?}", self.cur.position());
            state = next;
        }

        let errors = self.diagnostics.iter().map(ToString::to_string).collect();
        let root = self.tree.finish(errors);
        log::debug!(
            "parsed {} nodes with {} diagnostics",
            root.walk().count(),
            self.diagnostics.len()
        );
        ParsedDocument {
            root,
            diagnostics: self.diagnostics,
        }
    }

    /// Records a diagnostic at `at`.
    pub fn report(&mut self, kind: DiagnosticKind, at: Position) {
        let diagnostic = Diagnostic::new(kind, at, self.label.as_deref());
        log::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// Reports the current rune as unexpected.
    ///
    /// A char is consumed. A real terminator is left in place for the
    /// enclosing rule; the synthetic one and the end of input are reported
    /// as the end of the file.
    pub fn fail(&mut self) {
        let at = self.cur.position();
        let kind = match self.cur.current() {
            Rune::Char(c) => {
                self.cur.advance_flat();
                DiagnosticKind::UnexpectedCharacter(c)
            }
            Rune::Terminator if !self.cur.at_end_of_input() => {
                DiagnosticKind::UnexpectedTerminator
            }
            Rune::Terminator | Rune::EndOfInput => DiagnosticKind::UnexpectedEndOfInput,
        };
        self.report(kind, at);
    }

    /// Flattens the frame into a text child of the current node.
    fn flush_text(&mut self) {
        let (text, at) = self.cur.take_frame();
        self.tree.append_text(&text, at);
    }
}

/// Parses a complete document with default options.
pub fn parse(text: &str) -> ParsedDocument {
    parse_with_options(text, &ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: &ParseOptions) -> ParsedDocument {
    Parser::new(text, options).parse()
}
