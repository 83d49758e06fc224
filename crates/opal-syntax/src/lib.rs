//! # opal-syntax
//!
//! A parser for Opal, a small line- and rune-oriented markup language,
//! producing a typed and positioned syntax tree for renderers to consume.
//!
//! ## The Language
//!
//! ```text
//! .title: Field notes                  block tag, one-line text
//! .list/n                              block tag with an attribute and a body
//! - first `b bold` point               inline tag inside a list item
//! - `l docs example.com`               hyperlink: display text, then URL
//! ;                                    terminator (so is a blank line)
//! Plain text is a paragraph. A \; is literal.
//! ```
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Cursor → Runes → Parser (state machine) → TreeBuilder → Node
//!                                    │
//!                                    └─▶ TagResolver, Diagnostics
//! ```
//!
//! ### 1. Cursor ([`cursor`] module)
//!
//! Presents the text one rune at a time: whitespace runs collapse to one
//! boundary, `;` and blank lines become terminators, and `\` makes the next
//! char literal. Consumed text accumulates in the *frame* until the parser
//! flattens it into a node value or throws it away as punctuation.
//!
//! ### 2. Parser ([`parser`] module)
//!
//! An explicit state machine over the cursor. Grammar rules classify tag
//! keywords with [`TagResolver`] and build nodes through [`TreeBuilder`].
//! Malformed markup is recorded as a [`Diagnostic`] and skipped; a parse
//! never fails.
//!
//! ### 3. Tree ([`node`] module)
//!
//! [`Node`] is a plain owned tree. It serializes with serde to the JSON
//! shape renderers expect, omitting empty fields.
//!
//! ## Module Structure
//!
//! ```text
//! opal-syntax/
//! ├── lib.rs           # This file - public API and snapshot tests
//! ├── position.rs      # Line/column positions
//! ├── cursor.rs        # Rune scanner, frame, stop sets
//! ├── kinds.rs         # Markup punctuation per construct
//! ├── node_kind.rs     # NodeKind enum
//! ├── node.rs          # Node, pre-order walk, serialization
//! ├── tags.rs          # Keyword → NodeKind
//! ├── builder.rs       # Open-node stack, text merging
//! ├── diagnostic.rs    # Diagnostic kinds and messages
//! ├── options.rs       # ParseOptions
//! └── parser/
//!     ├── mod.rs       # Parser session, parse() entry points
//!     ├── state.rs     # State enum and step()
//!     └── grammar/
//!         ├── mod.rs   # Begin and paragraphs
//!         ├── block.rs # Block tag header, attributes, bodies
//!         └── inline.rs# Text runs, inline tags, hyperlinks
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use opal_syntax::{NodeKind, parse};
//!
//! let doc = parse(".1: Hello\n\nSome `b bold` text.");
//! assert!(doc.diagnostics.is_empty());
//!
//! let heading = &doc.root.children[0];
//! assert_eq!(heading.kind, NodeKind::Heading(1));
//! assert_eq!(heading.children[0].value, "Hello");
//!
//! let paragraph = &doc.root.children[1];
//! assert_eq!(paragraph.children[1].kind, NodeKind::Bold);
//! ```

pub mod builder;
pub mod cursor;
pub mod diagnostic;
pub mod kinds;
pub mod node;
pub mod node_kind;
pub mod options;
pub mod parser;
pub mod position;
pub mod tags;

pub use builder::TreeBuilder;
pub use cursor::{Cursor, Rune, StopSet};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use node::Node;
pub use node_kind::NodeKind;
pub use options::ParseOptions;
pub use parser::{ParsedDocument, Parser, State, parse, parse_with_options};
pub use position::Position;
pub use tags::TagResolver;
