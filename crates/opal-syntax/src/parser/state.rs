use super::Parser;
use super::grammar::{self, block};

/// Top-level parse states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between top-level elements
    Begin,
    /// On the `.` of a block tag
    BlockTagHeader,
    /// On the first `/` after a block tag keyword
    BlockTagAttrs,
    /// At the first rune of a multi-line block tag body
    BlockBody,
    /// Inside running text
    Paragraph,
    Done,
}

impl State {
    /// Runs the rule for this state and returns the next state.
    pub fn step(self, p: &mut Parser<'_>) -> State {
        match self {
            State::Begin => grammar::begin(p),
            State::BlockTagHeader => block::header(p),
            State::BlockTagAttrs => block::attrs(p),
            State::BlockBody => block::body(p),
            State::Paragraph => grammar::paragraph(p),
            State::Done => State::Done,
        }
    }
}
