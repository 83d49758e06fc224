/// A 1-based line/column location in the source text.
///
/// Columns count chars, not bytes. `Position::default()` (0, 0) marks a
/// node whose location is not tracked, which is only ever the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl Position {
    /// The position of the first char of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position following `c`.
    #[must_use]
    pub fn after(self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }

    /// Returns true for the untracked (0, 0) position.
    #[must_use]
    pub fn is_untracked(self) -> bool {
        self.line == 0 && self.column == 0
    }
}
