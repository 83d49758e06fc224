use crate::position::Position;

/// The lexical unit the cursor is currently looking at.
///
/// Runs of whitespace are presented as a single `Char` holding the first
/// whitespace char of the run, unless the run forms a [`Rune::Terminator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rune {
    /// A single (possibly collapsed or escaped) character.
    Char(char),
    /// `;` or a whitespace run containing two or more newlines.
    Terminator,
    /// Nothing left to read. Further advances are no-ops.
    EndOfInput,
}

/// The set of runes [`Cursor::advance_until`] stops in front of.
///
/// Escaped runes never match a stop set.
#[derive(Debug, Clone, Copy)]
pub struct StopSet<'s> {
    chars: &'s [char],
    whitespace: bool,
    newline: bool,
}

impl StopSet<'static> {
    /// Stops only at a terminator or the end of input.
    pub const NONE: Self = Self {
        chars: &[],
        whitespace: false,
        newline: false,
    };
}

impl<'s> StopSet<'s> {
    pub const fn of(chars: &'s [char]) -> Self {
        Self {
            chars,
            whitespace: false,
            newline: false,
        }
    }

    /// Also stop at any whitespace boundary.
    pub const fn or_whitespace(self) -> Self {
        Self {
            whitespace: true,
            ..self
        }
    }

    /// Also stop at a whitespace boundary that contains a newline.
    pub const fn or_newline(self) -> Self {
        Self {
            newline: true,
            ..self
        }
    }
}

/// A rune-at-a-time scanner over a complete Opal document.
///
/// The cursor owns the scan position and the *frame*: the text consumed
/// since the last flatten. Advancing pushes the current rune into the
/// frame; flattening throws the frame away, so structural punctuation never
/// ends up in node values.
///
/// Lexical rules applied while loading each rune:
/// - `\x` presents `x` verbatim, flagged as escaped, for that one rune
/// - `;` is a terminator
/// - a whitespace run collapses to its first char, or to a terminator when
///   it holds two or more newlines
/// - a synthetic terminator follows the real end of input, once
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of the next unread char.
    next: usize,
    /// Location of the next unread char.
    next_pos: Position,
    current: Rune,
    /// Location of the first char of the current rune.
    pos: Position,
    escaped: bool,
    /// Newlines seen in the whitespace run presented as the current rune.
    run_newlines: usize,
    /// The current terminator is the one appended after the real input.
    synthetic: bool,
    synthetic_sent: bool,
    frame: String,
    frame_origin: Option<Position>,
}

impl<'a> Cursor<'a> {
    pub const TERMINATOR: char = ';';
    pub const ESCAPE: char = '\\';

    /// Creates a cursor positioned on the first rune of `src`.
    pub fn new(src: &'a str) -> Self {
        let mut cur = Self {
            src,
            next: 0,
            next_pos: Position::START,
            current: Rune::EndOfInput,
            pos: Position::START,
            escaped: false,
            run_newlines: 0,
            synthetic: false,
            synthetic_sent: false,
            frame: String::new(),
            frame_origin: None,
        };
        cur.load();
        cur
    }

    pub fn current(&self) -> Rune {
        self.current
    }

    /// Location of the current rune.
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// Text consumed since the last flatten.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// The current char, if it is an unescaped one.
    fn plain(&self) -> Option<char> {
        match self.current {
            Rune::Char(c) if !self.escaped => Some(c),
            _ => None,
        }
    }

    /// Returns true if the current rune is the unescaped char `c`.
    pub fn at(&self, c: char) -> bool {
        self.plain() == Some(c)
    }

    /// Returns true at an unescaped whitespace boundary.
    pub fn at_whitespace(&self) -> bool {
        self.plain().is_some_and(char::is_whitespace)
    }

    /// Returns true at a whitespace boundary whose run held a single newline.
    pub fn at_newline(&self) -> bool {
        self.at_whitespace() && self.run_newlines > 0
    }

    pub fn at_terminator(&self) -> bool {
        self.current == Rune::Terminator
    }

    pub fn at_end(&self) -> bool {
        self.current == Rune::EndOfInput
    }

    /// Returns true at a terminator or the end of input.
    pub fn at_boundary(&self) -> bool {
        matches!(self.current, Rune::Terminator | Rune::EndOfInput)
    }

    /// Returns true once the real input is exhausted, including while the
    /// synthetic terminator is current.
    pub fn at_end_of_input(&self) -> bool {
        self.at_end() || (self.at_terminator() && self.synthetic)
    }

    /// Returns true if the current rune is in `stops`.
    pub fn at_stop(&self, stops: StopSet<'_>) -> bool {
        match self.plain() {
            Some(c) if c.is_whitespace() => {
                stops.whitespace
                    || (stops.newline && self.run_newlines > 0)
                    || stops.chars.contains(&c)
            }
            Some(c) => stops.chars.contains(&c),
            None => false,
        }
    }

    /// Consumes the current rune into the frame and loads the next one.
    pub fn advance(&mut self) {
        match self.current {
            Rune::EndOfInput => return,
            Rune::Char(c) => self.push_frame(c),
            Rune::Terminator => {}
        }
        self.load();
    }

    /// Advances, then flattens: the consumed rune is structure, not content.
    pub fn advance_flat(&mut self) {
        self.advance();
        self.flatten();
    }

    /// Advances until a terminator, the end of input, or a rune in `stops`
    /// is current. The stopping rune is not consumed.
    pub fn advance_until(&mut self, stops: StopSet<'_>) {
        while !self.at_boundary() && !self.at_stop(stops) {
            self.advance();
        }
    }

    /// Skips one whitespace boundary, if present.
    pub fn skip_whitespace(&mut self) -> bool {
        if self.at_whitespace() {
            self.advance_flat();
            true
        } else {
            false
        }
    }

    /// Skips one whitespace boundary that stays on the current line.
    pub fn skip_inline_whitespace(&mut self) -> bool {
        if self.at_whitespace() && self.run_newlines == 0 {
            self.advance_flat();
            true
        } else {
            false
        }
    }

    /// Advances over letters and digits.
    ///
    /// Returns false if the scan ran into a terminator or the end of input.
    pub fn scan_keyword(&mut self) -> bool {
        while self.plain().is_some_and(char::is_alphanumeric) {
            self.advance();
        }
        !self.at_boundary()
    }

    /// Discards the frame.
    pub fn flatten(&mut self) {
        self.frame.clear();
        self.frame_origin = None;
    }

    /// Flattens, returning the frame text and the location of its first
    /// non-whitespace rune (the current location for a blank frame).
    pub fn take_frame(&mut self) -> (String, Position) {
        let origin = self.frame_origin.take().unwrap_or(self.pos);
        (std::mem::take(&mut self.frame), origin)
    }

    fn push_frame(&mut self, c: char) {
        if self.frame_origin.is_none() && (self.escaped || !c.is_whitespace()) {
            self.frame_origin = Some(self.pos);
        }
        self.frame.push(c);
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.next..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.next += c.len_utf8();
        self.next_pos = self.next_pos.after(c);
        Some(c)
    }

    fn load(&mut self) {
        self.escaped = false;
        self.synthetic = false;
        self.run_newlines = 0;
        self.pos = self.next_pos;

        let Some(c) = self.bump() else {
            self.current = self.end_rune();
            return;
        };

        self.current = match c {
            Self::ESCAPE => {
                self.escaped = true;
                // A lone trailing backslash stands for itself.
                Rune::Char(self.bump().unwrap_or(Self::ESCAPE))
            }
            Self::TERMINATOR => Rune::Terminator,
            c if c.is_whitespace() => self.collapse_whitespace(c),
            c => Rune::Char(c),
        };
    }

    fn collapse_whitespace(&mut self, first: char) -> Rune {
        let mut newlines = usize::from(first == '\n');
        while let Some(c) = self.peek_char().filter(|c| c.is_whitespace()) {
            self.bump();
            if c == '\n' {
                newlines += 1;
            }
        }

        // Trailing whitespace is swallowed by the synthetic terminator.
        if self.peek_char().is_none() && !self.synthetic_sent {
            return self.end_rune();
        }
        if newlines >= 2 {
            return Rune::Terminator;
        }
        self.run_newlines = newlines;
        Rune::Char(first)
    }

    fn end_rune(&mut self) -> Rune {
        if self.synthetic_sent {
            Rune::EndOfInput
        } else {
            self.synthetic_sent = true;
            self.synthetic = true;
            Rune::Terminator
        }
    }
}
