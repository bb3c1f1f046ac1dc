//! One-line character cursor.
//!
//! The editor mode never owns the text it classifies. A host hands it a
//! cursor over a single line (without its terminator) and the mode advances
//! that cursor one token at a time. [`CharStream`] is the interface the mode
//! consumes; [`LineStream`] is the implementation used by this workspace's
//! own drivers and tests.
//!
//! # Token Boundaries
//!
//! A stream tracks two offsets: `start`, the first byte of the token being
//! scanned, and `pos`, the read position. The driver calls
//! [`start_token()`](CharStream::start_token) before each token so that
//! [`current()`](CharStream::current) and [`column()`](CharStream::column)
//! describe the token in progress.

/// Tab stop width used when the host does not configure one.
pub const DEFAULT_TAB_SIZE: u32 = 4;

/// Visual width of `text`, expanding tabs to the next multiple of `tab_size`.
///
/// A `tab_size` of zero is treated as one.
pub fn count_column(text: &str, tab_size: u32) -> u32 {
    advance_column(0, text, tab_size.max(1))
}

/// Column reached by reading `text` starting at `column`.
fn advance_column(mut column: u32, text: &str, tab_size: u32) -> u32 {
    for c in text.chars() {
        if c == '\t' {
            column += tab_size - (column % tab_size);
        } else {
            column += 1;
        }
    }
    column
}

/// Cursor over one line of source text.
///
/// All offsets are byte offsets into the line; every method keeps them on
/// UTF-8 character boundaries.
pub trait CharStream {
    /// Returns `true` when the read position is at the start of the line.
    fn sol(&self) -> bool;

    /// Returns `true` when the read position is at the end of the line.
    fn eol(&self) -> bool;

    /// Returns the character at the read position without consuming it.
    fn peek(&self) -> Option<char>;

    /// Consume and return the character at the read position.
    fn advance(&mut self) -> Option<char>;

    /// Consume the next character if it equals `ch`.
    fn eat(&mut self, ch: char) -> bool;

    /// Consume characters while `pred` holds. Returns `true` if any were eaten.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool;

    /// Consume whitespace. Returns `true` if any was eaten.
    fn eat_space(&mut self) -> bool;

    /// Move the read position to the end of the line.
    fn skip_to_end(&mut self);

    /// Move the read position to the next occurrence of `ch`, leaving it
    /// unconsumed. Returns `false` (and does not move) if `ch` does not occur
    /// in the rest of the line.
    fn skip_to(&mut self, ch: char) -> bool;

    /// Visual column of the current token's first character.
    fn column(&self) -> u32;

    /// Visual column of the line's first non-whitespace character.
    fn indentation(&self) -> u32;

    /// Text of the token in progress (`start..pos`).
    fn current(&self) -> &str;

    /// Mark the read position as the start of the next token.
    fn start_token(&mut self);

    /// Current byte offset in the line.
    fn pos(&self) -> usize;
}

/// [`CharStream`] over a borrowed line.
///
/// The stream is [`Copy`], so a driver can snapshot it cheaply.
///
/// The column of the token start is carried forward by
/// [`start_token()`](CharStream::start_token), so measuring columns costs
/// one pass over the line rather than one pass per token.
#[derive(Clone, Copy, Debug)]
pub struct LineStream<'a> {
    line: &'a str,
    pos: usize,
    start: usize,
    /// Visual column of `start`.
    start_column: u32,
    tab_size: u32,
}

impl<'a> LineStream<'a> {
    /// Create a stream at the start of `line`.
    pub fn new(line: &'a str, tab_size: u32) -> Self {
        Self::at(line, 0, tab_size)
    }

    /// Create a stream positioned at byte offset `pos`.
    ///
    /// # Contract
    ///
    /// `pos` must lie on a character boundary of `line`. Offsets past the end
    /// are clamped to the end of the line.
    pub fn at(line: &'a str, pos: usize, tab_size: u32) -> Self {
        let pos = pos.min(line.len());
        debug_assert!(line.is_char_boundary(pos), "offset {pos} splits a character");
        let tab_size = tab_size.max(1);
        Self {
            line,
            pos,
            start: pos,
            start_column: advance_column(0, &line[..pos], tab_size),
            tab_size,
        }
    }

    /// Text of the token in progress, borrowed for the line's lifetime.
    pub fn lexeme(&self) -> &'a str {
        &self.line[self.start..self.pos]
    }

    /// Unread remainder of the line.
    #[inline]
    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }
}

impl CharStream for LineStream<'_> {
    #[inline]
    fn sol(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let begin = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos > begin
    }

    fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "only taken for ASCII characters, which fit in one byte"
    )]
    fn skip_to(&mut self, ch: char) -> bool {
        let rest = self.rest();
        let found = if ch.is_ascii() {
            // ASCII bytes never occur inside multi-byte sequences, so the
            // byte offset is always a character boundary.
            memchr::memchr(ch as u8, rest.as_bytes())
        } else {
            rest.find(ch)
        };
        match found {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => false,
        }
    }

    #[inline]
    fn column(&self) -> u32 {
        self.start_column
    }

    fn indentation(&self) -> u32 {
        let trimmed = self.line.trim_start();
        count_column(&self.line[..self.line.len() - trimmed.len()], self.tab_size)
    }

    fn current(&self) -> &str {
        self.lexeme()
    }

    fn start_token(&mut self) {
        // The read position never moves backwards.
        self.start_column = advance_column(
            self.start_column,
            &self.line[self.start..self.pos],
            self.tab_size,
        );
        self.start = self.pos;
    }

    fn pos(&self) -> usize {
        self.pos
    }
}
