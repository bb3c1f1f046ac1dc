//! Resumable sub-scanners and character classes.
//!
//! Strings and block comments may run past the end of a line. Instead of
//! swapping scanning functions in and out, the open construct is recorded as
//! a [`SubScanner`] value that the caller stores in its per-line state and
//! hands back on the next line. A scanner reports [`ScanOutcome::Open`] when
//! the line ran out first, and [`ScanOutcome::Closed`] once its closing
//! delimiter has been consumed.
//!
//! Nothing but the delimiter survives a line break: the escape flag of a
//! string and the pending `*` of a comment both reset per invocation.

use crate::category::Category;
use crate::stream::CharStream;

/// Returns `true` for characters that continue a bare word.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Returns `true` for the structurally significant single-character tokens.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '[' | ']' | '{' | '}' | '(' | ')' | ',' | ';' | ':' | '.')
}

/// Whether a sub-scanner found its closing delimiter on this line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The closing delimiter was consumed.
    Closed,
    /// The line ended first; resume on the next line.
    Open,
}

/// A multi-line construct that is still open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubScanner {
    /// Quoted literal, closed only by its own opening quote.
    String { quote: char },
    /// `/* ... */` comment.
    BlockComment,
}

impl SubScanner {
    /// Category of everything this scanner consumes.
    pub const fn category(self) -> Category {
        match self {
            SubScanner::String { .. } => Category::String,
            SubScanner::BlockComment => Category::Comment,
        }
    }

    /// Continue scanning on `stream`.
    pub fn scan<S: CharStream>(self, stream: &mut S) -> ScanOutcome {
        match self {
            SubScanner::String { quote } => scan_string(stream, quote),
            SubScanner::BlockComment => scan_block_comment(stream),
        }
    }
}

/// Consume string content up to and including an unescaped `quote`.
///
/// A backslash escapes the next character only, so `\\` followed by the
/// quote still terminates.
pub fn scan_string<S: CharStream>(stream: &mut S, quote: char) -> ScanOutcome {
    let mut escaped = false;
    while let Some(c) = stream.advance() {
        if c == quote && !escaped {
            return ScanOutcome::Closed;
        }
        escaped = !escaped && c == '\\';
    }
    ScanOutcome::Open
}

/// Consume comment content up to and including `*/`.
pub fn scan_block_comment<S: CharStream>(stream: &mut S) -> ScanOutcome {
    while stream.skip_to('*') {
        stream.advance(); // consume '*'
        if stream.eat('/') {
            return ScanOutcome::Closed;
        }
    }
    stream.skip_to_end();
    ScanOutcome::Open
}
