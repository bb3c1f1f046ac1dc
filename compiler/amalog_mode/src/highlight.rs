//! Whole-line and whole-document highlighting.
//!
//! A host that renders lines lazily calls [`Mode::token`](crate::Mode::token)
//! itself. These helpers run the same loop eagerly, which is what batch tools
//! (the CLI, tests, folding) want.

use amalog_lexer_core::Category;

use crate::fold::{brace_range, FoldRange};
use crate::mode::Mode;
use crate::state::ScannerState;

/// One classified span of a line, as byte offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// The text this token covers in `line`.
    pub fn text<'l>(&self, line: &'l str) -> &'l str {
        &line[self.start..self.end]
    }
}

/// Tokens of one line and the state the next line starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub state: ScannerState,
}

/// A highlighted line of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightedLine<'a> {
    pub text: &'a str,
    pub tokens: Vec<Token>,
    /// State at the end of this line.
    pub end_state: ScannerState,
}

impl HighlightedLine<'_> {
    /// Tokens paired with their text.
    pub fn spans(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        self.tokens.iter().map(|t| (t.category, t.text(self.text)))
    }
}

/// Highlighting of every line of a document.
#[derive(Clone, Debug)]
pub struct DocumentHighlight<'a> {
    start_state: ScannerState,
    lines: Vec<HighlightedLine<'a>>,
}

impl<'a> DocumentHighlight<'a> {
    pub fn lines(&self) -> &[HighlightedLine<'a>] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&HighlightedLine<'a>> {
        self.lines.get(index)
    }

    /// State in effect at the start of line `index`, i.e. the snapshot to
    /// resume from when re-highlighting after an edit on that line.
    pub fn state_before(&self, index: usize) -> Option<&ScannerState> {
        match index {
            0 => Some(&self.start_state),
            i => self.lines.get(i - 1).map(|line| &line.end_state),
        }
    }

    /// Suggested column for a new line inserted after line `index`.
    pub fn indent_after(&self, mode: &Mode, index: usize, text_after: &str) -> Option<u32> {
        let line = self.lines.get(index)?;
        mode.indent(&line.end_state, text_after)
    }

    /// Brace fold starting on line `index`.
    pub fn fold_at(&self, index: usize) -> Option<FoldRange> {
        brace_range(&self.lines, index)
    }
}

/// Highlight every line of `text`, threading state from line to line.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn highlight_document<'a>(mode: &Mode, text: &'a str) -> DocumentHighlight<'a> {
    let start_state = mode.start_state(0);
    let mut state = start_state.clone();
    let mut lines = Vec::new();
    for line in text.lines() {
        let LineTokens { tokens, state: end } = mode.tokenize_line(line, &state);
        state = end.clone();
        lines.push(HighlightedLine {
            text: line,
            tokens,
            end_state: end,
        });
    }
    tracing::debug!(lines = lines.len(), open = ?state.sub_scanner(), "highlighted document");
    DocumentHighlight { start_state, lines }
}
