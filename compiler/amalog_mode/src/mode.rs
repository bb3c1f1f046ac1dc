//! Token classifier and indentation.
//!
//! [`Mode::token`] is the host-facing entry point: it consumes one token from
//! a [`CharStream`] and updates the [`ScannerState`] in place. Dispatch
//! order for a fresh token:
//!
//! 1. a pending string or block comment resumes first;
//! 2. whitespace is one unstyled token;
//! 3. quotes open a string, `/*` a block comment, `//` a line comment;
//! 4. structural punctuation is consumed alone;
//! 5. a digit starts a run of digits and dots;
//! 6. anything else takes the following word characters and is classified
//!    by [`classify_word`].
//!
//! Every significant token then updates the context stack; comments do not.

use amalog_lexer_core::{
    is_punctuation, is_word_char, Category, CharStream, LineStream, ScanOutcome, SubScanner,
};
use tracing::{debug, trace};

use crate::config::{ConfigError, IndentStyle, ModeConfig};
use crate::context::ContextKind;
use crate::highlight::{LineTokens, Token};
use crate::language::{LanguageInfo, AMALOG};
use crate::state::ScannerState;
use crate::words::classify_word;

/// Result of tokenizing one token with [`Mode::tokenize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<'l> {
    pub category: Category,
    /// The consumed text. Empty only when `pos` is already at the end of
    /// the line.
    pub text: &'l str,
    /// Byte offset just past the token.
    pub end: usize,
    /// State after the token.
    pub state: ScannerState,
}

/// The Amalog editor mode.
#[derive(Clone, Debug, Default)]
pub struct Mode {
    config: ModeConfig,
}

impl Mode {
    /// Create a mode, rejecting an unusable configuration.
    pub fn new(config: ModeConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            debug!(%err, "rejected mode configuration");
            return Err(err);
        }
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    /// Static metadata for the language this mode highlights.
    pub fn language(&self) -> &'static LanguageInfo {
        &AMALOG
    }

    /// State for the first line of a document rooted at `base_column`.
    pub fn start_state(&self, base_column: u32) -> ScannerState {
        ScannerState::new(base_column)
    }

    /// A [`LineStream`] over `line` using the configured tab size.
    pub fn stream<'l>(&self, line: &'l str) -> LineStream<'l> {
        LineStream::new(line, self.config.tab_size)
    }

    /// Consume one token from `stream` and return its category.
    ///
    /// Advances `stream` by at least one character unless it is already at
    /// the end of the line.
    pub fn token<S: CharStream>(&self, stream: &mut S, state: &mut ScannerState) -> Category {
        if stream.sol() {
            if state.context.top().align.is_none() {
                state.context.update_top(|ctx| ctx.align = Some(false));
            }
            state.indented = stream.indentation();
            state.start_of_line = true;
        }
        if stream.eol() {
            state.indented = stream.indentation();
            return Category::None;
        }

        let (category, punct) = if let Some(sub) = state.sub_scanner {
            (resume(sub, stream, state), None)
        } else if stream.eat_space() {
            return Category::None;
        } else {
            self.classify(stream, state)
        };

        if category == Category::Comment {
            return category;
        }
        update_context(stream.column(), punct, state);
        state.start_of_line = false;
        category
    }

    /// Pure form of [`token`](Self::token): tokenize the token starting at
    /// byte `pos` of `line` without touching `state`.
    pub fn tokenize<'l>(&self, line: &'l str, pos: usize, state: &ScannerState) -> Step<'l> {
        let mut stream = LineStream::at(line, pos, self.config.tab_size);
        let mut state = state.clone();
        let category = self.token(&mut stream, &mut state);
        Step {
            category,
            text: stream.lexeme(),
            end: stream.pos(),
            state,
        }
    }

    /// Tokenize a whole line, returning its tokens and the state for the
    /// next line. The tokens cover the line exactly.
    pub fn tokenize_line(&self, line: &str, state: &ScannerState) -> LineTokens {
        let mut stream = self.stream(line);
        let mut state = state.clone();
        let mut tokens = Vec::new();
        if line.is_empty() {
            self.token(&mut stream, &mut state);
        }
        while !stream.eol() {
            stream.start_token();
            let start = stream.pos();
            let category = self.token(&mut stream, &mut state);
            debug_assert!(stream.pos() > start, "token made no progress at {start}");
            tokens.push(Token {
                category,
                start,
                end: stream.pos(),
            });
        }
        LineTokens { tokens, state }
    }

    /// Column for a new line whose text will begin with `text_after`, given
    /// the state at the end of the previous line.
    ///
    /// Returns `None` inside an open string or comment, where the host
    /// should leave indentation alone.
    pub fn indent(&self, state: &ScannerState, text_after: &str) -> Option<u32> {
        if state.sub_scanner.is_some() {
            return None;
        }
        match self.config.indent_style {
            IndentStyle::Preserve => Some(state.indented),
            IndentStyle::Contextual => Some(self.contextual_indent(state, text_after)),
        }
    }

    fn contextual_indent(&self, state: &ScannerState, text_after: &str) -> u32 {
        let first = text_after.trim_start().chars().next();
        let stack = state.context();
        let mut ctx = stack.top();
        if ctx.kind == ContextKind::Statement && first == Some('}') {
            if let Some(parent) = stack.parent() {
                ctx = parent;
            }
        }
        let closing = first.is_some() && first == ctx.kind.closer();
        let statement_unit = self.config.statement_indent_unit();

        match ctx.kind {
            ContextKind::Top => ctx.base_indent,
            ContextKind::Statement if first == Some('{') => ctx.base_indent,
            ContextKind::Statement => ctx.base_indent + statement_unit,
            _ if ctx.align == Some(true) => ctx.column + u32::from(!closing),
            ContextKind::Paren if !closing => ctx.base_indent + statement_unit,
            _ if closing => ctx.base_indent,
            _ => ctx.base_indent + self.config.indent_unit,
        }
    }

    fn classify<S: CharStream>(
        &self,
        stream: &mut S,
        state: &mut ScannerState,
    ) -> (Category, Option<char>) {
        let Some(ch) = stream.advance() else {
            return (Category::None, None);
        };
        if ch == '"' || ch == '`' {
            return (open(SubScanner::String { quote: ch }, stream, state), None);
        }
        if is_punctuation(ch) {
            return (Category::Punctuation, Some(ch));
        }
        if ch.is_ascii_digit() {
            stream.eat_while(|c| c.is_ascii_digit() || c == '.');
            return (Category::Number, None);
        }
        if ch == '/' {
            if stream.eat('*') {
                return (open(SubScanner::BlockComment, stream, state), None);
            }
            if stream.eat('/') {
                stream.skip_to_end();
                return (Category::Comment, None);
            }
        }
        stream.eat_while(is_word_char);
        (classify_word(stream.current(), &self.config), None)
    }
}

/// Install `sub` and let it scan the rest of the token.
fn open<S: CharStream>(sub: SubScanner, stream: &mut S, state: &mut ScannerState) -> Category {
    trace!(?sub, "open sub-scanner");
    state.sub_scanner = Some(sub);
    resume(sub, stream, state)
}

fn resume<S: CharStream>(sub: SubScanner, stream: &mut S, state: &mut ScannerState) -> Category {
    if sub.scan(stream) == ScanOutcome::Closed {
        trace!(?sub, "close sub-scanner");
        state.sub_scanner = None;
    }
    sub.category()
}

/// Context transitions after a significant token at `column`. `punct` is the
/// structural punctuation character, if the token was one.
fn update_context(column: u32, punct: Option<char>, state: &mut ScannerState) {
    if state.context.top().align.is_none() {
        state.context.update_top(|ctx| ctx.align = Some(true));
    }
    let top = state.context.top().kind;
    match punct {
        Some(';' | ',' | ':' | '.') => {
            if top == ContextKind::Statement {
                state.pop_context();
            }
        }
        Some('}') => {
            pop_statements(state);
            if state.context.top().kind == ContextKind::Brace {
                state.pop_context();
            }
            pop_statements(state);
        }
        Some(c) => {
            if let Some(kind) = ContextKind::for_opener(c) {
                state.push_context(column, kind);
            } else if top.closer() == Some(c) {
                state.pop_context();
            }
        }
        None => {
            if matches!(top, ContextKind::Top | ContextKind::Brace) {
                state.push_context(column, ContextKind::Statement);
            }
        }
    }
}

fn pop_statements(state: &mut ScannerState) {
    while state.context.top().kind == ContextKind::Statement {
        state.pop_context();
    }
}
