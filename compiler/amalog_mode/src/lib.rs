//! Amalog editor mode.
//!
//! Classifies Amalog source one line at a time for syntax highlighting and
//! suggests the indentation of new lines. A host editor drives the mode:
//!
//! 1. create a state with [`Mode::start_state`];
//! 2. call [`Mode::token`] (or the pure [`Mode::tokenize`]) until the line is
//!    exhausted, threading the state from line to line;
//! 3. call [`Mode::indent`] with the state at the end of the previous line
//!    to place the cursor on a new line.
//!
//! # Modules
//!
//! - [`config`]: mode configuration and its validation
//! - [`words`]: keyword, builtin and variable classification of bare words
//! - [`context`]: the nesting context stack used for indentation
//! - [`state`]: the per-line scanner state
//! - [`mode`]: the token classifier and indentation entry points
//! - [`highlight`]: whole-document highlighting
//! - [`fold`]: brace folding
//! - [`language`]: static language metadata

pub mod config;
pub mod context;
pub mod fold;
pub mod highlight;
pub mod language;
pub mod mode;
pub mod state;
pub mod words;

pub use amalog_lexer_core::{Category, CharStream, LineStream, SubScanner};
pub use config::{ConfigError, IndentStyle, ModeConfig};
pub use context::{Context, ContextKind, ContextStack};
pub use fold::{FoldRange, Position};
pub use highlight::{highlight_document, DocumentHighlight, HighlightedLine, LineTokens, Token};
pub use language::{language_for_mime, CommentDelimiters, FoldStrategy, LanguageInfo, AMALOG};
pub use mode::{Mode, Step};
pub use state::ScannerState;
pub use words::classify_word;
