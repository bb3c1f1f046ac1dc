//! Standalone lexical core for the Amalog editor mode.
//!
//! This crate holds the pieces of the tokenizer that know nothing about
//! keywords or indentation:
//!
//! - [`CharStream`]: the one-line cursor interface a host editor supplies,
//!   plus [`LineStream`], a reference implementation over `&str`.
//! - [`Category`]: the closed set of lexical categories.
//! - [`SubScanner`]: resumable scanners for constructs that may span
//!   lines (quoted strings and block comments).
//!
//! Keyword resolution, the context stack and indentation live in
//! `amalog_mode`.

mod category;
mod scanner;
mod stream;

pub use category::Category;
pub use scanner::{
    is_punctuation, is_word_char, scan_block_comment, scan_string, ScanOutcome, SubScanner,
};
pub use stream::{count_column, CharStream, LineStream, DEFAULT_TAB_SIZE};
