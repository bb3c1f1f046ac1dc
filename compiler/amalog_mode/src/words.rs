//! Bare word classification.
//!
//! Precedence, first match wins:
//! 1. `_` alone is the anonymous variable
//! 2. `_name` is a named singleton
//! 3. an uppercase initial makes a variable
//! 4. configured extra atoms
//! 5. reserved keywords (`about`, `main`, `is`)
//! 6. builtins (`load`, `store`)
//! 7. anything else is an atom

use amalog_lexer_core::Category;

use crate::config::ModeConfig;

/// Look up a reserved word.
///
/// Returns [`Category::Keyword`] or [`Category::Builtin`], `None` for
/// anything else. Words outside the 2-5 byte range are rejected without
/// comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Category> {
    if !(2..=5).contains(&text.len()) {
        return None;
    }
    match text {
        "about" | "main" | "is" => Some(Category::Keyword),
        "load" | "store" => Some(Category::Builtin),
        _ => None,
    }
}

/// Classify a bare word scanned by the token classifier.
pub fn classify_word(text: &str, config: &ModeConfig) -> Category {
    let Some(first) = text.chars().next() else {
        return Category::Atom;
    };
    if text == "_" {
        return Category::AnonymousVariable;
    }
    if first == '_' {
        return Category::NamedSingleton;
    }
    if first.is_ascii_uppercase() {
        return Category::Variable;
    }
    if config.is_extra_atom(text) {
        return Category::Atom;
    }
    lookup(text).unwrap_or(Category::Atom)
}
