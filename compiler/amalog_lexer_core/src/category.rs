//! Lexical categories.

use std::fmt;

/// Semantic category attached to one lexeme.
///
/// Categories are mutually exclusive: every consumed span of a line gets
/// exactly one. [`Category::None`] marks whitespace and boundaries that carry
/// no style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    None = 0,
    Comment = 1,
    String = 2,
    Number = 3,
    Keyword = 4,
    Builtin = 5,
    Variable = 6,
    AnonymousVariable = 7,
    NamedSingleton = 8,
    Atom = 9,
    Punctuation = 10,
}

impl Category {
    /// Every category, in discriminant order.
    pub const ALL: [Category; 11] = [
        Category::None,
        Category::Comment,
        Category::String,
        Category::Number,
        Category::Keyword,
        Category::Builtin,
        Category::Variable,
        Category::AnonymousVariable,
        Category::NamedSingleton,
        Category::Atom,
        Category::Punctuation,
    ];

    /// Stable kebab-case name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Category::None => "none",
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Keyword => "keyword",
            Category::Builtin => "builtin",
            Category::Variable => "variable",
            Category::AnonymousVariable => "anonymous-variable",
            Category::NamedSingleton => "named-singleton",
            Category::Atom => "atom",
            Category::Punctuation => "punctuation",
        }
    }

    /// Style class handed to the host, or `None` for unstyled text.
    pub const fn style(self) -> Option<&'static str> {
        match self {
            Category::None => None,
            other => Some(other.name()),
        }
    }

    /// Look a category up by its [`name()`](Self::name).
    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
