//! Static language metadata.
//!
//! Capability flags a host reads once when it registers the mode: which
//! characters trigger re-indentation, comment delimiters for toggle-comment
//! commands, and the folding strategy.

/// Block comment delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentDelimiters {
    pub start: &'static str,
    pub end: &'static str,
}

/// How the host should compute fold regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldStrategy {
    /// Fold from a `{` to its matching `}`.
    Brace,
}

/// Description of a language handled by an editor mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageInfo {
    pub name: &'static str,
    pub mime: &'static str,
    /// Typing any of these re-indents the current line.
    pub electric_chars: &'static str,
    pub block_comment: CommentDelimiters,
    pub line_comment: &'static str,
    pub fold: FoldStrategy,
}

impl LanguageInfo {
    /// Returns `true` if typing `c` should re-indent the line.
    pub fn is_electric(&self, c: char) -> bool {
        self.electric_chars.contains(c)
    }
}

/// The Amalog language.
pub static AMALOG: LanguageInfo = LanguageInfo {
    name: "amalog",
    mime: "text/amalog",
    electric_chars: "{}",
    block_comment: CommentDelimiters {
        start: "/*",
        end: "*/",
    },
    line_comment: "//",
    fold: FoldStrategy::Brace,
};

static LANGUAGES: &[&LanguageInfo] = &[&AMALOG];

/// Find the language registered for a content type.
///
/// Matching ignores ASCII case and any `;`-separated parameters, so
/// `Text/Amalog; charset=utf-8` finds Amalog.
pub fn language_for_mime(mime: &str) -> Option<&'static LanguageInfo> {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    LANGUAGES
        .iter()
        .copied()
        .find(|lang| lang.mime.eq_ignore_ascii_case(essence))
}

/// Find a language by its mode name.
pub fn language_for_name(name: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES.iter().copied().find(|lang| lang.name == name)
}
