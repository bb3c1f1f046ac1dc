//! Mode configuration.
//!
//! A [`ModeConfig`] is handed to [`Mode::new`](crate::Mode::new) once and
//! never changes afterwards; there is no ambient, mutable mode setting.
//! Configurations can be built in code or deserialized from JSON:
//!
//! ```json
//! { "indent_unit": 2, "extra_atoms": ["true", "false"], "indent_style": "contextual" }
//! ```

use amalog_lexer_core::{is_word_char, DEFAULT_TAB_SIZE};
use rustc_hash::FxHashSet;
use serde::Deserialize;

/// Default indentation step, in columns.
pub const INDENT_UNIT: u32 = 4;

/// How [`Mode::indent`](crate::Mode::indent) computes the column of a new line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Derive the column from the innermost open context.
    #[default]
    Contextual,
    /// Keep the indentation of the previous line.
    Preserve,
}

/// Configuration for the Amalog mode.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModeConfig {
    /// Columns added per nesting level.
    pub indent_unit: u32,

    /// Columns added for the continuation of a statement or call.
    /// Falls back to `indent_unit` when unset.
    pub statement_indent_unit: Option<u32>,

    /// Tab stop width used to measure columns.
    pub tab_size: u32,

    /// Bare words always classified as atoms, even when they would
    /// otherwise be keywords or builtins.
    pub extra_atoms: FxHashSet<String>,

    /// Indentation strategy.
    pub indent_style: IndentStyle,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            indent_unit: INDENT_UNIT,
            statement_indent_unit: None,
            tab_size: DEFAULT_TAB_SIZE,
            extra_atoms: FxHashSet::default(),
            indent_style: IndentStyle::default(),
        }
    }
}

impl ModeConfig {
    /// Create a new config with the specified indent unit.
    pub fn with_indent_unit(indent_unit: u32) -> Self {
        Self {
            indent_unit,
            ..Default::default()
        }
    }

    /// Create a new config with the specified indentation strategy.
    pub fn with_indent_style(indent_style: IndentStyle) -> Self {
        Self {
            indent_style,
            ..Default::default()
        }
    }

    /// Create a new config with the given extra atoms.
    pub fn with_extra_atoms<I, S>(atoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra_atoms: atoms.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Effective continuation indent.
    #[inline]
    pub fn statement_indent_unit(&self) -> u32 {
        self.statement_indent_unit.unwrap_or(self.indent_unit)
    }

    /// Returns `true` if `word` was configured as an extra atom.
    #[inline]
    pub fn is_extra_atom(&self, word: &str) -> bool {
        !self.extra_atoms.is_empty() && self.extra_atoms.contains(word)
    }

    /// Check the configuration for values the mode cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_unit == 0 {
            return Err(ConfigError::ZeroIndentUnit);
        }
        if self.tab_size == 0 {
            return Err(ConfigError::ZeroTabSize);
        }
        if let Some(atom) = self.extra_atoms.iter().find(|a| !is_bare_atom(a)) {
            return Err(ConfigError::InvalidAtom(atom.clone()));
        }
        Ok(())
    }
}

/// An extra atom only matters if the classifier would otherwise reach the
/// keyword tables with it: a non-empty word that does not start with `_`,
/// an uppercase letter, or a digit.
fn is_bare_atom(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '$' => chars.all(is_word_char),
        _ => false,
    }
}

/// Rejected mode configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("indent unit must be at least one column")]
    ZeroIndentUnit,

    #[error("tab size must be at least one column")]
    ZeroTabSize,

    #[error("extra atom {0:?} is not a lowercase bare word")]
    InvalidAtom(String),

    #[error("malformed mode configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests;
