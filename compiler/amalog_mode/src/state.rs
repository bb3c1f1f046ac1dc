//! Per-line scanner state.

use amalog_lexer_core::SubScanner;
use tracing::trace;

use crate::context::{Context, ContextKind, ContextStack};

/// State carried from one token to the next, and from one line to the next.
///
/// Cloning is cheap (the context stack is shared), so hosts can snapshot the
/// state at the end of every line and restart tokenization from any of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerState {
    pub(crate) sub_scanner: Option<SubScanner>,
    pub(crate) context: ContextStack,
    pub(crate) indented: u32,
    pub(crate) start_of_line: bool,
}

impl ScannerState {
    /// Fresh state for a document whose root sits at `base_column`.
    pub fn new(base_column: u32) -> Self {
        Self {
            sub_scanner: None,
            context: ContextStack::new(base_column),
            indented: 0,
            start_of_line: true,
        }
    }

    /// The string or comment left open by a previous line, if any.
    #[inline]
    pub fn sub_scanner(&self) -> Option<SubScanner> {
        self.sub_scanner
    }

    #[inline]
    pub fn context(&self) -> &ContextStack {
        &self.context
    }

    /// Indentation column of the current line.
    #[inline]
    pub fn indented(&self) -> u32 {
        self.indented
    }

    /// Returns `true` until the first significant token of a line.
    #[inline]
    pub fn is_line_start(&self) -> bool {
        self.start_of_line
    }

    /// Open a context at `column`.
    ///
    /// The new context inherits the base indent of an enclosing statement,
    /// so clauses nested in brackets line up with the statement; otherwise
    /// it inherits the current line's indentation.
    pub fn push_context(&mut self, column: u32, kind: ContextKind) {
        let top = self.context.top();
        let base_indent = if top.kind == ContextKind::Statement {
            top.base_indent
        } else {
            self.indented
        };
        self.context.push(Context {
            base_indent,
            column,
            kind,
            align: None,
        });
        trace!(?kind, column, base_indent, depth = self.context.depth(), "push context");
    }

    /// Close the innermost context.
    ///
    /// Closing a bracket restores the indentation the bracket was opened
    /// with. Returns `None` when only the root is left.
    pub fn pop_context(&mut self) -> Option<Context> {
        let popped = self.context.pop()?;
        if popped.kind.is_bracket() {
            self.indented = popped.base_indent;
        }
        trace!(kind = ?popped.kind, depth = self.context.depth(), "pop context");
        Some(popped)
    }
}

impl Default for ScannerState {
    fn default() -> Self {
        Self::new(0)
    }
}
