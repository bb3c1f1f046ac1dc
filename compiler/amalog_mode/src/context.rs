//! Nesting contexts for indentation.
//!
//! The stack is a persistent singly linked list: each node holds an [`Arc`]
//! to its parent, so cloning a [`ContextStack`] is O(1) and a stack cached by
//! a host for some line is never disturbed by tokenizing later lines.
//! Pushing allocates one node, popping drops the child and leaves the shared
//! parent untouched, and updating the top copies only the top node.
//!
//! The root is always a [`ContextKind::Top`] context and cannot be popped.

use std::fmt;
use std::sync::Arc;

/// What opened a context, and therefore what closes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// Document root.
    Top,
    /// A statement running until a terminator or an enclosing closer.
    Statement,
    /// `(`, closed by `)`.
    Paren,
    /// `[`, closed by `]`.
    Bracket,
    /// `{`, closed by `}`.
    Brace,
}

impl ContextKind {
    /// Bracket context opened by `c`, if `c` is an opening bracket.
    pub const fn for_opener(c: char) -> Option<ContextKind> {
        match c {
            '(' => Some(ContextKind::Paren),
            '[' => Some(ContextKind::Bracket),
            '{' => Some(ContextKind::Brace),
            _ => None,
        }
    }

    /// Character that closes this context.
    pub const fn closer(self) -> Option<char> {
        match self {
            ContextKind::Paren => Some(')'),
            ContextKind::Bracket => Some(']'),
            ContextKind::Brace => Some('}'),
            ContextKind::Top | ContextKind::Statement => None,
        }
    }

    /// Returns `true` for the three bracket kinds.
    pub const fn is_bracket(self) -> bool {
        matches!(
            self,
            ContextKind::Paren | ContextKind::Bracket | ContextKind::Brace
        )
    }
}

/// One level of nesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context {
    /// Indentation inherited when the context opened.
    pub base_indent: u32,
    /// Column of the token that opened it.
    pub column: u32,
    pub kind: ContextKind,
    /// Whether content followed the opener on the opener's own line.
    /// `None` until that line has either produced a token or ended.
    pub align: Option<bool>,
}

#[derive(Clone)]
struct Node {
    context: Context,
    parent: Option<Arc<Node>>,
}

impl Drop for Node {
    // Unlink uniquely owned ancestors iteratively so that dropping a very
    // deep stack cannot overflow the call stack.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut owned) => next = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Persistent stack of [`Context`]s, innermost on top.
///
/// Equality compares contexts level by level and stops early at a node the
/// two stacks share.
#[derive(Clone)]
pub struct ContextStack {
    top: Arc<Node>,
    depth: usize,
}

impl ContextStack {
    /// Create a stack holding only the root context at `base_column`.
    pub fn new(base_column: u32) -> Self {
        let root = Context {
            base_indent: base_column,
            column: 0,
            kind: ContextKind::Top,
            align: Some(false),
        };
        Self {
            top: Arc::new(Node {
                context: root,
                parent: None,
            }),
            depth: 1,
        }
    }

    /// Innermost context.
    #[inline]
    pub fn top(&self) -> &Context {
        &self.top.context
    }

    /// Context directly enclosing the innermost one.
    pub fn parent(&self) -> Option<&Context> {
        self.top.parent.as_deref().map(|node| &node.context)
    }

    /// Number of contexts, root included. Never zero.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Contexts from innermost to the root.
    pub fn iter(&self) -> impl Iterator<Item = &Context> {
        std::iter::successors(Some(&*self.top), |node| node.parent.as_deref())
            .map(|node| &node.context)
    }

    /// Push a new innermost context.
    pub fn push(&mut self, context: Context) {
        let parent = Arc::clone(&self.top);
        self.top = Arc::new(Node {
            context,
            parent: Some(parent),
        });
        self.depth += 1;
    }

    /// Remove and return the innermost context. The root is never removed.
    pub fn pop(&mut self) -> Option<Context> {
        let parent = self.top.parent.clone()?;
        let popped = self.top.context;
        self.top = parent;
        self.depth -= 1;
        Some(popped)
    }

    /// Modify the innermost context, copying its node if it is shared.
    pub fn update_top(&mut self, f: impl FnOnce(&mut Context)) {
        f(&mut Arc::make_mut(&mut self.top).context);
    }
}

impl PartialEq for ContextStack {
    fn eq(&self, other: &Self) -> bool {
        if self.depth != other.depth {
            return false;
        }
        let mut left = Some(&*self.top);
        let mut right = Some(&*other.top);
        while let (Some(a), Some(b)) = (left, right) {
            if std::ptr::eq(a, b) {
                return true;
            }
            if a.context != b.context {
                return false;
            }
            left = a.parent.as_deref();
            right = b.parent.as_deref();
        }
        true
    }
}

impl Eq for ContextStack {}

impl fmt::Debug for ContextStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
