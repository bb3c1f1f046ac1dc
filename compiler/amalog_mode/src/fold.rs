//! Brace folding.
//!
//! A line is foldable when its last structural `{` is closed by a matching
//! `}` on a later line. Braces inside strings and comments are not
//! punctuation tokens and are ignored. Positions are byte offsets.

use amalog_lexer_core::Category;

use crate::highlight::HighlightedLine;

/// A position in a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

/// Region hidden by a fold: from just after the `{` to just before the `}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldRange {
    pub from: Position,
    pub to: Position,
}

fn brace(line: &HighlightedLine<'_>, index: usize) -> Option<char> {
    let token = line.tokens.get(index)?;
    if token.category != Category::Punctuation {
        return None;
    }
    match token.text(line.text) {
        "{" => Some('{'),
        "}" => Some('}'),
        _ => None,
    }
}

pub(crate) fn brace_range(lines: &[HighlightedLine<'_>], start: usize) -> Option<FoldRange> {
    let first = lines.get(start)?;
    let open = (0..first.tokens.len())
        .rev()
        .find(|&i| brace(first, i) == Some('{'))?;

    let mut depth = 1usize;
    let mut next = open + 1;
    for (line_index, line) in lines.iter().enumerate().skip(start) {
        for i in next..line.tokens.len() {
            match brace(line, i) {
                Some('{') => depth += 1,
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        if line_index == start {
                            return None;
                        }
                        return Some(FoldRange {
                            from: Position {
                                line: start,
                                ch: first.tokens[open].end,
                            },
                            to: Position {
                                line: line_index,
                                ch: line.tokens[i].start,
                            },
                        });
                    }
                }
                _ => {}
            }
        }
        next = 0;
    }
    None
}

#[cfg(test)]
mod tests;
