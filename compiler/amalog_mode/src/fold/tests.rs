use crate::{highlight_document, Mode};

use super::*;

fn fold(source: &str, line: usize) -> Option<FoldRange> {
    let mode = Mode::default();
    highlight_document(&mode, source).fold_at(line)
}

#[test]
fn folds_brace_block() {
    let source = "main is {\n    foo.\n}\n";
    assert_eq!(
        fold(source, 0),
        Some(FoldRange {
            from: Position { line: 0, ch: 9 },
            to: Position { line: 2, ch: 0 },
        })
    );
}

#[test]
fn nested_blocks_match_their_own_closer() {
    let source = "about {\n    main is {\n        foo.\n    }\n}\n";
    assert_eq!(
        fold(source, 0).map(|r| r.to),
        Some(Position { line: 4, ch: 0 })
    );
    assert_eq!(
        fold(source, 1).map(|r| r.to),
        Some(Position { line: 3, ch: 4 })
    );
}

#[test]
fn last_open_brace_on_line_is_used() {
    let source = "a { b } c {\n}\n";
    assert_eq!(
        fold(source, 0),
        Some(FoldRange {
            from: Position { line: 0, ch: 11 },
            to: Position { line: 1, ch: 0 },
        })
    );
}

#[test]
fn single_line_block_does_not_fold() {
    assert_eq!(fold("main is { foo. }\n", 0), None);
}

#[test]
fn unclosed_block_does_not_fold() {
    assert_eq!(fold("main is {\n    foo.\n", 0), None);
}

#[test]
fn braces_in_strings_and_comments_are_ignored() {
    assert_eq!(fold("x = \"{\"\n}\n", 0), None);
    assert_eq!(fold("// {\n}\n", 0), None);
    let source = "main is {\n    \"}\" /* } */\n}\n";
    assert_eq!(
        fold(source, 0).map(|r| r.to),
        Some(Position { line: 2, ch: 0 })
    );
}

#[test]
fn line_without_brace_does_not_fold() {
    assert_eq!(fold("foo.\nbar.\n", 0), None);
    assert_eq!(fold("foo.\n", 7), None);
}
