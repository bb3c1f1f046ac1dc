//! Property-based tests for the Amalog editor mode.
//!
//! Random documents are built from fragments of real Amalog (words,
//! brackets, strings and comments, including unterminated ones) and
//! checked for the guarantees hosts rely on:
//! 1. Tokens of a line cover the line exactly, in order.
//! 2. Tokenizing is deterministic given the state a line starts from.
//! 3. Token-at-a-time stepping agrees with whole-line tokenizing.
//! 4. Re-highlighting from a cached line state reproduces the document.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use amalog_mode::{highlight_document, Category, Mode, ScannerState, Token};
use proptest::prelude::*;

// -- Generation Strategies --

fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9_]{0,6}").expect("valid regex"),
        prop::string::string_regex("[A-Z_][a-z0-9]{0,4}").expect("valid regex"),
        prop::string::string_regex("[0-9]{1,3}(\\.[0-9]{1,2})?").expect("valid regex"),
        prop::sample::select(vec![
            "about", "main", "is", "load", "store", "{", "}", "(", ")", "[", "]", ",", ";",
            ":", ".", "\"", "`", "\\", "/*", "*/", "//", "*", "/", "é", "→", "=",
        ])
        .prop_map(str::to_owned),
        prop::string::string_regex("[ \t]{1,3}").expect("valid regex"),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..12).prop_map(|parts| parts.concat())
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 1..10)
}

// -- Helpers --

fn step_through(mode: &Mode, line: &str, state: &ScannerState) -> (Vec<Token>, ScannerState) {
    let mut state = state.clone();
    let mut tokens = Vec::new();
    let mut pos = 0;
    if line.is_empty() {
        state = mode.tokenize(line, 0, &state).state;
    }
    while pos < line.len() {
        let step = mode.tokenize(line, pos, &state);
        assert!(step.end > pos, "no progress at {pos} in {line:?}");
        tokens.push(Token {
            category: step.category,
            start: pos,
            end: step.end,
        });
        pos = step.end;
        state = step.state;
    }
    (tokens, state)
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tokens_cover_each_line(lines in document_strategy()) {
        let mode = Mode::default();
        let mut state = mode.start_state(0);
        for line in &lines {
            let out = mode.tokenize_line(line, &state);
            let mut expected_start = 0;
            for token in &out.tokens {
                prop_assert_eq!(token.start, expected_start);
                prop_assert!(token.end > token.start);
                expected_start = token.end;
            }
            prop_assert_eq!(expected_start, line.len());
            let joined: String = out.tokens.iter().map(|t| t.text(line)).collect();
            prop_assert_eq!(&joined, line);
            state = out.state;
        }
    }

    #[test]
    fn tokenizing_is_deterministic(lines in document_strategy()) {
        let mode = Mode::default();
        let text = lines.join("\n");
        let first = highlight_document(&mode, &text);
        let second = highlight_document(&mode, &text);
        prop_assert_eq!(first.lines(), second.lines());
    }

    #[test]
    fn stepping_matches_whole_line(lines in document_strategy()) {
        let mode = Mode::default();
        let mut state = mode.start_state(0);
        for line in &lines {
            let whole = mode.tokenize_line(line, &state);
            let (tokens, end) = step_through(&mode, line, &state);
            prop_assert_eq!(&tokens, &whole.tokens);
            prop_assert_eq!(&end, &whole.state);
            state = whole.state;
        }
    }

    #[test]
    fn resuming_from_cached_state(lines in document_strategy(), pick in any::<prop::sample::Index>()) {
        let mode = Mode::default();
        let text = lines.join("\n");
        let doc = highlight_document(&mode, &text);
        prop_assume!(!doc.lines().is_empty());
        let from = pick.index(doc.lines().len());
        let mut state = doc.state_before(from).cloned().expect("line exists");
        for line in &doc.lines()[from..] {
            let out = mode.tokenize_line(line.text, &state);
            prop_assert_eq!(&out.tokens, &line.tokens);
            state = out.state;
        }
    }

    #[test]
    fn comments_never_change_context(line in line_strategy()) {
        let mode = Mode::default();
        let state = mode.start_state(0);
        let commented = format!("// {line}");
        let out = mode.tokenize_line(&commented, &state);
        prop_assert_eq!(out.state.context(), state.context());
        prop_assert!(out.tokens.iter().any(|t| t.category == Category::Comment));
    }

    #[test]
    fn indent_is_defined_outside_sub_scanners(lines in document_strategy()) {
        let mode = Mode::default();
        let text = lines.join("\n");
        let doc = highlight_document(&mode, &text);
        for (index, line) in doc.lines().iter().enumerate() {
            let indent = doc.indent_after(&mode, index, "x");
            prop_assert_eq!(indent.is_none(), line.end_state.sub_scanner().is_some());
        }
    }
}
