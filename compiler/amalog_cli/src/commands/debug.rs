//! Debug commands: `lex`, `indent` and `fold` for inspecting the mode.

use std::fmt::Write;

use amalog_mode::{highlight_document, CharStream, DocumentHighlight, Mode};

use super::read_file;

/// Lex a file and display every token.
pub fn lex_file(mode: &Mode, path: &str) {
    let content = read_file(path);
    let doc = highlight_document(mode, &content);
    let count: usize = doc.lines().iter().map(|line| line.tokens.len()).sum();
    println!(
        "Tokens for '{path}' ({count} tokens, {} mode):",
        mode.language().name
    );
    print!("{}", render_tokens(&doc));
}

/// Compare each line's indentation with the column the mode suggests.
pub fn indent_file(mode: &Mode, path: &str) {
    let content = read_file(path);
    let doc = highlight_document(mode, &content);
    let report = render_indent(mode, &doc);
    println!("Indentation for '{path}':");
    print!("{}", report.text);
    if report.mismatches > 0 {
        println!();
        println!("{} line(s) differ from the suggested indentation", report.mismatches);
        std::process::exit(1);
    }
}

/// Show the fold that starts on `line` (0-based).
pub fn fold_file(mode: &Mode, path: &str, line: usize) {
    let content = read_file(path);
    let doc = highlight_document(mode, &content);
    match doc.fold_at(line) {
        Some(range) => println!(
            "{}:{} .. {}:{}",
            range.from.line + 1,
            range.from.ch,
            range.to.line + 1,
            range.to.ch
        ),
        None => println!("no fold on line {}", line + 1),
    }
}

/// One token per row: `line:start..end category "text"`.
fn render_tokens(doc: &DocumentHighlight<'_>) -> String {
    let mut out = String::new();
    for (index, line) in doc.lines().iter().enumerate() {
        for token in &line.tokens {
            let _ = writeln!(
                out,
                "  {}:{}..{} {} {:?}",
                index + 1,
                token.start,
                token.end,
                token.category,
                token.text(line.text)
            );
        }
    }
    out
}

struct IndentReport {
    text: String,
    mismatches: usize,
}

/// Blank lines and lines inside strings or comments are skipped.
fn render_indent(mode: &Mode, doc: &DocumentHighlight<'_>) -> IndentReport {
    let mut report = IndentReport {
        text: String::new(),
        mismatches: 0,
    };
    for (index, line) in doc.lines().iter().enumerate().skip(1) {
        if line.text.trim().is_empty() {
            continue;
        }
        let Some(suggested) = doc.indent_after(mode, index - 1, line.text) else {
            continue;
        };
        let actual = mode.stream(line.text).indentation();
        let marker = if actual == suggested {
            "ok"
        } else {
            report.mismatches += 1;
            "!!"
        };
        let _ = writeln!(
            report.text,
            "  {marker} {:>4}: {actual:>3} (suggested {suggested:>3}) {}",
            index + 1,
            line.text.trim()
        );
    }
    report
}
