//! Amalog editor mode CLI
//!
//! Runs the mode over a file the way an editor would, line by line, and
//! prints what it sees.

mod commands;

use commands::{fold_file, indent_file, lex_file, load_mode};

fn main() {
    init_tracing();

    let mut args: Vec<String> = std::env::args().collect();
    let mut config_path = None;
    args.retain(|arg| match arg.strip_prefix("--config=") {
        Some(path) => {
            config_path = Some(path.to_string());
            false
        }
        None => true,
    });

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: amalog lex <file.amalog>");
                std::process::exit(1);
            }
            let mode = load_mode(config_path.as_deref());
            lex_file(&mode, &args[2]);
        }
        "indent" => {
            if args.len() < 3 {
                eprintln!("Usage: amalog indent <file.amalog>");
                std::process::exit(1);
            }
            let mode = load_mode(config_path.as_deref());
            indent_file(&mode, &args[2]);
        }
        "fold" => {
            if args.len() < 4 {
                eprintln!("Usage: amalog fold <file.amalog> <line>");
                eprintln!();
                eprintln!("Lines are numbered from 1.");
                std::process::exit(1);
            }
            let Some(line) = args[3].parse::<usize>().ok().filter(|&n| n > 0) else {
                eprintln!("error: invalid line number '{}'", args[3]);
                std::process::exit(1);
            };
            let mode = load_mode(config_path.as_deref());
            fold_file(&mode, &args[2], line - 1);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Amalog editor mode {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Install a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=amalog_mode=trace amalog lex main.amalog`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn print_usage() {
    println!("Amalog editor mode");
    println!();
    println!("Usage: amalog <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Print every token with its category");
    println!("  indent <file>        Compare each line's indentation with the suggested one");
    println!("  fold <file> <line>   Show the brace fold starting on a line (1-based)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --config=<file.json> Mode configuration (indent_unit, statement_indent_unit,");
    println!("                       tab_size, extra_atoms, indent_style)");
    println!();
    println!("Examples:");
    println!("  amalog lex main.amalog");
    println!("  amalog indent main.amalog --config=mode.json");
    println!("  amalog fold main.amalog 3");
}
