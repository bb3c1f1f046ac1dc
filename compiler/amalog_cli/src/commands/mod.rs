//! Command handlers for the Amalog CLI.
//!
//! Shared utilities (`read_file`, `load_mode`) live here in the module root.

use amalog_mode::{Mode, ModeConfig};

mod debug;

pub use debug::{fold_file, indent_file, lex_file};

/// Read a file, exiting with a readable message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Build the mode from an optional JSON configuration file.
pub fn load_mode(config_path: Option<&str>) -> Mode {
    let Some(path) = config_path else {
        return Mode::default();
    };
    let config = ModeConfig::from_json(&read_file(path)).and_then(Mode::new);
    match config {
        Ok(mode) => {
            tracing::debug!(path, "loaded mode configuration");
            mode
        }
        Err(e) => {
            eprintln!("error: invalid configuration '{path}': {e}");
            std::process::exit(1);
        }
    }
}
