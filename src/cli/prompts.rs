//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning to stderr (yellow) - suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - NOT suppressed (errors are always shown).
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Warn that the class selection was empty and the fallback pool was used.
pub fn fallback_pool() {
    warn("Warning: No character sets selected. Using default (a-z, 0-9).");
}

/// Print clipboard copied confirmation - suppressed in quiet mode.
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("Password copied to clipboard!");
    }
}

/// Print clipboard error - NOT suppressed.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt the user when the clipboard is unavailable. Returns true to fall
/// back to terminal output, false to abort. Falls back silently when quiet
/// or non-interactive.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            return true;
        }
    } else {
        return true;
    }

    eprintln!("Aborted.");
    false
}
