use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read one line from stdin. None on EOF or read error.
fn read_line_trimmed() -> Option<String> {
    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Line-input fallback for terminals that refuse raw mode (piped stdin).
/// Unparseable input maps to 0, which no caller accepts, so the retry loop
/// re-prompts.
fn read_line_number() -> Option<usize> {
    let line = read_line_trimmed()?;
    Some(line.parse().unwrap_or(0))
}

/// Get a number with raw-mode digit input. Returns None when cancelled.
/// Empty input returns Some(0).
pub fn get_numeric_input(prompt: &str) -> Option<usize> {
    print!("{}: ", prompt);
    flush();

    let Ok(_guard) = RawModeGuard::new() else {
        return read_line_number();
    };

    let mut digits = String::new();
    let mut cancelled = false;

    loop {
        match read() {
            Ok(Event::Key(key_event)) => match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    // Reset terminal BEFORE exit since process::exit doesn't run destructors
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Esc => {
                    cancelled = true;
                    break;
                }
                KeyCode::Enter => break,
                KeyCode::Backspace => {
                    if digits.pop().is_some() {
                        print!("\x08 \x08");
                        flush();
                    }
                }
                KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < 6 => {
                    digits.push(c);
                    print!("{c}");
                    flush();
                }
                _ => {}
            },
            Err(_) => break,
            _ => {}
        }
    }

    // Drop guard to disable raw mode BEFORE println
    drop(_guard);
    println!();

    if cancelled {
        None
    } else if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// Single-key yes/no prompt. Any answer other than `y` means no.
pub fn get_yes_no(prompt: &str) -> bool {
    print!("{} ", prompt);
    flush();

    let Ok(_guard) = RawModeGuard::new() else {
        return read_line_trimmed()
            .map(|s| s.eq_ignore_ascii_case("y"))
            .unwrap_or(false);
    };

    let answer = loop {
        match read() {
            Ok(Event::Key(key_event)) => match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Char(c) => {
                    print!("{c}");
                    flush();
                    break c.eq_ignore_ascii_case(&'y');
                }
                KeyCode::Enter | KeyCode::Esc => break false,
                _ => {}
            },
            Err(_) => break false,
            _ => {}
        }
    };

    drop(_guard);
    println!();
    answer
}
