//! Interactive shell.

mod input;
mod text;

pub use input::*;
pub use text::*;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::cli::prompts;
use crate::pass::{self, Classes, charset};
use crate::terminal::{
    box_bottom, box_line, box_top, calculate_entropy, clear, entropy_strength, print_error,
    reset_terminal,
};

/// Run interactive mode: prompt for length and character classes, generate,
/// display, and offer a clipboard copy.
pub fn run() {
    reset_terminal();
    clear();
    print_banner();

    let Some(length) = prompt_length() else {
        println!("Aborted.");
        return;
    };

    let upper = get_yes_no("Include uppercase letters? (y/n):");
    let digits = get_yes_no("Include digits? (y/n):");
    let special = get_yes_no("Include special characters? (y/n):");

    let classes = Classes::with_optional(upper, digits, special);
    let mut generated = match pass::generate(length, classes) {
        Ok(g) => g,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    if generated.used_fallback {
        prompts::fallback_pool();
    }

    println!();
    let pool = charset::size(classes);
    let bits = calculate_entropy(length, pool);
    box_top("Generated Password");
    box_line(&format!("Password: {}", generated.password));
    box_line(&format!("Length: {} characters", length));
    box_line(&format!(
        "Entropy: {:.1} bits ({}) | Charset: {} chars",
        bits,
        entropy_strength(bits),
        pool
    ));
    box_bottom();
    println!();

    if get_yes_no("Copy password to clipboard? (y/n):") {
        copy_to_clipboard(&generated.password);
    }

    generated.password.zeroize();
}

/// Re-prompt until an integer in the accepted range is entered.
/// None means the user cancelled (Esc, or EOF on piped stdin).
fn prompt_length() -> Option<usize> {
    loop {
        let answer = get_numeric_input(&format!(
            "Enter password length ({}-{})",
            pass::MIN_LENGTH,
            pass::MAX_LENGTH
        ))?;
        if pass::is_valid_length(answer) {
            return Some(answer);
        }
        print_error(&format!(
            "Please enter a value between {} and {}.",
            pass::MIN_LENGTH,
            pass::MAX_LENGTH
        ));
    }
}

/// Clipboard failures are reported and the password stays on screen.
fn copy_to_clipboard(password: &str) {
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(password.to_string()) {
            Ok(_) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied();
            }
            Err(e) => prompts::clipboard_error(&e.to_string()),
        },
        Err(e) => prompts::clipboard_error(&e.to_string()),
    }
}
