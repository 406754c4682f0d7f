//! CLI context - bundles parsed flags and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::pass::{self, Classes};
use crate::tui::print_help;

/// Password length when -l is not given.
const DEFAULT_LENGTH: usize = 12;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        Ok(Self {
            flags,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.validate_length()?;
        self.acquire_clipboard()?;
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passmint {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// The CLI constrains length before the core ever sees it.
    fn validate_length(&self) -> Result<(), Done> {
        if let Some(len) = self.flags.length
            && !pass::is_valid_length(len)
        {
            prompts::error(&format!(
                "Password length must be between {} and {}.",
                pass::MIN_LENGTH,
                pass::MAX_LENGTH
            ));
            return Err(Done);
        }
        Ok(())
    }

    fn acquire_clipboard(&mut self) -> Result<(), Done> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(_) => {
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Done);
                }
            }
        }
        Ok(())
    }

    /// Generate one password and route it to the clipboard or stdout.
    fn generate_output(&mut self) {
        let length = self.flags.length.unwrap_or(DEFAULT_LENGTH);
        let classes = Classes::with_optional(
            !self.flags.no_upper,
            !self.flags.no_digits,
            !self.flags.no_special,
        );

        let mut generated = match pass::generate(length, classes) {
            Ok(g) => g,
            Err(e) => {
                prompts::error(&e.to_string());
                return;
            }
        };

        if generated.used_fallback {
            prompts::fallback_pool();
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(generated.password.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                }
            }
        } else if quiet::enabled() {
            println!("{}", generated.password);
        } else {
            println!("Password: {}", generated.password);
            println!("Length: {} characters", length);
        }

        generated.password.zeroize();
    }
}
