//! Static shell text: banner and help.

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_banner() {
    box_top("Secure Password Generator");
    box_line_center("This tool creates cryptographically secure random passwords.");
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("Passmint");
    box_line_center("Secure password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Prompts for length and");
    box_line("     character classes, then offers to copy the result.");
    box_line("  2) Client: Pass flags directly (e.g., -l 16 -b) to generate a");
    box_line("     password without prompts.");
    box_line("");
    box_line("USAGE:");
    box_line("  passmint [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Password length, 8 to 32 (default: 12)");
    box_opt("      --no-upper", "Exclude uppercase letters");
    box_opt("      --no-digits", "Exclude digits");
    box_opt("      --no-special", "Exclude special characters");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except the password");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passmint                 Interactive mode");
    box_line("  passmint -l 16           One password, 16 characters");
    box_line("  passmint --no-special    Alphanumeric only");
    box_line("  passmint -l 32 -b        32 characters, straight to clipboard");
    box_line("");
    box_bottom();
    println!();
}
