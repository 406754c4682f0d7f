//! Secure password generation with an interactive shell and a flag-driven CLI.
//!
//! The core lives in [`pass`]: pool assembly from four character classes and
//! uniform draws from OS entropy. Everything else is terminal glue.

pub mod cli;
pub mod exits;
pub mod pass;
pub mod terminal;
pub mod tui;
