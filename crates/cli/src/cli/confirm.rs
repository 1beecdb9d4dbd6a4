//! Confirmation prompts for destructive operations.
//!
//! Deletes never talk to the backend before passing one of these gates.
//! The gate is a trait so `--yes` (and tests) can swap the terminal prompt
//! out without touching the ops.

use std::io;
use std::io::Write;

pub trait Confirmer {
    /// Ask the user; `false` means leave everything alone.
    fn confirm(&self, message: &str) -> io::Result<bool>;
}

/// Interactive `[y/N]` prompt on stdout/stdin. Anything but `y`/`yes`
/// declines.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, message: &str) -> io::Result<bool> {
        print!("{message} [y/N]: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let answer = input.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

/// The `--yes` flag: every prompt answers itself.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _message: &str) -> io::Result<bool> {
        Ok(true)
    }
}
