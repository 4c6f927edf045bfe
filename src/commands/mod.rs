pub mod auth;
pub mod config;
pub mod teams;
pub mod tickets;

use std::io::{self, BufRead, Write};

/// Yes/no prompt for destructive CLI actions; anything but an explicit
/// "y"/"yes" counts as a no.
pub(crate) fn confirm_prompt(message: &str) -> bool {
    print!("{} [y/N] ", message);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
