//! Line-based prompts on stdin.
//!
//! End of input counts as the default answer, so commands run from scripts
//! never block.

use crate::errors::AppResult;
use std::io::{self, Write};

/// Ask a yes/no question. An empty answer returns `default`.
pub fn confirm(question: &str, default: bool) -> AppResult<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let answer = ask(&format!("{} {}", question, hint))?;

    Ok(match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}

/// Ask for a line of text. Returns an empty string at end of input.
pub fn ask(question: &str) -> AppResult<String> {
    print!("{}: ", question);
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
