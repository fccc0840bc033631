//! Terminal retry prompt.

use console::Term;
use dialoguer::Input;
use std::io::BufRead;

use crate::cli::output;
use crate::core::prompt::{wants_retry, Prompt};
use crate::error::Result;

const QUESTION: &str = "Try again [Y/n]";

/// Asks on the controlling terminal, or reads a line from stdin when piped.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn retry(&self, error: &serde_json::Error) -> Result<bool> {
        output::error(&format!("invalid JSON: {}", error));

        let answer = if Term::stderr().is_term() {
            Input::<String>::new()
                .with_prompt(QUESTION)
                .allow_empty(true)
                .report(false)
                .interact_text()?
        } else {
            eprint!("{}? ", QUESTION);
            let mut line = String::new();
            if std::io::stdin().lock().read_line(&mut line)? == 0 {
                // EOF declines.
                return Ok(false);
            }
            line
        };
        Ok(wants_retry(&answer))
    }
}
