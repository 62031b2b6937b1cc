//! Terminal prompting.
//!
//! The one place the binary reads operator input. Kept to a plain
//! write-prompt/read-line exchange so the promotion flow works the same over
//! a pipe as on a terminal (and so tests can drive it through stdin).

use std::io::{self, Write};

use snapver_core::promote::PromptSource;

/// Prompt source backed by stdout/stdin.
#[derive(Debug, Default)]
pub struct StdPrompter;

impl StdPrompter {
    /// Create a stdout/stdin prompter.
    pub const fn new() -> Self {
        Self
    }
}

impl PromptSource for StdPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input)
    }
}
