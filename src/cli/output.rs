//! Output handling for the candyrun CLI.
//!
//! Styled helper messages go through [`Output`] and respect quiet/verbose
//! modes; the result sentence itself is printed plainly by the caller so it
//! stays parseable.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a verbose step with emoji and styling
    pub fn verbose_step(&self, emoji: &str, message: &str) {
        if self.verbose {
            println!("{} {}", style(emoji).cyan(), style(message).dim());
        }
    }

    /// Print a section header with enhanced styling
    pub fn section_header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().cyan());
        }
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<14} {}", style(key).dim(), value);
        }
    }
}
