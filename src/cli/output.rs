//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the H.E.R.M.E.S CLI.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the H.E.R.M.E.S banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
   {}
   {}
"#,
                " _   _ _____ ____  __  __ _____ ____  ".bright_cyan().bold(),
                "| | | | ____|  _ \\|  \\/  | ____/ ___| ".bright_cyan().bold(),
                "| |_| |  _| | |_) | |\\/| |  _| \\___ \\ ".cyan().bold(),
                "|  _  | |___|  _ <| |  | | |___ ___) |".blue().bold(),
                "|_| |_|_____|_| \\_\\_|  |_|_____|____/ ".blue().bold(),
            );
            println!(
                "   {} {}\n",
                "Hierarchical Engine for Routing Messages to Embedded Sub-agents"
                    .bright_white()
                    .bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                r#"
 _   _ _____ ____  __  __ _____ ____
| | | | ____|  _ \|  \/  | ____/ ___|
| |_| |  _| | |_) | |\/| |  _| \___ \
|  _  | |___|  _ <| |  | | |___ ___) |
|_| |_|_____|_| \_\_|  |_|_____|____/

   Hierarchical Engine for Routing Messages to Embedded Sub-agents v{}
"#,
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print the assistant's answer to a query
    pub fn answer(&self, message: &str) {
        if self.colored {
            println!("{} {}\n", "hermes>".bright_cyan().bold(), message);
        } else {
            println!("hermes> {}\n", message);
        }
    }

    /// Print the interactive prompt (no trailing newline)
    pub fn prompt(&self) {
        if self.colored {
            print!("{} ", "you>".bright_green().bold());
        } else {
            print!("you> ");
        }
        io::stdout().flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_new() {
        let output = Output::new();
        assert!(output.colored);
    }

    #[test]
    fn test_output_no_color() {
        let output = Output::no_color();
        assert!(!output.colored);
    }

    #[test]
    fn test_output_default() {
        let output = Output::default();
        assert!(output.colored);
    }

    #[test]
    fn test_output_methods_no_panic() {
        // Smoke test - ensure none of the output methods panic
        let output = Output::no_color();

        output.success("test success");
        output.info("test info");
        output.warning("test warning");
        output.error("test error");
        output.answer("test answer");
        output.banner();
    }

    #[test]
    fn test_output_methods_colored_no_panic() {
        // Smoke test for colored output
        let output = Output::new();

        output.success("test success");
        output.info("test info");
        output.warning("test warning");
        output.error("test error");
        output.answer("test answer");
        output.banner();
    }
}
