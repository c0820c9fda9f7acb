//! Output rendering for the tutor chat.
//!
//! This module provides the renderer trait and a plain-text
//! implementation used by the REPL binary. Rendering is stateless with
//! respect to the conversation: the renderer only ever receives
//! snapshots of turns and status strings.

use std::io::{self, Stdout, Write};

use crate::types::{Turn, TurnRole};

/// ANSI escape code for cyan text (used for the tutor label).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for green text (used for the student label).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for dim text (used for informational notices).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies: plain
/// text with ANSI styling, plain text without styling (for piping or
/// redirecting), or a future TUI.
pub trait Renderer: Send {
    /// Print a conversation turn with its author label.
    fn print_turn(&mut self, turn: &Turn);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Flushes stdout to ensure immediate display.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn styled(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{code}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_turn(&mut self, turn: &Turn) {
        let label = match turn.role {
            TurnRole::User => self.styled(ANSI_GREEN, "Tú:"),
            TurnRole::Model => self.styled(ANSI_CYAN, "Tutor:"),
        };
        println!("{label} {}", turn.content);
        println!();
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        println!("{}", self.styled(ANSI_DIM, info));
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("{}", self.styled(ANSI_RED, error));
        self.flush();
    }
}
