//! Operator-facing prompt and notification collaborators.
//!
//! The fetch engine and the commands talk to the operator only through these
//! traits, so tests can script the answers.

use std::io::{self, BufRead, Write};

/// Yes/no confirmation prompt.
pub trait Prompt {
    /// Ask the operator to confirm; `false` aborts the session.
    fn confirm(&self, message: &str) -> bool;
}

/// Title/message notification surface.
pub trait Notifier {
    /// Show the operator a titled message.
    fn notify(&self, title: &str, message: &str);
}

/// Interactive prompt on the controlling terminal.
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{message} [y/N] ");
        let _ = stderr.flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        parse_answer(&line)
    }
}

/// Notifier that emits alerts through the log stream.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, message: &str) {
        tracing::info!(target: "alert", "{title}: {message}");
    }
}

/// Anything but an explicit yes is a no.
fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
