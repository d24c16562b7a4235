//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use std::io::{self, Write};

use anyhow::Result;
use tack_core::Note;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a single note in full
    pub fn print_note(&self, note: &Note) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", note.id);
                println!("Title:   {}", note.title);
                println!("Color:   {}", note.color);
                println!("Created: {}", format_millis(note.created_at));
                println!("Updated: {}", format_millis(note.updated_at));
                println!();
                println!("{}", note.content);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(note).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", note.id);
            }
        }
    }

    /// Print a list of notes (one line each)
    pub fn print_notes(&self, notes: &[Note]) {
        match self.format {
            OutputFormat::Human => {
                if notes.is_empty() {
                    println!("No notes yet.");
                    return;
                }
                for note in notes {
                    println!(
                        "{} | {} | {} | {}",
                        short_id(&note.id),
                        format_millis(note.updated_at),
                        truncate(&note.title, 30),
                        truncate_line(&note.content, 40)
                    );
                }
                println!("\n{} note(s)", notes.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(notes).unwrap());
            }
            OutputFormat::Quiet => {
                for note in notes {
                    println!("{}", note.id);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Ask a yes/no question on the terminal
    ///
    /// Returns false when stdin is not a TTY, so piped invocations
    /// never hang waiting for input.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if !atty::is(atty::Stream::Stdin) {
            return Ok(false);
        }

        print!("{} [y/N] ", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Format an epoch-milliseconds timestamp for display
pub fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// First eight characters of an id, for compact listings
pub fn short_id(id: &str) -> &str {
    // Ids are opaque strings, so cut on a char boundary
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Truncate to first line and max length
fn truncate_line(s: &str, max_len: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    truncate(first_line, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_line() {
        assert_eq!(truncate_line("single line", 20), "single line");
        assert_eq!(truncate_line("line one\nline two", 20), "line one");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("note_1"), "note_1");
        assert_eq!(short_id("0123456789abcdef"), "01234567");
    }

    #[test]
    fn test_short_id_multibyte() {
        // Ids can come from a hand-edited notes file
        assert_eq!(short_id("αβγδεζηθικλ"), "αβγδεζηθ");
        assert_eq!(short_id("café-1234567"), "café-123");
        assert_eq!(short_id("αβγ"), "αβγ");
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(0), "1970-01-01 00:00");
    }
}
