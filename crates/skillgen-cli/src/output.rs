//! User-facing console output.
//!
//! Results and next steps go to stdout; problems go to stderr as a single line.

use crossterm::style::{Color, ResetColor, SetForegroundColor};

#[derive(Debug, Clone, Copy)]
pub struct Output {
    color: bool,
}

impl Output {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.color {
            format!("{}{}{}", SetForegroundColor(color), text, ResetColor)
        } else {
            text.to_string()
        }
    }

    pub fn print(&self, message: &str) {
        println!("{}", message);
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", self.paint(Color::Green, "✔"), message);
    }

    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", self.paint(Color::Yellow, "!"), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.paint(Color::Red, "error:"), message);
    }
}

/// Lines printed after a skill is created.
pub fn next_steps(name: &str) -> Vec<String> {
    vec![
        "Next steps:".to_string(),
        format!("  1. Edit {}/SKILL.md and refine the description", name),
        "  2. Fill in the instruction sections".to_string(),
        "  3. Add scripts, references and assets as needed".to_string(),
    ]
}
