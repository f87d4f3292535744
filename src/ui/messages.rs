//! One-line coloured status messages for the admin CLI.
//!
//! Everything goes to stdout except [`error`], which writes to stderr so
//! scripted callers can tell failures apart.

use crate::utils::colors::{BOLD, CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (CYAN, "ℹ️"),
            Level::Success => (GREEN, "✅"),
            Level::Warning => (YELLOW, "⚠️"),
            Level::Error => (RED, "❌"),
        }
    }
}

fn line(level: Level, msg: &dyn fmt::Display) -> String {
    let (color, icon) = level.style();
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, &msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, &msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, &msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, &msg));
}

/// Section title underlined to its own width.
pub fn header<T: fmt::Display>(title: T) {
    let title = title.to_string();
    println!("\n{CYAN}{BOLD}{title}{RESET}");
    println!("{CYAN}{}{RESET}", "─".repeat(title.chars().count()));
}
