//! Terminal feedback for the gasm binary
use crate::lexer::LexError;
use colored::{Color, Colorize};
use core::fmt;
use std::path::Path;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Type {
    Note,
    Warn,
    Error,
}
impl Type {
    pub fn colour(&self) -> Color {
        match self {
            Type::Note => Color::Blue,
            Type::Warn => Color::Yellow,
            Type::Error => Color::Red,
        }
    }
    pub fn to_log_level(&self) -> log::Level {
        match self {
            Type::Note => log::Level::Info,
            Type::Warn => log::Level::Warn,
            Type::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!(
            "{: >5}",
            match self {
                Type::Note => "Note",
                Type::Warn => "WARN",
                Type::Error => "ERROR",
            }
        )
        .stylise(*self);
        write!(f, "{text}")
    }
}

trait Stylise {
    fn stylise(&self, msg_type: Type) -> String;
}
impl Stylise for str {
    fn stylise(&self, msg_type: Type) -> String {
        self.color(msg_type.colour()).to_string()
    }
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        {
            log::error!($($arg)*);
            std::process::exit(1);
        }
    };
}

#[macro_export]
macro_rules! terminate {
    () => {
        std::process::exit(1);
    };
}

#[macro_export]
macro_rules! lex_error {
    ($path:expr, $line:expr, $($arg:tt)*) => {
        {
            $crate::feedback::_lex_msg($crate::feedback::Type::Error, format!($($arg)*), $path, $line);
        }
    };
}

#[macro_export]
macro_rules! lex_warn {
    ($path:expr, $line:expr, $($arg:tt)*) => {
        {
            $crate::feedback::_lex_msg($crate::feedback::Type::Warn, format!($($arg)*), $path, $line);
        }
    };
}

#[macro_export]
macro_rules! println_silenceable {
    ($($arg:tt)*) => {
        if !$crate::args::exist() || !$crate::args::get().silent {
            println!($($arg)*);
        }
    };
}

/// Example:
/// ERROR + ./hello.asm:3
///       - stream did not contain valid UTF-8
pub fn format_msg(msg_type: Type, msg: &str, path: &Path, line: Option<usize>) -> String {
    let location = match line {
        Some(line) => format!("{}:{}", path.display(), line),
        None => path.display().to_string(),
    };

    let body = match msg_type {
        Type::Error => msg.red(),
        Type::Warn => msg.yellow(),
        Type::Note => msg.bold(),
    };
    format!("{msg_type} + {location}\n      - {body}")
}

/// Prints a message about the source being classified, if the log level allows it
pub fn _lex_msg(msg_type: Type, msg: String, path: &Path, line: Option<usize>) {
    if log::max_level() < msg_type.to_log_level() {
        return;
    }
    println!();
    println!("{}", format_msg(msg_type, &msg, path, line));
}

/// Reports a failed classification of the file at `path`
pub fn lex_failure(e: &LexError, path: &Path) {
    match e {
        LexError::StreamRead { line, source } => {
            crate::lex_error!(path, Some(*line), "Could not read line. {source}");
        }
        LexError::PatternCompilation { pattern, source } => {
            crate::lex_error!(path, None, "Internal pattern `{pattern}` is invalid. {source}");
        }
    }
}
