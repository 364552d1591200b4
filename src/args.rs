use core::fmt;

use clap::Parser;
use once_cell::sync::OnceCell;

static ARGS: OnceCell<Args> = OnceCell::new();

#[derive(clap::ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum FeedbackLevel {
    Debug,
    #[default]
    Note,
    Warn,
    Error,
}

impl FeedbackLevel {
    pub fn to_log_level(&self) -> log::LevelFilter {
        match self {
            FeedbackLevel::Debug => log::LevelFilter::Debug,
            FeedbackLevel::Note => log::LevelFilter::Info,
            FeedbackLevel::Warn => log::LevelFilter::Warn,
            FeedbackLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for FeedbackLevel {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedbackLevel::Debug => "debug",
            FeedbackLevel::Note => "note",
            FeedbackLevel::Warn => "warn",
            FeedbackLevel::Error => "error",
        };
        write!(fmt, "{s}")
    }
}

/// Assembly line classifier
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Source file to classify. When a folder is given, hello.asm inside of it is used
    pub target: Option<String>,

    /// Level of classifier feedback
    #[arg(short, long, default_value_t = FeedbackLevel::Note)]
    pub feedback_level: FeedbackLevel,

    /// Suppresses progress output, the classification itself is still printed
    #[arg(short, long, default_value_t = false)]
    pub silent: bool,
}

pub fn get() -> &'static Args {
    ARGS.get().unwrap_or_else(|| {
        log::error!("No arguments parsed");
        crate::terminate!();
    })
}

pub fn exist() -> bool {
    ARGS.get().is_some()
}

pub fn parse() {
    if ARGS.set(Args::parse()).is_err() {
        log::warn!("Arguments were already parsed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["gasm"]);
        assert_eq!(args.target, None);
        assert_eq!(args.feedback_level, FeedbackLevel::Note);
        assert!(!args.silent);
    }

    #[test]
    fn flags() {
        let args = Args::parse_from(["gasm", "-f", "debug", "--silent", "boot.s"]);
        assert_eq!(args.target.as_deref(), Some("boot.s"));
        assert_eq!(args.feedback_level.to_log_level(), log::LevelFilter::Debug);
        assert!(args.silent);

        assert!(Args::try_parse_from(["gasm", "-f", "loud"]).is_err());
    }

    #[test]
    fn level_names() {
        assert_eq!(FeedbackLevel::Warn.to_string(), "warn");
        assert_eq!(FeedbackLevel::Note.to_log_level(), log::LevelFilter::Info);
    }
}
