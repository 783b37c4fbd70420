//! Terminal styling helpers shared by the CLI commands

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};

/// Green check mark for success lines
pub fn check() -> String {
    "✓".if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

/// Red cross for error lines
pub fn cross() -> String {
    "✗".if_supports_color(Stream::Stderr, |t| t.red())
        .to_string()
}

/// Spinner style for in-flight requests
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Styled text extensions used across the CLI
pub trait Stylize {
    /// Highlighted value (URLs, field values)
    fn accent(&self) -> String;
    /// De-emphasized detail text
    fn muted(&self) -> String;
    /// Success-styled text
    fn success(&self) -> String;
    /// Error-styled text
    fn error(&self) -> String;
}

impl<T: AsRef<str>> Stylize for T {
    fn accent(&self) -> String {
        self.as_ref()
            .if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    }

    fn muted(&self) -> String {
        self.as_ref()
            .if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    fn success(&self) -> String {
        self.as_ref()
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }

    fn error(&self) -> String {
        self.as_ref()
            .if_supports_color(Stream::Stderr, |t| t.red())
            .to_string()
    }
}
