//! Process-wide output settings and the stderr message macros.
//!
//! Translations are the only thing written to stdout so the result can be
//! piped. Status lines, warnings and errors go to stderr. Quiet mode hides
//! status lines but never warnings.

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// How user-facing messages are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Hide status lines.
    pub quiet: bool,
    /// Print without ANSI colors.
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the settings from the command-line flags.
    ///
    /// Colors are also disabled when `NO_COLOR` is set (https://no-color.org/).
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Installs the settings for the rest of the process. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// The installed settings, or the `NO_COLOR`-aware defaults if none were installed.
pub fn config() -> OutputConfig {
    *OUTPUT_CONFIG.get_or_init(|| OutputConfig::from_flags(false, false))
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status line to stderr unless quiet.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a `Warning:` line to stderr, even in quiet mode.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!(
            "{} {}",
            $crate::ui::Style::warning("Warning:"),
            format_args!($($arg)*)
        );
    };
}
