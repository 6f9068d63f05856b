//! Command-line flags and the runtime settings they resolve to. The binary is
//! the only caller of `Cli`; everything below it takes a `Settings` so tests
//! can pin color and timing without touching the real terminal.

use std::io;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use log::LevelFilter;

/// When log lines get ANSI colors.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    /// Color only when stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Library catalog demo: lends and returns books from a seeded catalog
#[derive(Parser, Debug)]
#[command(name = "library-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Color output mode
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Never colorize log lines (same as `--color never`)
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Simulated processing time while registering members and assigning books
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub processing_delay_ms: u64,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only show warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Resolved runtime settings. Kept separate from `Cli` so tests and library
/// callers can build one without going through argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether log lines carry ANSI colors. This also picks the logger's write
    /// style, so `false` strips any escapes that reach the output.
    pub color: bool,
    /// Pause taken while registering a member and again while assigning them
    /// a book. Zero means no sleep at all.
    pub processing_delay: Duration,
    /// Most verbose level the logger lets through.
    pub level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: false,
            processing_delay: Duration::ZERO,
            level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Resolve flags against the terminal. Color needs stderr to be a tty
    /// since that is where log lines go.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, io::stderr().is_terminal())
    }

    fn resolve(cli: &Cli, stderr_is_tty: bool) -> Self {
        let level = if cli.quiet {
            LevelFilter::Warn
        } else {
            match cli.verbose {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        let color = match (cli.no_color, cli.color) {
            (true, _) | (false, ColorWhen::Never) => false,
            (false, ColorWhen::Always) => true,
            (false, ColorWhen::Auto) => stderr_is_tty,
        };

        Self {
            color,
            processing_delay: Duration::from_millis(cli.processing_delay_ms),
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("library-catalog").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_plain_run() {
        let settings = Settings::resolve(&parse(&[]), false);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn color_follows_tty_unless_disabled() {
        assert!(Settings::resolve(&parse(&[]), true).color);
        assert!(!Settings::resolve(&parse(&["--no-color"]), true).color);
    }

    #[test]
    fn explicit_color_mode_overrides_tty_check() {
        assert!(Settings::resolve(&parse(&["--color", "always"]), false).color);
        assert!(!Settings::resolve(&parse(&["--color", "never"]), true).color);
        assert!(Settings::resolve(&parse(&["--color", "auto"]), true).color);
        assert!(Cli::try_parse_from(["library-catalog", "--no-color", "--color", "always"]).is_err());
    }

    #[test]
    fn verbosity_and_quiet_pick_level() {
        assert_eq!(Settings::resolve(&parse(&["-v"]), false).level, LevelFilter::Debug);
        assert_eq!(Settings::resolve(&parse(&["-vvv"]), false).level, LevelFilter::Trace);
        assert_eq!(Settings::resolve(&parse(&["-q"]), false).level, LevelFilter::Warn);
        assert!(Cli::try_parse_from(["library-catalog", "-q", "-v"]).is_err());
    }

    #[test]
    fn delay_is_read_in_milliseconds() {
        let settings = Settings::resolve(&parse(&["--processing-delay-ms", "250"]), false);
        assert_eq!(settings.processing_delay, Duration::from_millis(250));
    }
}
