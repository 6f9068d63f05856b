//! Console logger. Lines read
//! `date time - file - module - LEVEL - message`, with each field colored on
//! its own when color is enabled.

use std::io::Write;
use std::path::Path;

use crossterm::style::{StyledContent, Stylize};
use env_logger::WriteStyle;
use log::{Level, Record};

use crate::config::Settings;
use crate::error::CatalogResult;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// The fields of one log line, already reduced to text.
#[derive(Debug, Clone, Copy)]
pub struct LineParts<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub file: &'a str,
    pub module: &'a str,
    pub level: Level,
    pub message: &'a str,
}

/// Install the global logger configured by `settings`. Fails if another
/// logger already owns the `log` facade.
pub fn init(settings: &Settings) -> CatalogResult<()> {
    let color = settings.color;
    let write_style = if color {
        WriteStyle::Always
    } else {
        WriteStyle::Never
    };
    env_logger::Builder::new()
        .filter_level(settings.level)
        .write_style(write_style)
        .format(move |buf, record| {
            let now = chrono::Local::now();
            let date = now.format(DATE_FORMAT).to_string();
            let time = now.format(TIME_FORMAT).to_string();
            let message = record.args().to_string();
            let parts = LineParts {
                date: &date,
                time: &time,
                file: file_name(record),
                module: record.module_path().unwrap_or(record.target()),
                level: record.level(),
                message: &message,
            };
            writeln!(buf, "{}", format_line(&parts, color))
        })
        .try_init()?;
    Ok(())
}

/// Render a log line, plain or with ANSI colors.
pub fn format_line(parts: &LineParts<'_>, color: bool) -> String {
    if !color {
        return format!(
            "{} {} - {} - {} - {} - {}",
            parts.date, parts.time, parts.file, parts.module, parts.level, parts.message
        );
    }

    format!(
        "{} {} - {} - {} - {} - {}",
        parts.date.dark_cyan(),
        parts.time.cyan(),
        parts.file.yellow(),
        parts.module.magenta(),
        level_style(parts.level),
        parts.message.white()
    )
}

fn level_style(level: Level) -> StyledContent<String> {
    let name = level.to_string();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.magenta(),
    }
}

/// Source file name without its directories, or the target when the record
/// carries no location.
fn file_name<'a>(record: &Record<'a>) -> &'a str {
    record
        .file()
        .and_then(|file| Path::new(file).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(record.target())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(level: Level) -> LineParts<'static> {
        LineParts {
            date: "2024-05-01",
            time: "09:30:00",
            file: "lending.rs",
            module: "library_catalog::library::lending",
            level,
            message: "Success! Ishaan has borrowed the book: 1984",
        }
    }

    #[test]
    fn plain_line_layout() {
        assert_eq!(
            format_line(&sample(Level::Info), false),
            "2024-05-01 09:30:00 - lending.rs - library_catalog::library::lending - INFO - \
             Success! Ishaan has borrowed the book: 1984"
        );
        assert!(format_line(&sample(Level::Warn), false).contains(" - WARN - "));
    }

    #[test]
    fn colored_line_keeps_fields() {
        let line = format_line(&sample(Level::Warn), true);
        assert!(line.contains("2024-05-01"));
        assert!(line.contains("09:30:00"));
        assert!(line.contains("WARN"));
        assert!(line.contains("Success! Ishaan has borrowed the book: 1984"));
        // crossterm honors NO_COLOR and drops the escapes on its own.
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(line.contains("\u{1b}["));
            assert_ne!(line, format_line(&sample(Level::Warn), false));
        }
    }

    #[test]
    fn file_name_strips_directories() {
        let record = Record::builder()
            .file(Some("src/library/lending.rs"))
            .target("library_catalog")
            .build();
        assert_eq!(file_name(&record), "lending.rs");

        let bare = Record::builder().target("library_catalog").build();
        assert_eq!(file_name(&bare), "library_catalog");
    }
}
