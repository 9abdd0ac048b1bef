/// Output formatting: human-readable and JSON (NDJSON) modes.
///
/// Every command writes one record per result to stdout:
///
/// - **Human mode** (default): a single plain line. Verdicts from `validate`
///   are color-coded when colors are enabled. Colors are disabled when
///   `--no-color` is set, the `NO_COLOR` environment variable is present
///   (per <https://no-color.org>), or stdout is not a TTY.
/// - **JSON mode**: each record is serialized as a single-line JSON object.
use std::io::{self, IsTerminal as _, Write};

use serde::Serialize;

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}

// ---------------------------------------------------------------------------
// ANSI escape sequences
// ---------------------------------------------------------------------------

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

/// Wraps a validation verdict in green (accepted) or red (rejected).
pub fn paint_verdict(text: &str, accepted: bool, colors: bool) -> String {
    if !colors {
        return text.to_owned();
    }
    let color = if accepted { ANSI_GREEN } else { ANSI_RED };
    format!("{color}{text}{ANSI_RESET}")
}

// ---------------------------------------------------------------------------
// FormatMode
// ---------------------------------------------------------------------------

/// Output mode resolved from `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// One plain line per record.
    Human,
    /// One JSON object per line.
    Json,
}

impl From<&OutputFormat> for FormatMode {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
        }
    }
}

// ---------------------------------------------------------------------------
// Record writer
// ---------------------------------------------------------------------------

/// Writes one result: `human` as a line in human mode, `record` as a compact
/// JSON line in JSON mode.
///
/// # Errors
///
/// Returns an [`io::Error`] if writing to `w` fails or `record` cannot be
/// serialized.
pub fn write_record<W: Write, T: Serialize>(
    w: &mut W,
    mode: FormatMode,
    human: &str,
    record: &T,
) -> io::Result<()> {
    match mode {
        FormatMode::Human => writeln!(w, "{human}"),
        FormatMode::Json => {
            serde_json::to_writer(&mut *w, record)?;
            writeln!(w)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[derive(Serialize)]
    struct Sample<'a> {
        kind: &'a str,
        value: &'a str,
    }

    fn render(mode: FormatMode) -> String {
        let mut buf = Vec::new();
        let record = Sample {
            kind: "cpf",
            value: "681.113.352-02",
        };
        write_record(&mut buf, mode, "681.113.352-02", &record).expect("write");
        String::from_utf8(buf).expect("utf-8")
    }

    #[test]
    fn human_mode_writes_plain_line() {
        assert_eq!(render(FormatMode::Human), "681.113.352-02\n");
    }

    #[test]
    fn json_mode_writes_one_object_per_line() {
        let out = render(FormatMode::Json);
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(out.trim_end()).expect("json");
        assert_eq!(parsed["kind"], "cpf");
        assert_eq!(parsed["value"], "681.113.352-02");
    }

    #[test]
    fn verdict_colors_only_when_enabled() {
        assert_eq!(paint_verdict("valid", true, false), "valid");
        let green = paint_verdict("valid", true, true);
        assert!(green.starts_with(ANSI_GREEN) && green.ends_with(ANSI_RESET));
        let red = paint_verdict("invalid", false, true);
        assert!(red.starts_with(ANSI_RED));
    }

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!colors_enabled(true));
    }

    #[test]
    fn output_format_maps_to_mode() {
        assert_eq!(FormatMode::from(&OutputFormat::Human), FormatMode::Human);
        assert_eq!(FormatMode::from(&OutputFormat::Json), FormatMode::Json);
    }
}
