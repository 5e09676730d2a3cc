//! Text report formatting and console display
//!
//! `ReportFormatter` renders a walk result as the text report: a banner
//! header carrying the generation timestamp and the folder/file totals,
//! followed by the tree lines. `format` produces the plain text written to
//! disk; `print` writes the same report to stdout with the banner and title
//! colorized.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::WalkResult;

const BANNER_WIDTH: usize = 60;
const TITLE: &str = "treesnap - Visual Directory Tree Generator";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formatter for the visual tree report.
pub struct ReportFormatter {
    use_color: bool,
    generated_at: DateTime<Local>,
}

impl ReportFormatter {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            generated_at: Local::now(),
        }
    }

    /// Pin the header timestamp instead of using the current time.
    pub fn with_timestamp(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = at;
        self
    }

    pub fn format(&self, result: &WalkResult) -> String {
        let mut output = String::new();
        for line in self.header(result) {
            output.push_str(&line);
            output.push('\n');
        }
        for line in &result.lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }

    pub fn print(&self, result: &WalkResult) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let banner = "=".repeat(BANNER_WIDTH);

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(stdout, "{}", banner)?;
        writeln!(stdout, "{}", TITLE)?;
        writeln!(stdout, "{}", banner)?;
        stdout.reset()?;

        writeln!(
            stdout,
            "Generated on: {}",
            self.generated_at.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(stdout, "Total folders: {}", result.folders)?;
        writeln!(stdout, "Total files: {}", result.files)?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(stdout, "{}", banner)?;
        stdout.reset()?;
        writeln!(stdout)?;

        for line in &result.lines {
            writeln!(stdout, "{}", line)?;
        }
        Ok(())
    }

    fn header(&self, result: &WalkResult) -> [String; 8] {
        let banner = "=".repeat(BANNER_WIDTH);
        [
            banner.clone(),
            TITLE.to_string(),
            banner.clone(),
            format!(
                "Generated on: {}",
                self.generated_at.format(TIMESTAMP_FORMAT)
            ),
            format!("Total folders: {}", result.folders),
            format!("Total files: {}", result.files),
            banner,
            String::new(),
        ]
    }
}
