//! Styling for the report and validation output.
//!
//! Whether to color at all is decided by `colored`'s own detection, which
//! honours `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and whether stdout is a
//! terminal.

use crate::metrics::Zone;
use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: bool,
    /// Restrict table borders and bars to ASCII
    pub ascii: bool,
}

impl FormattingConfig {
    pub fn detect() -> Self {
        Self {
            color: colored::control::SHOULD_COLORIZE.should_colorize(),
            ascii: false,
        }
    }

    /// ASCII-only, no colors
    pub fn plain() -> Self {
        Self {
            color: false,
            ascii: true,
        }
    }
}

/// Report-shaped styles; every method returns the bare text when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(config: FormattingConfig) -> Self {
        Self {
            color: config.color,
        }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    /// The `warning:` tag in front of scan and alignment warnings.
    pub fn warning_tag(&self) -> String {
        self.paint("warning:", |t| t.yellow())
    }

    /// Count of files off the main sequence; zero is good news.
    pub fn off_sequence_count(&self, count: usize) -> String {
        let text = count.to_string();
        if count > 0 {
            self.paint(&text, |t| t.yellow())
        } else {
            self.paint(&text, |t| t.green())
        }
    }

    pub fn verdict(&self, passed: bool) -> String {
        if passed {
            self.paint("PASSED:", |t| t.green())
        } else {
            self.paint("FAILED:", |t| t.red().bold())
        }
    }

    pub fn zone(&self, zone: Zone) -> String {
        let text = zone.to_string();
        match zone {
            Zone::MainSequence => self.paint(&text, |t| t.green()),
            Zone::ZoneOfPain => self.paint(&text, |t| t.red()),
            Zone::ZoneOfUselessness => self.paint(&text, |t| t.yellow()),
        }
    }
}
