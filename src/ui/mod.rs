//! Plain-text rendering for the interactive flows.
//!
//! Labels carry terminal colors only when the theme allows it; question and
//! answer text is always written unchanged.

pub mod debug;
pub mod quiz;
pub mod result;
pub mod welcome;

use std::env;
use std::fmt::Display;
use std::io;

use crossterm::style::{Color, Stylize, style};
use crossterm::tty::IsTty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub const PLAIN: Theme = Theme { color: false };

    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Theme {
            color: io::stdout().is_tty() && env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn paint<D: Display>(self, content: D, color: Color) -> String {
        if self.color {
            style(content).with(color).to_string()
        } else {
            content.to_string()
        }
    }

    pub fn strong<D: Display>(self, content: D, color: Color) -> String {
        if self.color {
            style(content).with(color).bold().to_string()
        } else {
            content.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_writes_no_escapes() {
        assert_eq!(Theme::PLAIN.strong("3/4", Color::Green), "3/4");
        assert_eq!(Theme::PLAIN.paint("[0]", Color::Yellow), "[0]");
    }
}
