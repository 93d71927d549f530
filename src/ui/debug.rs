use std::io::{self, Write};

use crossterm::style::Color;

use super::Theme;
use crate::models::Assignment;

/// Dump every question and answer verbatim, in stored order.
pub fn render_assignment<W: Write>(
    out: &mut W,
    theme: Theme,
    assignment: &Assignment,
) -> io::Result<()> {
    for question in &assignment.questions {
        writeln!(out, "{}", theme.strong("QUESTION:", Color::Cyan))?;
        writeln!(out, "{}", question.text)?;
        writeln!(out, "{}", theme.strong("ANSWER:", Color::Green))?;
        writeln!(out, "{}", question.answer)?;
    }
    Ok(())
}
