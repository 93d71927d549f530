use std::io::{self, Write};

use crossterm::style::Color;

use super::Theme;

pub fn render_usage<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    writeln!(
        out,
        "You must enter an argument: {} to create a new studyset, or {} to study an existing one.",
        theme.strong("create", Color::Green),
        theme.strong("quiz <filename>", Color::Green)
    )
}
