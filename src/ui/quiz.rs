use std::io::{self, Write};

use crossterm::style::Color;

use super::Theme;
use crate::engine::ShownOptions;

const ANSWER_HINT: &str = "(Enter the number of the answer you believe to be correct).";

pub fn render_question<W: Write>(
    out: &mut W,
    theme: Theme,
    text: &str,
    shown: &ShownOptions,
) -> io::Result<()> {
    writeln!(out, "{} {}", theme.strong("Question:", Color::Cyan), text)?;
    for (slot, option) in shown.options.iter().enumerate() {
        writeln!(out, "{}{}", theme.paint(format!("[{}]", slot), Color::Yellow), option)?;
    }
    writeln!(out, "{}", theme.paint(ANSWER_HINT, Color::DarkGrey))
}

pub fn render_feedback<W: Write>(out: &mut W, theme: Theme, correct: bool) -> io::Result<()> {
    if correct {
        writeln!(out, "{}", theme.strong("Correct", Color::Green))
    } else {
        writeln!(out, "{}", theme.strong("Incorrect", Color::Red))
    }
}
