use std::io::{self, Write};

use crossterm::style::Color;

use super::Theme;
use crate::engine::QuizOutcome;

/// How well a studyset is known after one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recall {
    Mastered,
    Solid,
    Shaky,
    NeedsReview,
}

impl Recall {
    fn of(outcome: &QuizOutcome) -> Self {
        if outcome.total == 0 || outcome.score * 2 < outcome.total {
            return Recall::NeedsReview;
        }
        if outcome.score == outcome.total {
            Recall::Mastered
        } else if outcome.score * 4 >= outcome.total * 3 {
            Recall::Solid
        } else {
            Recall::Shaky
        }
    }

    fn color(self) -> Color {
        match self {
            Recall::Mastered => Color::Green,
            Recall::Solid => Color::Cyan,
            Recall::Shaky => Color::Yellow,
            Recall::NeedsReview => Color::Red,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Recall::Mastered => "mastered",
            Recall::Solid => "solid",
            Recall::Shaky => "shaky",
            Recall::NeedsReview => "needs review",
        }
    }
}

pub fn render_score<W: Write>(out: &mut W, theme: Theme, outcome: &QuizOutcome) -> io::Result<()> {
    let recall = Recall::of(outcome);
    writeln!(
        out,
        "You finished with a {} ({})",
        theme.strong(outcome, recall.color()),
        recall.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outcome(score: usize, total: usize) -> QuizOutcome {
        QuizOutcome { score, total }
    }

    #[test]
    fn recall_bands() {
        assert_eq!(Recall::of(&outcome(4, 4)), Recall::Mastered);
        assert_eq!(Recall::of(&outcome(3, 4)), Recall::Solid);
        assert_eq!(Recall::of(&outcome(2, 4)), Recall::Shaky);
        assert_eq!(Recall::of(&outcome(1, 4)), Recall::NeedsReview);
        assert_eq!(Recall::of(&outcome(0, 0)), Recall::NeedsReview);
    }

    #[test]
    fn plain_score_line_is_exact() {
        let mut out = Vec::new();
        render_score(&mut out, Theme::PLAIN, &outcome(3, 4)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "You finished with a 3/4 (solid)\n"
        );
    }

    #[test]
    fn colored_score_line_keeps_fraction_together() {
        let mut out = Vec::new();
        render_score(&mut out, Theme { color: true }, &outcome(4, 4)).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("4/4"));
    }
}
