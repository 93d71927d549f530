use std::fmt;
use std::io::{BufRead, Write};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::{EngineError, select_distractors};
use crate::QuizError;
use crate::models::{Assignment, Question, QuizPhase};
use crate::terminal::Console;
use crate::ui;

/// Final tally of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for QuizOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

/// Ask one question and report whether the chosen slot was the correct one.
pub fn present_question<R, W, G>(
    question: &Question,
    assignment: &Assignment,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<bool, QuizError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let shown = select_distractors(assignment, &question.answer, rng)?;
    let theme = console.theme();
    ui::quiz::render_question(console.writer(), theme, &question.text, &shown)?;

    let selected: i64 = console.read_number()?;
    debug!(selected, correct_slot = shown.correct_slot, "answer submitted");
    Ok(shown.is_correct(selected))
}

/// A single pass over an assignment.
///
/// Moves strictly forward: `NotStarted`, `Shuffled`, one `Presenting` step
/// per question, then `Finished`.
pub struct QuizSession<'a> {
    assignment: &'a mut Assignment,
    phase: QuizPhase,
    score: usize,
}

impl<'a> QuizSession<'a> {
    pub fn new(assignment: &'a mut Assignment) -> Result<Self, EngineError> {
        assignment.validate()?;
        Ok(Self {
            assignment,
            phase: QuizPhase::NotStarted,
            score: 0,
        })
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.assignment.questions
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Finished { .. })
    }

    /// Reorder the questions with a uniform random permutation.
    pub fn shuffle<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), EngineError> {
        if self.phase != QuizPhase::NotStarted {
            return Err(self.invalid("shuffle"));
        }
        self.assignment.questions.shuffle(rng);
        self.phase = QuizPhase::Shuffled;
        debug!(questions = self.assignment.question_count, "questions shuffled");
        Ok(())
    }

    /// Present the next question and record the result.
    pub fn present_next<R, W, G>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<bool, QuizError>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let index = match self.phase {
            QuizPhase::Shuffled => 0,
            QuizPhase::Presenting(index) => index,
            _ => return Err(self.invalid("present a question").into()),
        };

        let question = &self.assignment.questions[index];
        let correct = present_question(question, &*self.assignment, console, rng)?;
        if correct {
            self.score += 1;
        }

        self.phase = if index + 1 < self.assignment.question_count {
            QuizPhase::Presenting(index + 1)
        } else {
            QuizPhase::Finished { score: self.score }
        };
        Ok(correct)
    }

    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.phase {
            QuizPhase::Finished { score } => Some(QuizOutcome {
                score,
                total: self.assignment.question_count,
            }),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> EngineError {
        let phase = match self.phase {
            QuizPhase::NotStarted => "not started",
            QuizPhase::Shuffled => "shuffled",
            QuizPhase::Presenting(_) => "presenting",
            QuizPhase::Finished { .. } => "finished",
        };
        EngineError::InvalidPhase { action, phase }
    }
}

/// Shuffle the assignment, ask every question once and print the score.
pub fn run_quiz<R, W, G>(
    assignment: &mut Assignment,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<QuizOutcome, QuizError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let theme = console.theme();
    let mut session = QuizSession::new(assignment)?;
    session.shuffle(rng)?;

    while !session.is_finished() {
        let correct = session.present_next(console, rng)?;
        ui::quiz::render_feedback(console.writer(), theme, correct)?;
    }

    let outcome = session
        .outcome()
        .ok_or_else(|| EngineError::InvalidPhase {
            action: "score",
            phase: "unfinished",
        })?;
    ui::result::render_score(console.writer(), theme, &outcome)?;
    Ok(outcome)
}
