//! Quiz engine: distractor selection, shuffling and scoring.
//!
//! Randomness is always passed in, so a seeded generator gives a fully
//! reproducible run.

mod distractors;
mod session;

use thiserror::Error;

use crate::models::ValidationError;

pub use distractors::{ShownOptions, select_distractors};
pub use session::{QuizOutcome, QuizSession, present_question, run_quiz};

#[derive(Debug, Error)]
pub enum EngineError {
    /// Every question shares the correct answer, so no slot can hold a wrong one.
    #[error("no distractor available for answer {answer:?}")]
    NoDistractors { answer: String },

    #[error("cannot {action} while quiz is {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: &'static str,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
