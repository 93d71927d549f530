use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Question;

/// Number of options shown per question when the author does not choose one.
pub const DEFAULT_OPTIONS_PER_QUESTION: usize = 4;

/// A full quiz: the question list plus display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub questions: Vec<Question>,
    pub options_per_question: usize,
    pub question_count: usize,
}

/// Ways an assignment can break its at-rest invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("assignment has no questions")]
    Empty,

    #[error("question count is {declared} but {actual} questions are stored")]
    CountMismatch { declared: usize, actual: usize },

    #[error("options per question must be at least 1")]
    ZeroOptions,

    /// More options than questions means the distractor pool cannot fill every slot.
    #[error("{options} options per question requested but only {questions} questions exist")]
    TooManyOptions { options: usize, questions: usize },
}

impl Assignment {
    /// Aggregate questions into an assignment. `question_count` always
    /// mirrors the number of questions passed in.
    pub fn new(options_per_question: usize, questions: Vec<Question>) -> Self {
        let question_count = questions.len();
        Self {
            questions,
            options_per_question,
            question_count,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.questions.is_empty() {
            return Err(ValidationError::Empty);
        }
        if self.question_count != self.questions.len() {
            return Err(ValidationError::CountMismatch {
                declared: self.question_count,
                actual: self.questions.len(),
            });
        }
        if self.options_per_question == 0 {
            return Err(ValidationError::ZeroOptions);
        }
        if self.options_per_question > self.question_count {
            return Err(ValidationError::TooManyOptions {
                options: self.options_per_question,
                questions: self.question_count,
            });
        }
        Ok(())
    }

    /// Answers of every question whose text differs from `correct`.
    pub fn distractor_pool<'a>(&'a self, correct: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.questions
            .iter()
            .map(|question| question.answer.as_str())
            .filter(move |answer| *answer != correct)
    }
}
