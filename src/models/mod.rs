mod assignment;
mod question;

pub use assignment::{Assignment, DEFAULT_OPTIONS_PER_QUESTION, ValidationError};
pub use question::Question;

/// Where a single quiz run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    Shuffled,
    /// Question at this index (in shuffled order) is next to be asked.
    Presenting(usize),
    Finished { score: usize },
}
