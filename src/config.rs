//! Settings for each command, filled from the command line.

use std::path::PathBuf;

use crate::data::DEFAULT_ASSIGNMENT_PATH;
use crate::models::DEFAULT_OPTIONS_PER_QUESTION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSettings {
    pub options_per_question: usize,
    pub output: PathBuf,
}

impl Default for CreateSettings {
    fn default() -> Self {
        Self {
            options_per_question: DEFAULT_OPTIONS_PER_QUESTION,
            output: PathBuf::from(DEFAULT_ASSIGNMENT_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub path: PathBuf,
    /// Fixed seed for a reproducible run; entropy when absent.
    pub seed: Option<u64>,
}
