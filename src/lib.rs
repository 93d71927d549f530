//! # gostudy
//!
//! Author flashcard studysets and get quizzed on them with multiple-choice
//! prompts built from the studyset's own answers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gostudy::{App, QuizError, QuizSettings};
//! use gostudy::terminal::StdConsole;
//!
//! fn main() -> Result<(), QuizError> {
//!     let mut app = App::new(StdConsole::stdio());
//!     let outcome = app.quiz(&QuizSettings {
//!         path: "assignment.bin".into(),
//!         seed: None,
//!     })?;
//!     println!("{}", outcome);
//!     Ok(())
//! }
//! ```

mod app;
pub mod cli;
mod config;
pub mod data;
pub mod engine;
mod models;
pub mod terminal;
mod ui;

use std::io;

use thiserror::Error;

pub use app::App;
pub use config::{CreateSettings, QuizSettings};
pub use data::LoadError;
pub use engine::{EngineError, QuizOutcome, QuizSession, ShownOptions};
pub use models::{Assignment, DEFAULT_OPTIONS_PER_QUESTION, Question, QuizPhase, ValidationError};

/// Error type for every command.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error persisting or loading the studyset file.
    #[error("Failed to load studyset: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid studyset: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// IO error on the console.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Expected a whole number but got {input:?}")]
    InvalidNumber { input: String },

    #[error("A filename is required for `{command}`")]
    MissingFilename { command: &'static str },
}

impl QuizError {
    /// Every failure ends the process with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
