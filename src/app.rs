use std::io::{BufRead, Write};
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::QuizError;
use crate::cli::Command;
use crate::config::{CreateSettings, QuizSettings};
use crate::data::{load_assignment, save_assignment};
use crate::engine::{QuizOutcome, run_quiz};
use crate::models::{Assignment, Question, ValidationError};
use crate::terminal::Console;
use crate::ui;

/// Runs one command against a console, from first prompt to final output.
pub struct App<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self { console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub fn run(&mut self, command: Option<Command>) -> Result<(), QuizError> {
        match command {
            None => {
                let theme = self.console.theme();
                ui::welcome::render_usage(self.console.writer(), theme)?;
                Ok(())
            }
            Some(Command::Create { options, output }) => {
                let settings = CreateSettings {
                    options_per_question: options,
                    output,
                };
                self.create(&settings).map(|_| ())
            }
            Some(Command::Quiz { filename, seed }) => {
                let path = filename.ok_or(QuizError::MissingFilename { command: "quiz" })?;
                self.quiz(&QuizSettings { path, seed }).map(|_| ())
            }
            Some(Command::DebugRead { filename }) => {
                let path = filename.ok_or(QuizError::MissingFilename {
                    command: "debugread",
                })?;
                self.debug_read(&path)
            }
        }
    }

    /// Prompt for a studyset and write it to `settings.output`.
    pub fn create(&mut self, settings: &CreateSettings) -> Result<Assignment, QuizError> {
        writeln!(self.console.writer(), "Specify the total number of questions.")?;
        let count: usize = self.console.read_number()?;
        if settings.options_per_question == 0 {
            return Err(ValidationError::ZeroOptions.into());
        }
        if count < settings.options_per_question {
            return Err(ValidationError::TooManyOptions {
                options: settings.options_per_question,
                questions: count,
            }
            .into());
        }

        let mut questions = Vec::new();
        for index in 0..count {
            let text = self.console.prompt("Enter the question.")?;
            let answer = self.console.prompt("Enter the correct answer.")?;
            debug!(index, "question recorded");
            questions.push(Question::new(text, answer));
        }

        let assignment = Assignment::new(settings.options_per_question, questions);
        assignment.validate()?;
        save_assignment(&settings.output, &assignment)?;

        info!(
            path = %settings.output.display(),
            questions = assignment.question_count,
            "studyset created"
        );
        writeln!(
            self.console.writer(),
            "Created studyset written to {}.",
            settings.output.display()
        )?;
        Ok(assignment)
    }

    pub fn quiz(&mut self, settings: &QuizSettings) -> Result<QuizOutcome, QuizError> {
        let mut assignment = load_assignment(&settings.path)?;
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(path = %settings.path.display(), seed = ?settings.seed, "starting quiz");
        run_quiz(&mut assignment, &mut self.console, &mut rng)
    }

    pub fn debug_read(&mut self, path: &Path) -> Result<(), QuizError> {
        let assignment = load_assignment(path)?;
        let theme = self.console.theme();
        ui::debug::render_assignment(self.console.writer(), theme, &assignment)?;
        Ok(())
    }
}
