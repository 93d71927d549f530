use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::data::DEFAULT_ASSIGNMENT_PATH;
use crate::models::DEFAULT_OPTIONS_PER_QUESTION;

#[derive(Parser, Debug)]
#[command(name = "gostudy", version, about = "Flashcard quizzes in the terminal", long_about = None)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Author a new studyset question by question
    Create {
        /// Options shown for each question
        #[arg(long, default_value_t = DEFAULT_OPTIONS_PER_QUESTION)]
        options: usize,

        /// Where to write the studyset
        #[arg(short, long, default_value = DEFAULT_ASSIGNMENT_PATH)]
        output: PathBuf,
    },

    /// Take a multiple-choice quiz on a studyset
    Quiz {
        filename: Option<PathBuf>,

        /// Seed for question order and options
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print every question and answer in a studyset
    #[command(name = "debugread")]
    DebugRead { filename: Option<PathBuf> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_arguments_means_no_command() {
        let cli = Cli::try_parse_from(["gostudy"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn create_defaults_to_four_options() {
        let cli = Cli::try_parse_from(["gostudy", "create"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Create {
                options: 4,
                output: PathBuf::from("assignment.bin"),
            })
        );
    }

    #[test]
    fn quiz_accepts_missing_filename() {
        let cli = Cli::try_parse_from(["gostudy", "quiz"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Quiz {
                filename: None,
                seed: None
            })
        );
    }

    #[test]
    fn debugread_keeps_its_name() {
        let cli = Cli::try_parse_from(["gostudy", "-v", "debugread", "set.bin"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Some(Command::DebugRead {
                filename: Some(PathBuf::from("set.bin"))
            })
        );
    }
}
