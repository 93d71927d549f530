use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{Assignment, ValidationError};

pub const DEFAULT_ASSIGNMENT_PATH: &str = "assignment.bin";

/// Errors raised while persisting or loading an assignment.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode assignment: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode assignment: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored assignment is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

pub fn serialize(assignment: &Assignment) -> Result<Vec<u8>, LoadError> {
    serde_json::to_vec_pretty(assignment).map_err(LoadError::Encode)
}

/// Decode a blob back into an assignment.
///
/// Only the stored question count is checked here; whether the record can
/// be quizzed on is decided when a quiz starts.
pub fn deserialize(bytes: &[u8]) -> Result<Assignment, LoadError> {
    let assignment: Assignment = serde_json::from_slice(bytes).map_err(LoadError::Decode)?;
    if assignment.question_count != assignment.questions.len() {
        return Err(ValidationError::CountMismatch {
            declared: assignment.question_count,
            actual: assignment.questions.len(),
        }
        .into());
    }
    Ok(assignment)
}

pub fn save_assignment<P: AsRef<Path>>(path: P, assignment: &Assignment) -> Result<(), LoadError> {
    let path = path.as_ref();
    let bytes = serialize(assignment)?;
    fs::write(path, &bytes).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote assignment");
    Ok(())
}

pub fn load_assignment<P: AsRef<Path>>(path: P) -> Result<Assignment, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read assignment file");
    deserialize(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_OPTIONS_PER_QUESTION, Question};
    use pretty_assertions::assert_eq;

    fn sample() -> Assignment {
        Assignment::new(
            2,
            vec![
                Question::new("Capital of France?", "Paris"),
                Question::new("Capital of Spain?", "Madrid"),
                Question::new("Capital of Italy?", "Rome"),
            ],
        )
    }

    #[test]
    fn round_trips_through_bytes() {
        let assignment = sample();
        let bytes = serialize(&assignment).unwrap();
        assert_eq!(deserialize(&bytes).unwrap(), assignment);
    }

    #[test]
    fn round_trips_more_options_than_questions() {
        let assignment = Assignment::new(
            DEFAULT_OPTIONS_PER_QUESTION,
            vec![Question::new("Capital of France?", "Paris")],
        );
        let bytes = serialize(&assignment).unwrap();
        assert_eq!(deserialize(&bytes).unwrap(), assignment);
    }

    #[test]
    fn round_trips_empty_assignment() {
        let assignment = Assignment::new(DEFAULT_OPTIONS_PER_QUESTION, Vec::new());
        let bytes = serialize(&assignment).unwrap();
        assert_eq!(deserialize(&bytes).unwrap(), assignment);
    }

    #[test]
    fn blob_carries_all_record_fields() {
        let bytes = serialize(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["options_per_question"], 2);
        assert_eq!(value["question_count"], 3);
        assert_eq!(value["questions"][0]["text"], "Capital of France?");
        assert_eq!(value["questions"][0]["answer"], "Paris");
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = deserialize(b"\x00\x01not json").unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn inconsistent_record_is_rejected() {
        let blob = br#"{"questions":[{"text":"q","answer":"a"}],"options_per_question":1,"question_count":3}"#;
        let err = deserialize(blob).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(ValidationError::CountMismatch { .. })
        ));
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignment.bin");

        save_assignment(&path, &sample()).unwrap();
        assert_eq!(load_assignment(&path).unwrap(), sample());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.bin");

        let err = load_assignment(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.bin"));
    }
}
