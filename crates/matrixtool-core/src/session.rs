//! Session state shared by the UI: the current result and the status line.
//!
//! The text areas stay the source of truth for the operands. A session only
//! remembers the last successful [`Outcome`], which each action replaces
//! wholesale, and a [`Status`] describing what happened last. Rendering is a
//! pure function of these two values.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::csv_io::{load_grid, save_outcome};
use crate::engine::{Operand, Operation, Outcome, evaluate};
use crate::format::grid_to_source_text;
use crate::grid::Shape;
use crate::MatrixResult;

/// What the status bar shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Ready,
    MatrixResult(Shape),
    ScalarResult(&'static str),
    ExampleFilled,
    Cleared,
    Copied,
    Saved(PathBuf),
    Loaded(Operand, PathBuf),
    Error(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => f.write_str("Ready"),
            Status::MatrixResult(shape) => write!(f, "Result: {shape} matrix"),
            Status::ScalarResult(label) => write!(f, "{label} shown"),
            Status::ExampleFilled => f.write_str("Example matrices filled"),
            Status::Cleared => f.write_str("Cleared"),
            Status::Copied => f.write_str("Result copied to clipboard"),
            Status::Saved(path) => write!(f, "Saved result to {}", path.display()),
            Status::Loaded(operand, path) => {
                write!(f, "Loaded {} from {}", operand, path.display())
            }
            Status::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Current result plus status.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Outcome>,
    status: Status,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Outcome> {
        self.current.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Runs an operation on the given texts.
    ///
    /// On success the result replaces the current one. On failure the
    /// previous result stays and the status shows the error.
    pub fn run(
        &mut self,
        operation: Operation,
        a_text: &str,
        b_text: &str,
        selected: Operand,
    ) -> MatrixResult<&Outcome> {
        match evaluate(operation, a_text, b_text, selected) {
            Ok(outcome) => {
                self.status = match &outcome {
                    Outcome::Matrix(grid) => Status::MatrixResult(grid.shape()),
                    Outcome::Scalar(_) => Status::ScalarResult(operation.display_name()),
                };
                Ok(&*self.current.insert(outcome))
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Records an error in the status line and hands it back.
    pub fn fail<E: std::error::Error>(&mut self, error: E) -> E {
        warn!("{}", error);
        self.status = Status::Error(error.to_string());
        error
    }

    /// Drops the current result.
    pub fn clear(&mut self) {
        self.current = None;
        self.status = Status::Cleared;
    }

    pub fn mark_example_filled(&mut self) {
        self.status = Status::ExampleFilled;
    }

    /// Text to place on the clipboard, if there is a result.
    pub fn copy_text(&self) -> Option<String> {
        self.current.as_ref().map(Outcome::to_clipboard_text)
    }

    pub fn mark_copied(&mut self) {
        info!("Result copied to clipboard");
        self.status = Status::Copied;
    }

    /// Saves the current result. Returns `Ok(false)` when there is nothing
    /// to save.
    pub fn save(&mut self, path: impl AsRef<Path>) -> MatrixResult<bool> {
        let Some(outcome) = &self.current else {
            return Ok(false);
        };
        let path = path.as_ref();
        match save_outcome(path, outcome) {
            Ok(()) => {
                self.status = Status::Saved(path.to_path_buf());
                Ok(true)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Reads a CSV file and returns the text to put into `operand`'s area.
    pub fn load(&mut self, operand: Operand, path: impl AsRef<Path>) -> MatrixResult<String> {
        let path = path.as_ref();
        match load_grid(path) {
            Ok(grid) => {
                self.status = Status::Loaded(operand, path.to_path_buf());
                Ok(grid_to_source_text(&grid))
            }
            Err(e) => Err(self.fail(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EXAMPLE_A, EXAMPLE_B};
    use crate::parser::parse;

    #[test]
    fn test_run_replaces_result() {
        let mut session = Session::new();
        assert_eq!(session.status(), &Status::Ready);
        assert!(session.current().is_none());

        session.run(Operation::Add, EXAMPLE_A, EXAMPLE_B, Operand::A).unwrap();
        assert_eq!(session.status().to_string(), "Result: 3×3 matrix");

        session.run(Operation::Determinant, "1 2\n3 4", "", Operand::A).unwrap();
        assert_eq!(session.current(), Some(&Outcome::Scalar(-2.0)));
        assert_eq!(session.status().to_string(), "Determinant shown");
        assert_eq!(session.copy_text().as_deref(), Some("-2"));
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut session = Session::new();
        session.run(Operation::Multiply, EXAMPLE_A, EXAMPLE_B, Operand::A).unwrap();
        let before = session.current().cloned();

        let err = session
            .run(Operation::Determinant, "1 2 3\n4 5 6", "", Operand::A)
            .unwrap_err();
        assert_eq!(err.to_string(), "Determinant requires a square matrix (got 2×3)");
        assert_eq!(session.current().cloned(), before);
        assert_eq!(
            session.status().to_string(),
            "Error: Determinant requires a square matrix (got 2×3)"
        );
    }

    #[test]
    fn test_clear_drops_result() {
        let mut session = Session::new();
        session.run(Operation::Transpose, "1 2", "", Operand::A).unwrap();
        session.clear();
        assert!(session.current().is_none());
        assert!(session.copy_text().is_none());
        assert_eq!(session.status(), &Status::Cleared);
    }

    #[test]
    fn test_save_without_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        assert!(!session.save(dir.path().join("out.csv")).unwrap());
        assert_eq!(session.status(), &Status::Ready);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut session = Session::new();
        session.run(Operation::Multiply, EXAMPLE_A, EXAMPLE_B, Operand::A).unwrap();

        assert!(session.save(&path).unwrap());
        assert_eq!(session.status(), &Status::Saved(path.clone()));

        let text = session.load(Operand::B, &path).unwrap();
        assert_eq!(text, "30 24 18\n84 69 54\n138 114 90");
        assert_eq!(parse(&text).ok().map(Outcome::Matrix).as_ref(), session.current());
        assert_eq!(
            session.status().to_string(),
            format!("Loaded B from {}", path.display())
        );
    }

    #[test]
    fn test_failed_load_sets_error_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "1,2\n3\n").unwrap();

        let mut session = Session::new();
        assert!(session.load(Operand::A, &path).is_err());
        assert!(matches!(session.status(), Status::Error(_)));
    }
}
