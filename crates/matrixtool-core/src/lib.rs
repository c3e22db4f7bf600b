//! # Matrix Tool Core
//!
//! Parsing, validation, arithmetic dispatch and formatting for the Matrix
//! Tool. Nothing in this crate depends on a UI toolkit.
//!
//! ## Architecture Overview
//!
//! ```text
//! raw text ──► parser ──► Grid ──► engine ──► Outcome ──► format ──► text
//!                │                   │                      │
//!           ParseError        OperationError          csv_io (files)
//! ```
//!
//! ## Learning: Errors as Values
//!
//! Every fallible step returns a `Result`. Parse and operation failures are
//! distinct enums so callers can match on them, and [`MatrixError`] wraps
//! them for code that only needs to show a message.

pub mod config;
pub mod csv_io;
pub mod engine;
pub mod format;
pub mod grid;
pub mod parser;
pub mod session;

pub use config::Config;
pub use csv_io::{load_grid, save_grid, save_outcome, save_scalar};
pub use engine::{
    Operand, Operation, OperationError, OperationRequest, Outcome, add, determinant, evaluate,
    multiply, subtract, transpose,
};
pub use format::{format_general, format_value, grid_to_source_text, grid_to_text};
pub use grid::{Grid, Shape};
pub use parser::{ParseError, parse, parse_operand};
pub use session::{Session, Status};

use std::path::PathBuf;

/// Result type for matrix tool operations
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Errors surfaced to the user by a matrix tool action
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Matrix {operand}: {source}")]
    Parse {
        operand: Operand,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("Invalid matrix file {}: {source}", .path.display())]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
