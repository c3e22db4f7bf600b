//! Text-to-grid parser.
//!
//! Accepts the free-form text users paste into the input areas: one row per
//! line, values separated by any mix of commas and whitespace. Blank lines
//! are skipped, so trailing newlines and spacing between rows are harmless.

use tracing::debug;

use crate::grid::Grid;

/// Reasons a piece of text could not be turned into a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Non-numeric value found in line: '{line}'")]
    NonNumericToken { line: String, token: String },

    #[error("Rows have inconsistent number of columns (row {row} has {found}, expected {expected})")]
    RaggedRows {
        expected: usize,
        row: usize,
        found: usize,
    },
}

/// Parses text into a grid.
///
/// ```
/// use matrixtool_core::parse;
///
/// let grid = parse("1, 2, 3\n4 5 6").unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// ```
pub fn parse(text: &str) -> Result<Grid, ParseError> {
    let mut rows = Vec::new();

    for line in text.lines() {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            continue;
        }

        let row = tokens
            .iter()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| ParseError::NonNumericToken {
                        line: line.trim().to_string(),
                        token: (*token).to_string(),
                    })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        rows.push(row);
    }

    let grid = Grid::from_rows(rows)?;
    debug!("Parsed {} grid", grid.shape());
    Ok(grid)
}

/// Parses an operand's text, treating whitespace-only text as absent.
pub fn parse_operand(text: &str) -> Result<Option<Grid>, ParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse(text).map(Some)
}

/// Splits a line on commas and whitespace, dropping empty pieces.
fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}
