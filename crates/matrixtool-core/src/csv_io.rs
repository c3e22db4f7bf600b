//! CSV import and export.
//!
//! Reading and writing are delegated to the `csv` crate. Each call opens
//! the file, processes it fully and closes it before returning.

use std::path::Path;
use tracing::info;

use crate::engine::Outcome;
use crate::format::{DISPLAY_PRECISION, format_general};
use crate::grid::Grid;
use crate::parser::ParseError;
use crate::{MatrixError, MatrixResult};

/// Reads a comma-separated numeric file into a grid.
///
/// Cells are trimmed, blank lines and lines starting with `#` are skipped.
/// A file with a single line becomes a one-row grid.
pub fn load_grid(path: impl AsRef<Path>) -> MatrixResult<Grid> {
    let path = path.as_ref();
    let invalid = |source: ParseError| MatrixError::InvalidFile {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let mut row = Vec::with_capacity(record.len());
        for field in record.iter() {
            let value = field.parse::<f64>().map_err(|_| {
                invalid(ParseError::NonNumericToken {
                    line: record.iter().collect::<Vec<_>>().join(","),
                    token: field.to_string(),
                })
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    let grid = Grid::from_rows(rows).map_err(invalid)?;
    info!("Loaded {} matrix from {}", grid.shape(), path.display());
    Ok(grid)
}

/// Writes a grid as CSV, one row per line, each cell in `%g` form.
pub fn save_grid(path: impl AsRef<Path>, grid: &Grid) -> MatrixResult<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    for row in grid.iter_rows() {
        writer.write_record(
            row.into_iter()
                .map(|value| format_general(value, DISPLAY_PRECISION)),
        )?;
    }
    writer.flush()?;

    info!("Saved {} matrix to {}", grid.shape(), path.display());
    Ok(())
}

/// Writes a scalar in its plain string form.
pub fn save_scalar(path: impl AsRef<Path>, value: f64) -> MatrixResult<()> {
    let path = path.as_ref();
    std::fs::write(path, value.to_string())?;
    info!("Saved scalar {} to {}", value, path.display());
    Ok(())
}

/// Saves whichever kind of result is given.
pub fn save_outcome(path: impl AsRef<Path>, outcome: &Outcome) -> MatrixResult<()> {
    match outcome {
        Outcome::Matrix(grid) => save_grid(path, grid),
        Outcome::Scalar(value) => save_scalar(path, *value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");
        let grid = parse("1 2.5 -3\n4 5 1234567").unwrap();

        save_grid(&path, &grid).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "1,2.5,-3\n4,5,1.23457e+06\n");

        let loaded = load_grid(&path).unwrap();
        assert_eq!(loaded.shape(), grid.shape());
        assert_eq!(loaded.get(1, 2), Some(1234570.0));
        assert_eq!(loaded.get(0, 1), Some(2.5));
    }

    #[test]
    fn test_single_row_file_is_one_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("row.csv");
        std::fs::write(&path, "1, 2, 3\n").unwrap();

        let grid = load_grid(&path).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_load_skips_comments_and_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("commented.csv");
        std::fs::write(&path, "# exported matrix\n1,2\n\n3,4\n").unwrap();

        let grid = load_grid(&path).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_load_rejects_ragged_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "1,2,3\n4,5\n").unwrap();

        let err = load_grid(&path).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::InvalidFile { source: ParseError::RaggedRows { .. }, .. }
        ));
    }

    #[test]
    fn test_load_rejects_non_numeric_cell() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.csv");
        std::fs::write(&path, "1,2\n3,four\n").unwrap();

        let err = load_grid(&path).unwrap_err();
        match err {
            MatrixError::InvalidFile { source: ParseError::NonNumericToken { line, token }, .. } => {
                assert_eq!(line, "3,four");
                assert_eq!(token, "four");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(
            load_grid(&path),
            Err(MatrixError::InvalidFile { source: ParseError::EmptyInput, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_grid(dir.path().join("absent.csv")),
            Err(MatrixError::Csv(_))
        ));
    }

    #[test]
    fn test_save_scalar_outcome() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("det.csv");
        save_outcome(&path, &Outcome::Scalar(-2.5)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "-2.5");
    }
}
