//! Operation dispatch and shape validation.
//!
//! Every operation checks its operands before handing them to nalgebra,
//! so shape problems surface as [`OperationError`] values instead of
//! panics inside the numerical backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::format::{format_value, grid_to_text};
use crate::grid::{Grid, Shape};
use crate::parser::parse_operand;
use crate::{MatrixError, MatrixResult};

/// Identifies one of the two input matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operand {
    #[default]
    A,
    B,
}

impl Operand {
    pub const ALL: [Operand; 2] = [Operand::A, Operand::B];
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("A"),
            Operand::B => f.write_str("B"),
        }
    }
}

/// The operations the tool can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Transpose,
    Determinant,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Transpose,
        Operation::Determinant,
    ];

    /// Returns the operation's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Transpose => "Transpose",
            Operation::Determinant => "Determinant",
        }
    }

    /// Returns the noun used in error messages ("required for addition").
    pub fn noun(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Transpose => "transpose",
            Operation::Determinant => "determinant",
        }
    }

    /// Binary operations use both A and B; unary ones use the selected operand.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Successful result of an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matrix(Grid),
    Scalar(f64),
}

impl Outcome {
    pub fn as_grid(&self) -> Option<&Grid> {
        match self {
            Outcome::Matrix(grid) => Some(grid),
            Outcome::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Outcome::Matrix(_) => None,
            Outcome::Scalar(value) => Some(*value),
        }
    }

    /// Text placed on the clipboard when the result is copied.
    pub fn to_clipboard_text(&self) -> String {
        match self {
            Outcome::Matrix(grid) => grid_to_text(grid),
            Outcome::Scalar(value) => format_value(*value),
        }
    }
}

/// Reasons an operation refused its operands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("{}", describe_missing(.operation, .operand))]
    MissingOperand {
        operation: Operation,
        operand: Operand,
    },

    #[error("Matrices must have the same shape for {} ({left} vs {right})", .operation.noun())]
    ShapeMismatch {
        operation: Operation,
        left: Shape,
        right: Shape,
    },

    #[error("Inner dimensions must match for multiplication ({left} × {right})")]
    InnerDimMismatch { left: Shape, right: Shape },

    #[error("Determinant requires a square matrix (got {shape})")]
    NotSquare { shape: Shape },
}

fn describe_missing(operation: &Operation, operand: &Operand) -> String {
    if operation.is_binary() {
        format!(
            "Both matrices A and B are required for {}",
            operation.noun()
        )
    } else {
        format!("Matrix {operand} is empty")
    }
}

/// An operation together with the operands available to it.
#[derive(Debug, Clone, Copy)]
pub struct OperationRequest<'a> {
    pub operation: Operation,
    pub a: Option<&'a Grid>,
    pub b: Option<&'a Grid>,
    /// Operand used by unary operations.
    pub selected: Operand,
}

impl<'a> OperationRequest<'a> {
    pub fn new(
        operation: Operation,
        a: Option<&'a Grid>,
        b: Option<&'a Grid>,
        selected: Operand,
    ) -> Self {
        Self {
            operation,
            a,
            b,
            selected,
        }
    }

    /// Validates the operands and computes the result.
    pub fn execute(&self) -> Result<Outcome, OperationError> {
        debug!(operation = %self.operation, selected = %self.selected, "Executing operation");

        if self.operation.is_binary() {
            let (a, b) = self.binary_operands()?;
            let grid = match self.operation {
                Operation::Add => add(a, b)?,
                Operation::Subtract => subtract(a, b)?,
                _ => multiply(a, b)?,
            };
            return Ok(Outcome::Matrix(grid));
        }

        let grid = self.selected_operand()?;
        match self.operation {
            Operation::Determinant => determinant(grid).map(Outcome::Scalar),
            _ => Ok(Outcome::Matrix(transpose(grid))),
        }
    }

    fn binary_operands(&self) -> Result<(&'a Grid, &'a Grid), OperationError> {
        match (self.a, self.b) {
            (Some(a), Some(b)) => Ok((a, b)),
            (None, _) => Err(self.missing(Operand::A)),
            (Some(_), None) => Err(self.missing(Operand::B)),
        }
    }

    fn selected_operand(&self) -> Result<&'a Grid, OperationError> {
        let grid = match self.selected {
            Operand::A => self.a,
            Operand::B => self.b,
        };
        grid.ok_or_else(|| self.missing(self.selected))
    }

    fn missing(&self, operand: Operand) -> OperationError {
        OperationError::MissingOperand {
            operation: self.operation,
            operand,
        }
    }
}

/// Elementwise sum of two grids of the same shape.
pub fn add(a: &Grid, b: &Grid) -> Result<Grid, OperationError> {
    ensure_same_shape(Operation::Add, a, b)?;
    Ok(Grid::from_matrix(a.as_matrix() + b.as_matrix()))
}

/// Elementwise difference of two grids of the same shape.
pub fn subtract(a: &Grid, b: &Grid) -> Result<Grid, OperationError> {
    ensure_same_shape(Operation::Subtract, a, b)?;
    Ok(Grid::from_matrix(a.as_matrix() - b.as_matrix()))
}

/// Matrix product `a · b`.
pub fn multiply(a: &Grid, b: &Grid) -> Result<Grid, OperationError> {
    if a.cols() != b.rows() {
        return Err(OperationError::InnerDimMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(Grid::from_matrix(a.as_matrix() * b.as_matrix()))
}

pub fn transpose(grid: &Grid) -> Grid {
    Grid::from_matrix(grid.as_matrix().transpose())
}

/// Determinant of a square grid.
pub fn determinant(grid: &Grid) -> Result<f64, OperationError> {
    let shape = grid.shape();
    if !shape.is_square() {
        return Err(OperationError::NotSquare { shape });
    }
    Ok(grid.as_matrix().determinant())
}

fn ensure_same_shape(operation: Operation, a: &Grid, b: &Grid) -> Result<(), OperationError> {
    if a.shape() != b.shape() {
        return Err(OperationError::ShapeMismatch {
            operation,
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Parses the operands an operation needs from raw text and runs it.
///
/// Binary operations parse both texts; unary operations parse only the
/// selected one, so a typo in the other area does not block them.
pub fn evaluate(
    operation: Operation,
    a_text: &str,
    b_text: &str,
    selected: Operand,
) -> MatrixResult<Outcome> {
    let load = |operand: Operand, text: &str| {
        parse_operand(text).map_err(|source| MatrixError::Parse { operand, source })
    };

    let (a, b) = if operation.is_binary() {
        (load(Operand::A, a_text)?, load(Operand::B, b_text)?)
    } else {
        match selected {
            Operand::A => (load(Operand::A, a_text)?, None),
            Operand::B => (None, load(Operand::B, b_text)?),
        }
    };

    let outcome = OperationRequest::new(operation, a.as_ref(), b.as_ref(), selected).execute()?;
    match &outcome {
        Outcome::Matrix(grid) => info!("{} produced a {} matrix", operation, grid.shape()),
        Outcome::Scalar(value) => info!("{} produced {}", operation, value),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn grid(text: &str) -> Grid {
        parse(text).unwrap()
    }

    const EXAMPLE_A: &str = "1 2 3\n4 5 6\n7 8 9";
    const EXAMPLE_B: &str = "9 8 7\n6 5 4\n3 2 1";

    #[test]
    fn test_add_and_subtract() {
        let a = grid(EXAMPLE_A);
        let b = grid(EXAMPLE_B);
        assert_eq!(add(&a, &b).unwrap(), grid("10 10 10\n10 10 10\n10 10 10"));
        assert_eq!(subtract(&a, &b).unwrap(), grid("-8 -6 -4\n-2 0 2\n4 6 8"));
    }

    #[test]
    fn test_shape_mismatch() {
        let a = grid("1 2 3\n4 5 6");
        let b = grid("1 2\n3 4\n5 6");
        let err = add(&a, &b).unwrap_err();
        assert_eq!(
            err,
            OperationError::ShapeMismatch {
                operation: Operation::Add,
                left: Shape::new(2, 3),
                right: Shape::new(3, 2),
            }
        );
        assert_eq!(
            err.to_string(),
            "Matrices must have the same shape for addition (2×3 vs 3×2)"
        );
        assert!(matches!(
            subtract(&a, &b),
            Err(OperationError::ShapeMismatch { operation: Operation::Subtract, .. })
        ));
    }

    #[test]
    fn test_multiply_shapes() {
        let a = grid("1 2 3\n4 5 6");
        let b = grid("1 2\n3 4\n5 6");
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.shape(), Shape::new(2, 2));
        assert_eq!(product, grid("22 28\n49 64"));

        let square = grid("1 2\n3 4");
        assert_eq!(
            multiply(&a, &square),
            Err(OperationError::InnerDimMismatch {
                left: Shape::new(2, 3),
                right: Shape::new(2, 2),
            })
        );
    }

    #[test]
    fn test_transpose() {
        let g = grid("1 2 3\n4 5 6");
        let t = transpose(&g);
        assert_eq!(t.shape(), Shape::new(3, 2));
        for i in 0..g.rows() {
            for j in 0..g.cols() {
                assert_eq!(t.get(j, i), g.get(i, j));
            }
        }

        let square = grid(EXAMPLE_A);
        assert_eq!(transpose(&transpose(&square)), square);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(determinant(&grid("1 2\n3 4")).unwrap(), -2.0);
        assert_eq!(determinant(&grid("5")).unwrap(), 5.0);

        let four = grid("2 0 0 0\n0 3 0 0\n0 0 4 0\n1 0 0 5");
        assert!((determinant(&four).unwrap() - 120.0).abs() < 1e-9);

        let err = determinant(&grid("1 2 3\n4 5 6")).unwrap_err();
        assert_eq!(err, OperationError::NotSquare { shape: Shape::new(2, 3) });
        assert_eq!(err.to_string(), "Determinant requires a square matrix (got 2×3)");
    }

    #[test]
    fn test_request_missing_operands() {
        let a = grid("1 2\n3 4");
        let err = OperationRequest::new(Operation::Add, Some(&a), None, Operand::A)
            .execute()
            .unwrap_err();
        assert_eq!(err.to_string(), "Both matrices A and B are required for addition");

        let err = OperationRequest::new(Operation::Transpose, Some(&a), None, Operand::B)
            .execute()
            .unwrap_err();
        assert_eq!(
            err,
            OperationError::MissingOperand {
                operation: Operation::Transpose,
                operand: Operand::B,
            }
        );
        assert_eq!(err.to_string(), "Matrix B is empty");
    }

    #[test]
    fn test_request_uses_selected_operand() {
        let a = grid("1 2\n3 4");
        let b = grid("2 0\n0 2");
        let outcome = OperationRequest::new(Operation::Determinant, Some(&a), Some(&b), Operand::B)
            .execute()
            .unwrap();
        assert_eq!(outcome, Outcome::Scalar(4.0));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let a = grid(EXAMPLE_A);
        let b = grid(EXAMPLE_B);
        let (a_before, b_before) = (a.clone(), b.clone());
        for operation in Operation::ALL {
            let _ = OperationRequest::new(operation, Some(&a), Some(&b), Operand::A).execute();
        }
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_evaluate_end_to_end() {
        let sum = evaluate(Operation::Add, EXAMPLE_A, EXAMPLE_B, Operand::A).unwrap();
        assert_eq!(sum, Outcome::Matrix(grid("10 10 10\n10 10 10\n10 10 10")));

        let product = evaluate(Operation::Multiply, EXAMPLE_A, EXAMPLE_B, Operand::A).unwrap();
        assert_eq!(
            product,
            Outcome::Matrix(grid("30 24 18\n84 69 54\n138 114 90"))
        );
    }

    #[test]
    fn test_evaluate_blank_text_is_missing_operand() {
        let err = evaluate(Operation::Multiply, EXAMPLE_A, "  \n", Operand::A).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Operation(OperationError::MissingOperand { operand: Operand::B, .. })
        ));
    }

    #[test]
    fn test_evaluate_tags_parse_errors_with_operand() {
        let err = evaluate(Operation::Add, EXAMPLE_A, "1 two\n3 4", Operand::A).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Matrix B: Non-numeric value found in line: '1 two'"
        );
    }

    #[test]
    fn test_unary_ignores_unselected_operand() {
        let outcome = evaluate(Operation::Transpose, "1 2", "not a matrix", Operand::A).unwrap();
        assert_eq!(outcome, Outcome::Matrix(grid("1\n2")));
    }

    #[test]
    fn test_clipboard_text() {
        assert_eq!(Outcome::Scalar(-2.0000000000000004).to_clipboard_text(), "-2");
        assert_eq!(
            Outcome::Matrix(grid("1 0.5\n2 3")).to_clipboard_text(),
            "1 0.5\n2 3"
        );
    }
}
