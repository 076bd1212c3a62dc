use thiserror::Error;

/// Shape violation detected by the vector/matrix algebra.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Operands of a dot product or matrix product do not line up.
    #[error("dimension mismatch in {op}: left has {left}, right has {right}")]
    DimensionMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    /// A matrix row differs in length from the first row.
    #[error("ragged matrix: row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}
