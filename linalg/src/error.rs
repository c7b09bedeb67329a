use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgebraError {
    /// Fail due to operations on structures of unexpected differing lengths.
    #[error("Unexpected different lengths: {0} and {1}")]
    DifferentLengths(usize, usize),
    /// Fail due to operations on matrices of unexpected differing shapes.
    #[error("Unexpected different shapes: {0}x{1} and {2}x{3}")]
    DifferentShapes(usize, usize, usize, usize),
    #[error("Matrix of shape {0}x{1} is not square")]
    NotSquare(usize, usize),
    #[error("Matrix is not invertible")]
    NotInvertible,
    #[error("Index {0} out of range for axis of length {1}")]
    OutOfRange(isize, usize),
    #[error("Slice step cannot be zero")]
    ZeroStep,
}
