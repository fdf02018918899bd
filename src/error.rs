/// Errors raised while converting a single input file.
///
/// All variants are file-scoped: the driver logs them and moves on to the
/// next file, they never abort the batch.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input matrix is not square and cannot describe an adjacency matrix.
    #[error("matrix is not square ({rows} x {cols})")]
    Shape { rows: u64, cols: u64 },

    /// Malformed Matrix Market content.
    #[error("malformed matrix data: {0}")]
    Parse(String),

    /// Malformed DIMACS line.
    #[error("malformed DIMACS data: {0}")]
    Format(String),

    /// Read or write failure on the underlying file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
