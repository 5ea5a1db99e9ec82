/// Errors shared by every stage of the pipeline: I/O, malformed input, and
/// invariant violations that indicate a bug rather than bad input.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("shape error: {0}")]
    Shape(String),

    #[error("internal invariant violated: {0}")]
    Invariant(String),
}
