use tristate_core::CoreError;

#[derive(thiserror::Error, Debug)]
pub enum NetlistError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("line {line}: unknown gate kind {kind:?}")]
    UnknownGateKind { line: usize, kind: String },

    #[error("line {line}: gate declares {declared} input(s) but {found} token(s) were present")]
    ArityMismatch {
        line: usize,
        declared: usize,
        found: usize,
    },
}

impl From<std::io::Error> for NetlistError {
    fn from(e: std::io::Error) -> Self {
        Self::Core(CoreError::Io(e))
    }
}
