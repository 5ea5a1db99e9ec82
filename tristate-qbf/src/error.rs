use tristate_core::CoreError;

#[derive(thiserror::Error, Debug)]
pub enum QbfError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
