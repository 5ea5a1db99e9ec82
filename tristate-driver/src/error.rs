/// Errors from driving the partition/encode/solve search loop.
#[derive(thiserror::Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Core(#[from] tristate_core::CoreError),

    #[error(transparent)]
    Netlist(#[from] tristate_netlist::NetlistError),

    #[error(transparent)]
    Qbf(#[from] tristate_qbf::QbfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("solver invocation failed: {0}")]
    Solver(String),
}
