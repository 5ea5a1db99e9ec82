//! Drives the partition/encode/solve search loop: partitions a tri-state
//! netlist into windows, and for each searches ascending gate budgets for
//! one an external QBF solver reports satisfiable.

mod error;
mod search;
mod solver;

pub use error::DriverError;
pub use search::{run_search, SearchConfig, WindowOutcome};
pub use solver::{CommandSolver, SolverInvoker, SolverVerdict};
