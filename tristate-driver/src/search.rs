use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tristate_core::TriNetlist;
use tristate_partition::partition;
use tristate_qbf::{encode_window, write_qdimacs};

use crate::error::DriverError;
use crate::solver::{SolverInvoker, SolverVerdict};

/// How the search over gate budgets is bounded for one window, mirroring
/// the fixed `maxEll / 2 ..= maxEll` sweep of the upstream search loop.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub window_size: usize,
    pub ell_max: usize,
}

impl SearchConfig {
    fn ell_range(&self) -> std::ops::RangeInclusive<usize> {
        (self.ell_max / 2).max(1)..=self.ell_max
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            ell_max: 5,
        }
    }
}

/// The outcome of searching one window for a gate budget its window is
/// satisfiable at.
#[derive(Debug, Clone)]
pub struct WindowOutcome {
    pub window_index: usize,
    pub found_ell: Option<usize>,
}

/// Partitions `net` into windows and, for each, searches ascending gate
/// budgets for one at which the window's QBF encoding is satisfiable,
/// writing every attempted encoding to `out_dir` along the way.
pub fn run_search(
    net: &TriNetlist,
    config: SearchConfig,
    out_dir: &Path,
    solver: &dyn SolverInvoker,
) -> Result<Vec<WindowOutcome>, DriverError> {
    std::fs::create_dir_all(out_dir)?;
    let windows = partition(net, config.window_size);
    info!(windows = windows.len(), "partitioned netlist");

    let mut outcomes = Vec::with_capacity(windows.len());
    for (idx, window) in windows.iter().enumerate() {
        let mut found_ell = None;
        for ell in config.ell_range() {
            let formula = encode_window(window, ell)?;
            let qdimacs_path = subcircuit_path(out_dir, idx, ell);
            write_qdimacs(&formula, &qdimacs_path)?;
            info!(window = idx, ell, path = %qdimacs_path.display(), "encoded window");

            match solver.run(&qdimacs_path)? {
                SolverVerdict::Sat => {
                    info!(window = idx, ell, "synthesis succeeded");
                    found_ell = Some(ell);
                    break;
                }
                SolverVerdict::Unsat => {
                    info!(window = idx, ell, "no solution at this gate budget");
                }
            }
        }
        if found_ell.is_none() {
            warn!(window = idx, "could not synthesize window within gate budget");
        }
        outcomes.push(WindowOutcome {
            window_index: idx,
            found_ell,
        });
    }
    Ok(outcomes)
}

fn subcircuit_path(out_dir: &Path, window_index: usize, ell: usize) -> PathBuf {
    out_dir.join(format!("subcircuit_{}_ell_{ell}.qdimacs", window_index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristate_core::{TriGate, TriGateKind, WireId};

    struct AlwaysSat;
    impl SolverInvoker for AlwaysSat {
        fn run(&self, _qdimacs_path: &Path) -> Result<SolverVerdict, DriverError> {
            Ok(SolverVerdict::Sat)
        }
    }

    struct AlwaysUnsat;
    impl SolverInvoker for AlwaysUnsat {
        fn run(&self, _qdimacs_path: &Path) -> Result<SolverVerdict, DriverError> {
            Ok(SolverVerdict::Unsat)
        }
    }

    fn single_xor_netlist() -> TriNetlist {
        TriNetlist {
            num_wires: 3,
            input_wires: vec![WireId(0), WireId(1)],
            output_wires: vec![WireId(2)],
            gates: vec![TriGate {
                kind: TriGateKind::Xor,
                inputs: vec![WireId(0), WireId(1)],
                output: WireId(2),
            }],
        }
    }

    #[test]
    fn stops_at_the_first_satisfiable_gate_budget() {
        let net = single_xor_netlist();
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig {
            window_size: 5,
            ell_max: 4,
        };
        let outcomes = run_search(&net, config, dir.path(), &AlwaysSat).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].found_ell, Some(config.ell_max / 2));
    }

    #[test]
    fn reports_no_solution_when_nothing_is_satisfiable() {
        let net = single_xor_netlist();
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig {
            window_size: 5,
            ell_max: 2,
        };
        let outcomes = run_search(&net, config, dir.path(), &AlwaysUnsat).unwrap();
        assert_eq!(outcomes[0].found_ell, None);
    }
}
