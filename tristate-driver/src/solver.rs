use std::path::Path;
use std::process::Command;

use crate::error::DriverError;

/// Outcome of handing one QDIMACS file to a QBF solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverVerdict {
    Sat,
    Unsat,
}

/// Abstracts over "run a QBF solver on this file and tell me SAT/UNSAT",
/// so the search loop can be exercised against a fake in tests instead of
/// shelling out to a real solver binary.
pub trait SolverInvoker {
    fn run(&self, qdimacs_path: &Path) -> Result<SolverVerdict, DriverError>;
}

/// Invokes an external QBF solver as a subprocess and reads its verdict off
/// the first line of stdout, exactly as the upstream search loop does.
pub struct CommandSolver {
    program: String,
    args: Vec<String>,
}

impl CommandSolver {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl SolverInvoker for CommandSolver {
    fn run(&self, qdimacs_path: &Path) -> Result<SolverVerdict, DriverError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(qdimacs_path)
            .output()
            .map_err(|e| DriverError::Solver(format!("failed to spawn {}: {e}", self.program)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let first_line = stdout.lines().next().unwrap_or_default().trim();
        match first_line {
            "SAT" => Ok(SolverVerdict::Sat),
            "UNSAT" => Ok(SolverVerdict::Unsat),
            other => Err(DriverError::Solver(format!(
                "unrecognised solver output: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSolver {
        verdict: SolverVerdict,
    }

    impl SolverInvoker for FakeSolver {
        fn run(&self, _qdimacs_path: &Path) -> Result<SolverVerdict, DriverError> {
            Ok(self.verdict)
        }
    }

    #[test]
    fn fake_solver_reports_the_configured_verdict() {
        let solver = FakeSolver {
            verdict: SolverVerdict::Sat,
        };
        assert_eq!(
            solver.run(Path::new("whatever.qdimacs")).unwrap(),
            SolverVerdict::Sat
        );
    }
}
