use std::path::PathBuf;

use tracing::info;
use tristate_driver::{run_search, CommandSolver, DriverError, SearchConfig};
use tristate_netlist::read_tri_netlist;

#[derive(Debug)]
enum Command {
    Run {
        input_path: PathBuf,
        out_dir: PathBuf,
        window_size: usize,
        ell_max: usize,
        solver: String,
    },
    Help,
}

fn parse_args() -> Command {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || matches!(args[1].as_str(), "help" | "--help" | "-h") {
        return Command::Help;
    }

    let input_path = PathBuf::from(&args[1]);
    let out_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("qbf"));
    let window_size = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5usize);
    let ell_max = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(5usize);
    let solver = args
        .get(5)
        .cloned()
        .unwrap_or_else(|| "depqbf".to_string());

    Command::Run {
        input_path,
        out_dir,
        window_size,
        ell_max,
        solver,
    }
}

fn print_help() {
    println!("encoder - tri-state window QBF encoder and solver driver");
    println!();
    println!("USAGE:");
    println!("    encoder <tri_state_in> [out_dir] [window_size] [ell_max] [solver]");
    println!();
    println!("ARGS:");
    println!("    tri_state_in   Path to a tri-state netlist file");
    println!("    out_dir        Directory to write .qdimacs files into (default: qbf)");
    println!("    window_size    Maximum gates per window (default: 5)");
    println!("    ell_max        Upper gate budget searched per window (default: 5)");
    println!("    solver         QBF solver binary to invoke (default: depqbf)");
}

fn run(
    input_path: PathBuf,
    out_dir: PathBuf,
    window_size: usize,
    ell_max: usize,
    solver_bin: String,
) -> Result<(), DriverError> {
    info!(path = %input_path.display(), "reading tri-state netlist");
    let net = read_tri_netlist(&input_path)?;

    let config = SearchConfig {
        window_size,
        ell_max,
    };
    let solver = CommandSolver::new(solver_bin, vec!["-v".to_string()]);
    let outcomes = run_search(&net, config, &out_dir, &solver)?;

    for outcome in &outcomes {
        match outcome.found_ell {
            Some(ell) => println!(
                "window {}: synthesized at ell = {ell}",
                outcome.window_index + 1
            ),
            None => println!(
                "window {}: could not synthesize within the gate budget",
                outcome.window_index + 1
            ),
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    match parse_args() {
        Command::Run {
            input_path,
            out_dir,
            window_size,
            ell_max,
            solver,
        } => {
            if let Err(e) = run(input_path, out_dir, window_size, ell_max, solver) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Command::Help => print_help(),
    }
}
