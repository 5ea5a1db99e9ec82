use tristate_netlist::{read_bool_netlist, transform, write_tri_netlist};

fn print_usage() {
    eprintln!("Usage: transformer <input_circuit_file> <output_circuit_file>");
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        print_usage();
        std::process::exit(1);
    }
    let input_path = &args[1];
    let output_path = &args[2];

    if let Err(err) = run(input_path, output_path) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(input_path: &str, output_path: &str) -> Result<(), tristate_netlist::NetlistError> {
    let source = read_bool_netlist(input_path)?;
    tracing::info!(
        gates = source.num_gates(),
        wires = source.num_wires,
        "read boolean netlist"
    );

    let tri = transform(&source)?;
    tracing::info!(
        gates = tri.num_gates(),
        wires = tri.num_wires,
        "transformed into tri-state netlist"
    );

    write_tri_netlist(&tri, output_path)?;
    tracing::info!(path = output_path, "wrote tri-state netlist");
    Ok(())
}
