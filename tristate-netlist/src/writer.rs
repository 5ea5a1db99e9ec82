use std::io::{BufWriter, Write};
use std::path::Path;

use tristate_core::TriNetlist;

use crate::error::NetlistError;

/// Writes a tri-state netlist in the mirror-image grammar of the reader:
/// `numInputs numOutputs i1 … iN o1 KIND` per gate, `0 1 o KIND` for
/// constants.
pub fn write_tri_netlist(net: &TriNetlist, path: impl AsRef<Path>) -> Result<(), NetlistError> {
    let file = std::fs::File::create(path)?;
    let mut w = BufWriter::new(file);
    write_tri_netlist_to(net, &mut w)?;
    w.flush()?;
    Ok(())
}

fn write_tri_netlist_to<W: Write>(net: &TriNetlist, w: &mut W) -> Result<(), NetlistError> {
    writeln!(w, "{} {}", net.gates.len(), net.num_wires)?;
    writeln!(
        w,
        "1 {}",
        net.input_wires.len()
    )?;
    writeln!(
        w,
        "1 {}",
        net.output_wires.len()
    )?;
    for gate in &net.gates {
        let inputs: Vec<String> = gate.inputs.iter().map(|w| w.0.to_string()).collect();
        if inputs.is_empty() {
            writeln!(w, "0 1 {} {}", gate.output.0, gate.kind.as_str())?;
        } else {
            writeln!(
                w,
                "{} 1 {} {} {}",
                gate.inputs.len(),
                inputs.join(" "),
                gate.output.0,
                gate.kind.as_str()
            )?;
        }
    }
    Ok(())
}
