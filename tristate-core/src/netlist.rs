use crate::gate::{BoolGate, TriGate};
use crate::wire::WireId;

/// A classical Boolean netlist: gates plus the wire sets that are primary
/// inputs and primary outputs.
#[derive(Debug, Clone)]
pub struct BoolNetlist {
    pub gates: Vec<BoolGate>,
    pub num_wires: u32,
    pub input_wires: Vec<WireId>,
    pub output_wires: Vec<WireId>,
}

impl BoolNetlist {
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }
}

impl std::fmt::Display for BoolNetlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoolNetlist {{ gates: {}, wires: {}, inputs: {}, outputs: {} }}",
            self.gates.len(),
            self.num_wires,
            self.input_wires.len(),
            self.output_wires.len()
        )
    }
}

/// A tri-state netlist produced by the transformer (or read back in for
/// partitioning/encoding).
#[derive(Debug, Clone)]
pub struct TriNetlist {
    pub gates: Vec<TriGate>,
    pub num_wires: u32,
    pub input_wires: Vec<WireId>,
    pub output_wires: Vec<WireId>,
}

impl TriNetlist {
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }
}

impl std::fmt::Display for TriNetlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TriNetlist {{ gates: {}, wires: {}, inputs: {}, outputs: {} }}",
            self.gates.len(),
            self.num_wires,
            self.input_wires.len(),
            self.output_wires.len()
        )
    }
}
