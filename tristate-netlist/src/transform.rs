use tristate_core::{
    BoolGate, BoolGateKind, BoolNetlist, TriGate, TriGateKind, TriNetlist, WireAllocator, WireId,
};

use crate::error::NetlistError;

/// Compiles a classical Boolean netlist into a tri-state netlist using
/// only {XOR, BUFFER, JOIN, CONST_ZERO, CONST_ONE}, preserving Boolean
/// semantics under the two-bit wire encoding.
///
/// Fresh wires are allocated starting at `source.num_wires` and strictly
/// increase; input/output wire ids are unchanged from the source netlist.
pub fn transform(source: &BoolNetlist) -> Result<TriNetlist, NetlistError> {
    let mut alloc = WireAllocator::starting_at(source.num_wires);
    let mut gates = Vec::new();

    for gate in &source.gates {
        expand_gate(gate, &mut alloc, &mut gates)?;
    }

    tracing::debug!(
        gates = gates.len(),
        wires = alloc.wire_count(),
        "transformed boolean netlist into tri-state netlist"
    );

    Ok(TriNetlist {
        gates,
        num_wires: alloc.wire_count(),
        input_wires: source.input_wires.clone(),
        output_wires: source.output_wires.clone(),
    })
}

fn push_xor(gates: &mut Vec<TriGate>, a: WireId, b: WireId, o: WireId) {
    gates.push(TriGate {
        kind: TriGateKind::Xor,
        inputs: vec![a, b],
        output: o,
    });
}

fn push_buffer(gates: &mut Vec<TriGate>, data: WireId, control: WireId, o: WireId) {
    gates.push(TriGate {
        kind: TriGateKind::Buffer,
        inputs: vec![data, control],
        output: o,
    });
}

fn push_join(gates: &mut Vec<TriGate>, a: WireId, b: WireId, o: WireId) {
    gates.push(TriGate {
        kind: TriGateKind::Join,
        inputs: vec![a, b],
        output: o,
    });
}

fn push_one(gates: &mut Vec<TriGate>, o: WireId) {
    gates.push(TriGate {
        kind: TriGateKind::ConstOne,
        inputs: vec![],
        output: o,
    });
}

fn push_zero(gates: &mut Vec<TriGate>, o: WireId) {
    gates.push(TriGate {
        kind: TriGateKind::ConstZero,
        inputs: vec![],
        output: o,
    });
}

/// AND(x,y)->o = BUF(x,y) JOIN BUF(0,¬y)
fn expand_and(gates: &mut Vec<TriGate>, alloc: &mut WireAllocator, x: WireId, y: WireId, o: WireId) {
    let c1 = alloc.allocate();
    let ny = alloc.allocate();
    let c0 = alloc.allocate();
    let b1 = alloc.allocate();
    let b0 = alloc.allocate();

    push_one(gates, c1);
    push_xor(gates, y, c1, ny);
    push_zero(gates, c0);
    push_buffer(gates, x, y, b1);
    push_buffer(gates, c0, ny, b0);
    push_join(gates, b1, b0, o);
}

fn expand_gate(
    gate: &BoolGate,
    alloc: &mut WireAllocator,
    gates: &mut Vec<TriGate>,
) -> Result<(), NetlistError> {
    match gate.kind {
        BoolGateKind::Xor => {
            require_shape(gate, 2, 1)?;
            push_xor(gates, gate.inputs[0], gate.inputs[1], gate.outputs[0]);
        }
        BoolGateKind::Inv => {
            require_shape(gate, 1, 1)?;
            let c = alloc.allocate();
            push_one(gates, c);
            push_xor(gates, gate.inputs[0], c, gate.outputs[0]);
        }
        BoolGateKind::Eq | BoolGateKind::Eqw => {
            require_shape(gate, 1, 1)?;
            let c = alloc.allocate();
            push_one(gates, c);
            push_buffer(gates, gate.inputs[0], c, gate.outputs[0]);
        }
        BoolGateKind::And => {
            require_shape(gate, 2, 1)?;
            expand_and(gates, alloc, gate.inputs[0], gate.inputs[1], gate.outputs[0]);
        }
        BoolGateKind::Mand => {
            if gate.inputs.len() % 2 != 0 {
                return Err(NetlistError::Core(tristate_core::CoreError::Shape(
                    format!("MAND requires an even number of inputs, found {}", gate.inputs.len()),
                )));
            }
            let n = gate.inputs.len() / 2;
            if gate.outputs.len() != n {
                return Err(NetlistError::Core(tristate_core::CoreError::Shape(format!(
                    "MAND with {} inputs requires {} outputs, found {}",
                    gate.inputs.len(),
                    n,
                    gate.outputs.len()
                ))));
            }
            for i in 0..n {
                expand_and(gates, alloc, gate.inputs[i], gate.inputs[i + n], gate.outputs[i]);
            }
        }
    }
    Ok(())
}

fn require_shape(gate: &BoolGate, num_inputs: usize, num_outputs: usize) -> Result<(), NetlistError> {
    if gate.inputs.len() != num_inputs || gate.outputs.len() != num_outputs {
        return Err(NetlistError::Core(tristate_core::CoreError::Shape(format!(
            "{} requires {} input(s) and {} output(s), found {} and {}",
            gate.kind.as_str(),
            num_inputs,
            num_outputs,
            gate.inputs.len(),
            gate.outputs.len()
        ))));
    }
    Ok(())
}
