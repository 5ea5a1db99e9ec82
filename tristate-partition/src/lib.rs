//! Topological-order windowing of tri-state netlists.
//!
//! Only the topological partitioner is implemented: the connected-component
//! DFS variant found in some reference implementations is an earlier
//! prototype whose boundary semantics do not match this pipeline and is
//! deliberately not carried over.

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use tristate_core::{TriGate, TriNetlist, WireId};

/// A contiguous, topologically-ordered slice of a tri-state netlist, with
/// its boundary wire sets resolved.
#[derive(Debug, Clone)]
pub struct Window {
    pub gates: Vec<TriGate>,
    pub external_inputs: Vec<WireId>,
    pub external_outputs: Vec<WireId>,
}

/// Topologically sorts `net`'s gates by input/output dependency, breaking
/// ties by original gate index, then slices the order into windows of at
/// most `window_size` gates each, resolving external input/output wires
/// per window.
pub fn partition(net: &TriNetlist, window_size: usize) -> Vec<Window> {
    assert!(window_size >= 1, "window_size must be at least 1");

    let order = topological_order(net);
    let wire_consumers = build_wire_consumers(net);

    let mut windows = Vec::new();
    let mut current_indices: Vec<usize> = Vec::with_capacity(window_size);
    let mut produced: HashSet<WireId> = HashSet::new();
    let mut external_inputs: Vec<WireId> = Vec::new();
    let mut seen_inputs: HashSet<WireId> = HashSet::new();

    for &gate_idx in &order {
        let gate = &net.gates[gate_idx];
        for &input in &gate.inputs {
            if !produced.contains(&input) && seen_inputs.insert(input) {
                external_inputs.push(input);
            }
        }
        produced.insert(gate.output);
        current_indices.push(gate_idx);

        if current_indices.len() == window_size {
            windows.push(close_window(
                net,
                &current_indices,
                std::mem::take(&mut external_inputs),
                &wire_consumers,
            ));
            current_indices.clear();
            produced.clear();
            seen_inputs.clear();
        }
    }

    if !current_indices.is_empty() {
        windows.push(close_window(
            net,
            &current_indices,
            external_inputs,
            &wire_consumers,
        ));
    }

    tracing::debug!(windows = windows.len(), window_size, "partitioned netlist");
    windows
}

fn close_window(
    net: &TriNetlist,
    indices: &[usize],
    external_inputs: Vec<WireId>,
    wire_consumers: &HashMap<WireId, Vec<usize>>,
) -> Window {
    let in_window: HashSet<usize> = indices.iter().copied().collect();
    let mut external_outputs = Vec::new();

    for &idx in indices {
        let o = net.gates[idx].output;
        let consumers = wire_consumers.get(&o);
        let has_external_consumer = consumers
            .map(|cs| cs.iter().any(|c| !in_window.contains(c)))
            .unwrap_or(false);
        let is_dangling = consumers.map(|cs| cs.is_empty()).unwrap_or(true);

        let is_external_output = if is_dangling {
            net.output_wires.contains(&o)
        } else {
            has_external_consumer
        };
        if is_external_output {
            external_outputs.push(o);
        }
    }

    Window {
        gates: indices.iter().map(|&i| net.gates[i].clone()).collect(),
        external_inputs,
        external_outputs,
    }
}

fn build_wire_consumers(net: &TriNetlist) -> HashMap<WireId, Vec<usize>> {
    let mut map: HashMap<WireId, Vec<usize>> = HashMap::new();
    for (idx, gate) in net.gates.iter().enumerate() {
        for &input in &gate.inputs {
            map.entry(input).or_default().push(idx);
        }
    }
    map
}

/// Kahn's algorithm over gate-output -> gate-input dependency edges, with
/// ties among ready gates broken by original index.
fn topological_order(net: &TriNetlist) -> Vec<usize> {
    let mut producer: HashMap<WireId, usize> = HashMap::new();
    for (idx, gate) in net.gates.iter().enumerate() {
        producer.insert(gate.output, idx);
    }

    let mut indegree = vec![0usize; net.gates.len()];
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); net.gates.len()];
    for (idx, gate) in net.gates.iter().enumerate() {
        for &input in &gate.inputs {
            if let Some(&producer_idx) = producer.get(&input) {
                adjacency[producer_idx].push(idx);
                indegree[idx] += 1;
            }
        }
    }

    let mut ready: std::collections::BTreeSet<usize> = (0..net.gates.len())
        .filter(|&i| indegree[i] == 0)
        .collect();
    let mut order = Vec::with_capacity(net.gates.len());

    while let Some(&idx) = ready.iter().next() {
        ready.remove(&idx);
        order.push(idx);
        for &consumer in &adjacency[idx] {
            indegree[consumer] -= 1;
            if indegree[consumer] == 0 {
                ready.insert(consumer);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristate_core::TriGateKind;

    fn chain(n: usize) -> TriNetlist {
        // CONST_ONE -> XOR(in, c) -> XOR(prev, c) -> ... chain of n XOR gates
        let mut gates = Vec::new();
        gates.push(TriGate {
            kind: TriGateKind::ConstOne,
            inputs: vec![],
            output: WireId(1),
        });
        let mut prev = WireId(0);
        let mut next_wire = 2u32;
        for _ in 0..n {
            let out = WireId(next_wire);
            next_wire += 1;
            gates.push(TriGate {
                kind: TriGateKind::Xor,
                inputs: vec![prev, WireId(1)],
                output: out,
            });
            prev = out;
        }
        TriNetlist {
            num_wires: next_wire,
            input_wires: vec![WireId(0)],
            output_wires: vec![prev],
            gates,
        }
    }

    #[test]
    fn cover_is_exact_and_ordered() {
        let net = chain(7);
        let windows = partition(&net, 3);
        let total_gates: usize = windows.iter().map(|w| w.gates.len()).sum();
        assert_eq!(total_gates, net.gates.len());
        assert_eq!(windows.len(), 3); // 8 gates total (const + 7 xor), window 3 -> 3,3,2
    }

    #[test]
    fn boundary_wires_cross_window_correctly() {
        let net = chain(4);
        let windows = partition(&net, 2);
        // first window: CONST_ONE, XOR(in0,c) -> output w2 consumed by window 2
        assert!(windows[0].external_outputs.contains(&WireId(2)) || windows[0].gates.len() < 2);
    }

    #[test]
    fn primary_input_feeds_external_inputs_of_first_window() {
        let net = chain(2);
        let windows = partition(&net, 5);
        assert_eq!(windows.len(), 1);
        assert!(windows[0].external_inputs.contains(&WireId(0)));
    }

    #[test]
    fn dangling_primary_output_wire_is_external_output() {
        let net = chain(1);
        let windows = partition(&net, 5);
        assert_eq!(windows.len(), 1);
        assert!(windows[0].external_outputs.contains(net.output_wires.first().unwrap()));
    }
}
