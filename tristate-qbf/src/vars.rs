use tristate_core::TriGateKind;

use crate::state::WireVars;

/// Hands out dense, strictly increasing CNF variable ids starting at 1.
#[derive(Debug, Default)]
pub struct VarPool {
    next: i64,
}

impl VarPool {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn alloc(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn alloc_wire(&mut self) -> WireVars {
        WireVars {
            v1: self.alloc(),
            v2: self.alloc(),
        }
    }

    /// Highest variable id handed out so far; equals the QDIMACS variable
    /// count once allocation is complete.
    pub fn var_count(&self) -> i64 {
        self.next - 1
    }
}

/// All CNF variables allocated for one window's encoding, grouped by the
/// sets of §4.4.1: input (I), gate-value (G), selection (S), function (F).
pub struct EncodedVars {
    pub input_vars: Vec<WireVars>,
    pub gate_value_vars: Vec<WireVars>,
    /// `selection_vars[i][pin]` has length `n + i`, one entry per
    /// candidate source of synthesised gate `i`'s input pin.
    pub selection_vars: Vec<[Vec<i64>; 2]>,
    /// `function_vars[i]` has one entry per kind in `TriGateKind::ORDERED`.
    pub function_vars: Vec<[i64; 5]>,
}

impl EncodedVars {
    /// Allocates every variable in I, G, S, F order (§4.4.1) for a window
    /// with `n` external inputs and a gate budget of `ell`.
    pub fn allocate(pool: &mut VarPool, n: usize, ell: usize) -> Self {
        let input_vars: Vec<WireVars> = (0..n).map(|_| pool.alloc_wire()).collect();
        let gate_value_vars: Vec<WireVars> = (0..ell).map(|_| pool.alloc_wire()).collect();

        let mut selection_vars = Vec::with_capacity(ell);
        for i in 0..ell {
            let num_candidates = n + i;
            let pin0: Vec<i64> = (0..num_candidates).map(|_| pool.alloc()).collect();
            let pin1: Vec<i64> = (0..num_candidates).map(|_| pool.alloc()).collect();
            selection_vars.push([pin0, pin1]);
        }

        let mut function_vars = Vec::with_capacity(ell);
        for _ in 0..ell {
            let mut kinds = [0i64; 5];
            for slot in kinds.iter_mut() {
                *slot = pool.alloc();
            }
            function_vars.push(kinds);
        }

        Self {
            input_vars,
            gate_value_vars,
            selection_vars,
            function_vars,
        }
    }

    pub fn num_inputs(&self) -> usize {
        self.input_vars.len()
    }

    pub fn ell(&self) -> usize {
        self.gate_value_vars.len()
    }

    /// The wire variables of candidate source `t` for synthesised gate
    /// `i`: an external input if `t < n`, otherwise the output of
    /// synthesised gate `t - n`.
    pub fn candidate_vars(&self, t: usize) -> WireVars {
        let n = self.num_inputs();
        if t < n {
            self.input_vars[t]
        } else {
            self.gate_value_vars[t - n]
        }
    }

    pub fn function_var(&self, gate: usize, kind: TriGateKind) -> i64 {
        let idx = TriGateKind::ORDERED
            .iter()
            .position(|k| *k == kind)
            .expect("every kind appears in ORDERED");
        self.function_vars[gate][idx]
    }

    pub fn all_selection_vars(&self) -> Vec<i64> {
        self.selection_vars
            .iter()
            .flat_map(|pins| pins.iter().flatten().copied())
            .collect()
    }

    pub fn all_function_vars(&self) -> Vec<i64> {
        self.function_vars.iter().flatten().copied().collect()
    }

    pub fn all_input_vars(&self) -> Vec<i64> {
        self.input_vars.iter().flat_map(|w| [w.v1, w.v2]).collect()
    }

    pub fn all_gate_value_vars(&self) -> Vec<i64> {
        self.gate_value_vars
            .iter()
            .flat_map(|w| [w.v1, w.v2])
            .collect()
    }
}
