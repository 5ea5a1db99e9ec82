use std::collections::HashMap;

use itertools::Itertools;
use tristate_core::{CoreError, TriGateKind, WireId};
use tristate_partition::Window;

use crate::error::QbfError;
use crate::qdimacs::{EncodedFormula, Quantifier};
use crate::state::{WireState, WireVars};
use crate::truth::eval_two_input;
use crate::vars::{EncodedVars, VarPool};

/// Encodes `window` as a prenex-CNF formula asserting the existence of an
/// `ell`-gate tri-state circuit reproducing the window's behaviour on
/// every legal assignment of its external inputs.
pub fn encode_window(window: &Window, ell: usize) -> Result<EncodedFormula, QbfError> {
    let n = window.external_inputs.len();
    let m = window.external_outputs.len();
    if ell < m {
        return Err(QbfError::Core(CoreError::Shape(format!(
            "gate budget ell={ell} is smaller than the window's {m} output wire(s)"
        ))));
    }

    let mut pool = VarPool::new();
    let vars = EncodedVars::allocate(&mut pool, n, ell);

    let mut clauses = Vec::new();
    emit_no_illegal_state_clauses(&vars, &mut clauses);
    emit_exactly_one_selection_clauses(&vars, &mut clauses);
    emit_exactly_one_function_clauses(&vars, &mut clauses);
    emit_function_consistency_clauses(&vars, &mut clauses);
    emit_symmetry_breaking_clauses(&vars, &mut clauses);
    emit_window_correctness_clauses(window, &vars, &mut clauses)?;

    let quantifier_blocks = vec![
        (
            Quantifier::Exists,
            vars.all_selection_vars()
                .into_iter()
                .chain(vars.all_function_vars())
                .collect(),
        ),
        (Quantifier::ForAll, vars.all_input_vars()),
        (Quantifier::Exists, vars.all_gate_value_vars()),
    ];

    Ok(EncodedFormula {
        num_vars: pool.var_count(),
        quantifier_blocks,
        clauses,
    })
}

/// No wire carries the illegal `X` state: applies to every input and
/// gate-value wire.
fn emit_no_illegal_state_clauses(vars: &EncodedVars, clauses: &mut Vec<Vec<i64>>) {
    for w in vars.input_vars.iter().chain(vars.gate_value_vars.iter()) {
        clauses.push(w.no_illegal_state_clause());
    }
}

/// Exactly-one-of over `vars`. A gate with zero candidate sources (e.g. a
/// synthesised gate at index 0 in a window with no external inputs) has no
/// selection variables to choose among, and must not contribute the
/// unsatisfiable empty "at least one" clause.
fn emit_exactly_one(vars: &[i64], clauses: &mut Vec<Vec<i64>>) {
    if vars.is_empty() {
        return;
    }
    clauses.push(vars.to_vec());
    for (a, b) in vars.iter().tuple_combinations() {
        clauses.push(vec![-a, -b]);
    }
}

fn emit_exactly_one_selection_clauses(vars: &EncodedVars, clauses: &mut Vec<Vec<i64>>) {
    for pins in &vars.selection_vars {
        for pin_vars in pins {
            emit_exactly_one(pin_vars, clauses);
        }
    }
}

fn emit_exactly_one_function_clauses(vars: &EncodedVars, clauses: &mut Vec<Vec<i64>>) {
    for gate_vars in &vars.function_vars {
        emit_exactly_one(gate_vars, clauses);
    }
}

fn emit_function_consistency_clauses(vars: &EncodedVars, clauses: &mut Vec<Vec<i64>>) {
    for i in 0..vars.ell() {
        let out = vars.gate_value_vars[i];
        let f_zero = vars.function_var(i, TriGateKind::ConstZero);
        clauses.push(vec![-f_zero, -out.v1]);
        clauses.push(vec![-f_zero, -out.v2]);

        let f_one = vars.function_var(i, TriGateKind::ConstOne);
        clauses.push(vec![-f_one, -out.v1]);
        clauses.push(vec![-f_one, out.v2]);

        for &kind in &[TriGateKind::Xor, TriGateKind::Buffer, TriGateKind::Join] {
            let f_var = vars.function_var(i, kind);
            let num_candidates = vars.num_inputs() + i;
            for t1 in 0..num_candidates {
                for t2 in 0..num_candidates {
                    let s1 = vars.selection_vars[i][0][t1];
                    let s2 = vars.selection_vars[i][1][t2];
                    let src1 = vars.candidate_vars(t1);
                    let src2 = vars.candidate_vars(t2);
                    emit_two_input_truth_clauses(kind, f_var, s1, s2, src1, src2, out, clauses);
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_two_input_truth_clauses(
    kind: TriGateKind,
    f_var: i64,
    s1: i64,
    s2: i64,
    src1: WireVars,
    src2: WireVars,
    out: WireVars,
    clauses: &mut Vec<Vec<i64>>,
) {
    for a in WireState::ALL {
        for b in WireState::ALL {
            let Some(expected) = eval_two_input(kind, a, b) else {
                continue;
            };
            let (na1, na2) = src1.not_equals(a);
            let (nb1, nb2) = src2.not_equals(b);
            let (out1, out2) = out.equals(expected);

            let mut clause_v1 = vec![-f_var, -s1, -s2, na1, na2, nb1, nb2];
            clause_v1.push(out1);
            clauses.push(clause_v1);

            let mut clause_v2 = vec![-f_var, -s1, -s2, na1, na2, nb1, nb2];
            clause_v2.push(out2);
            clauses.push(clause_v2);
        }
    }
}

/// Forbids gate `i` from holding a function kind strictly smaller (in
/// `TriGateKind::ORDERED`) than gate `i-1`'s, collapsing permutations of
/// otherwise-equivalent gate sequences.
fn emit_symmetry_breaking_clauses(vars: &EncodedVars, clauses: &mut Vec<Vec<i64>>) {
    for i in 1..vars.ell() {
        for f_idx in 0..TriGateKind::ORDERED.len() {
            for f_prime_idx in (f_idx + 1)..TriGateKind::ORDERED.len() {
                let f_prime_prev = vars.function_vars[i - 1][f_prime_idx];
                let f_cur = vars.function_vars[i][f_idx];
                clauses.push(vec![-f_prime_prev, -f_cur]);
            }
        }
    }
}

/// Emits the clauses tying the window's own (fixed) output behaviour to
/// the last `m` synthesised gate outputs, across every legal assignment
/// of the window's external inputs. Assignments under which the window's
/// own gates hit an illegal (JOIN disagreement) internal state are
/// skipped — no legal circuit ever presents them.
fn emit_window_correctness_clauses(
    window: &Window,
    vars: &EncodedVars,
    clauses: &mut Vec<Vec<i64>>,
) -> Result<(), QbfError> {
    let n = window.external_inputs.len();
    let m = window.external_outputs.len();
    let ell = vars.ell();

    for combo in input_combinations(n) {
        let Some(values) = simulate_window(window, &combo) else {
            continue;
        };

        for (j, output_wire) in window.external_outputs.iter().enumerate() {
            let expected = *values.get(output_wire).ok_or_else(|| {
                QbfError::Core(CoreError::Invariant(format!(
                    "window output wire {output_wire} not produced by its own gates"
                )))
            })?;
            let gate_idx = ell - m + j;
            let out = vars.gate_value_vars[gate_idx];

            let mut antecedent = Vec::with_capacity(2 * n);
            for (idx, input_wire) in window.external_inputs.iter().enumerate() {
                let state = combo[idx];
                let input_vars = vars.input_vars[idx];
                let (m1, m2) = input_vars.not_equals(state);
                antecedent.push(m1);
                antecedent.push(m2);
                let _ = input_wire;
            }

            let (out1, out2) = out.equals(expected);
            let mut clause_v1 = antecedent.clone();
            clause_v1.push(out1);
            clauses.push(clause_v1);

            let mut clause_v2 = antecedent;
            clause_v2.push(out2);
            clauses.push(clause_v2);
        }
    }
    Ok(())
}

fn input_combinations(n: usize) -> impl Iterator<Item = Vec<WireState>> {
    (0..n)
        .map(|_| WireState::ALL.to_vec())
        .multi_cartesian_product()
        .collect::<Vec<_>>()
        .into_iter()
}

/// Evaluates `window`'s own (fixed) gates, in their stored topological
/// order, under `inputs` assigned to `window.external_inputs` positionally.
/// Returns `None` if any gate hits an illegal internal state.
fn simulate_window(window: &Window, inputs: &[WireState]) -> Option<HashMap<WireId, WireState>> {
    let mut values: HashMap<WireId, WireState> = HashMap::new();
    for (wire, state) in window.external_inputs.iter().zip(inputs) {
        values.insert(*wire, *state);
    }
    for gate in &window.gates {
        let value = match gate.kind {
            TriGateKind::ConstZero => WireState::Zero,
            TriGateKind::ConstOne => WireState::One,
            kind => {
                let a = *values.get(&gate.inputs[0])?;
                let b = *values.get(&gate.inputs[1])?;
                eval_two_input(kind, a, b)?
            }
        };
        values.insert(gate.output, value);
    }
    Some(values)
}
