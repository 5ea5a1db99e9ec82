use tristate_core::TriGateKind;

use crate::state::WireState;

/// Evaluates a two-input tri-state gate's truth table. Returns `None` for
/// the JOIN(0,1)/JOIN(1,0) combination, which is illegal and left
/// unconstrained here — it becomes unsatisfiable only via the
/// no-illegal-state clauses on its (nonexistent) output encoding, per the
/// note on JOIN's disagreeing-drivers case.
pub fn eval_two_input(kind: TriGateKind, a: WireState, b: WireState) -> Option<WireState> {
    use WireState::*;
    match kind {
        TriGateKind::Xor => Some(match (a, b) {
            (Z, _) | (_, Z) => Z,
            (x, y) => {
                if x == y {
                    Zero
                } else {
                    One
                }
            }
        }),
        TriGateKind::Buffer => {
            // pin 0 = data (a), pin 1 = control (b)
            Some(match b {
                One => a,
                Zero | Z => Z,
            })
        }
        TriGateKind::Join => Some(match (a, b) {
            (Z, Z) => Z,
            (Z, x) | (x, Z) => x,
            (Zero, Zero) => Zero,
            (One, One) => One,
            (Zero, One) | (One, Zero) => return None,
        }),
        TriGateKind::ConstZero | TriGateKind::ConstOne => {
            unreachable!("constants have no inputs")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WireState::*;

    #[test]
    fn buffer_follows_data_only_when_control_is_one() {
        assert_eq!(eval_two_input(TriGateKind::Buffer, One, One), Some(One));
        assert_eq!(eval_two_input(TriGateKind::Buffer, Zero, One), Some(Zero));
        assert_eq!(eval_two_input(TriGateKind::Buffer, One, Zero), Some(Z));
        assert_eq!(eval_two_input(TriGateKind::Buffer, One, Z), Some(Z));
    }

    #[test]
    fn xor_propagates_z_and_computes_boolean_xor_otherwise() {
        assert_eq!(eval_two_input(TriGateKind::Xor, Z, One), Some(Z));
        assert_eq!(eval_two_input(TriGateKind::Xor, Zero, One), Some(One));
        assert_eq!(eval_two_input(TriGateKind::Xor, One, One), Some(Zero));
    }

    #[test]
    fn join_rejects_disagreeing_drivers() {
        assert_eq!(eval_two_input(TriGateKind::Join, Zero, One), None);
        assert_eq!(eval_two_input(TriGateKind::Join, One, Zero), None);
        assert_eq!(eval_two_input(TriGateKind::Join, Z, Z), Some(Z));
        assert_eq!(eval_two_input(TriGateKind::Join, Z, One), Some(One));
        assert_eq!(eval_two_input(TriGateKind::Join, Zero, Zero), Some(Zero));
    }
}
