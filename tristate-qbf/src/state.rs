/// One of the three legal tri-state wire values. `X` (both bits set) is
/// excluded from this type entirely — it is forbidden at the CNF level by
/// the no-illegal-state clauses, not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireState {
    Z,
    Zero,
    One,
}

impl WireState {
    pub const ALL: [WireState; 3] = [WireState::Z, WireState::Zero, WireState::One];

    /// The (v1, v2) bit pair for this state, per the wire encoding
    /// Z=(1,0), 0=(0,0), 1=(0,1).
    pub fn bits(self) -> (bool, bool) {
        match self {
            WireState::Z => (true, false),
            WireState::Zero => (false, false),
            WireState::One => (false, true),
        }
    }
}

/// A pair of CNF variable ids encoding one wire's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireVars {
    pub v1: i64,
    pub v2: i64,
}

impl WireVars {
    /// Literal that is true exactly when this wire equals `state` under
    /// the current assignment.
    pub fn equals(self, state: WireState) -> (i64, i64) {
        let (b1, b2) = state.bits();
        (
            if b1 { self.v1 } else { -self.v1 },
            if b2 { self.v2 } else { -self.v2 },
        )
    }

    /// The two literals asserting this wire does *not* equal `state` —
    /// i.e. the negation of the conjunction `equals(state)`, expressed as
    /// a disjunction.
    pub fn not_equals(self, state: WireState) -> (i64, i64) {
        let (a, b) = self.equals(state);
        (-a, -b)
    }

    /// Clause forbidding this wire from taking the illegal `X` state
    /// (v1 = v2 = true).
    pub fn no_illegal_state_clause(self) -> Vec<i64> {
        vec![-self.v1, -self.v2]
    }
}
