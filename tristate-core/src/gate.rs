use crate::wire::WireId;

/// Kind of a classical Boolean gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolGateKind {
    Xor,
    And,
    Inv,
    Eq,
    Eqw,
    /// Multi-AND: 2n inputs, n outputs, output[i] = input[i] & input[i+n].
    Mand,
}

impl BoolGateKind {
    pub fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "XOR" => Self::Xor,
            "AND" => Self::And,
            "INV" => Self::Inv,
            "EQ" => Self::Eq,
            "EQW" => Self::Eqw,
            "MAND" => Self::Mand,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xor => "XOR",
            Self::And => "AND",
            Self::Inv => "INV",
            Self::Eq => "EQ",
            Self::Eqw => "EQW",
            Self::Mand => "MAND",
        }
    }
}

/// A single gate in a Boolean netlist.
#[derive(Debug, Clone)]
pub struct BoolGate {
    pub kind: BoolGateKind,
    pub inputs: Vec<WireId>,
    pub outputs: Vec<WireId>,
}

impl std::fmt::Display for BoolGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.kind.as_str())?;
        for (i, w) in self.inputs.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{w}")?;
        }
        write!(f, " -> ")?;
        for (i, w) in self.outputs.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{w}")?;
        }
        Ok(())
    }
}

/// Kind of a tri-state primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TriGateKind {
    Xor,
    Buffer,
    Join,
    ConstZero,
    ConstOne,
}

impl TriGateKind {
    /// Fixed ordering used for symmetry-breaking in the QBF encoder (F6).
    pub const ORDERED: [TriGateKind; 5] = [
        TriGateKind::Xor,
        TriGateKind::Buffer,
        TriGateKind::Join,
        TriGateKind::ConstZero,
        TriGateKind::ConstOne,
    ];

    pub fn arity(self) -> usize {
        match self {
            Self::Xor | Self::Buffer | Self::Join => 2,
            Self::ConstZero | Self::ConstOne => 0,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "XOR" => Self::Xor,
            "BUFFER" => Self::Buffer,
            "JOIN" => Self::Join,
            "CONST_ZERO" => Self::ConstZero,
            "CONST_ONE" => Self::ConstOne,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xor => "XOR",
            Self::Buffer => "BUFFER",
            Self::Join => "JOIN",
            Self::ConstZero => "CONST_ZERO",
            Self::ConstOne => "CONST_ONE",
        }
    }
}

/// A single gate in a tri-state netlist. `inputs[0]` is the data pin and
/// `inputs[1]` the control pin for `Buffer`; both pins are unordered data
/// pins for `Xor`/`Join`; `ConstZero`/`ConstOne` take no inputs.
#[derive(Debug, Clone)]
pub struct TriGate {
    pub kind: TriGateKind,
    pub inputs: Vec<WireId>,
    pub output: WireId,
}

impl std::fmt::Display for TriGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.kind.as_str())?;
        for (i, w) in self.inputs.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{w}")?;
        }
        if !self.inputs.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "-> {}", self.output)
    }
}
