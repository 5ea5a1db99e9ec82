use std::io::Write;
use std::path::Path;

use crate::error::QbfError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Exists,
    ForAll,
}

impl Quantifier {
    fn letter(self) -> char {
        match self {
            Quantifier::Exists => 'e',
            Quantifier::ForAll => 'a',
        }
    }
}

/// A complete prenex-CNF formula ready for QDIMACS emission.
pub struct EncodedFormula {
    pub num_vars: i64,
    pub quantifier_blocks: Vec<(Quantifier, Vec<i64>)>,
    pub clauses: Vec<Vec<i64>>,
}

impl EncodedFormula {
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }
}

/// Writes `formula` to `path` in QDIMACS format: header, quantifier
/// blocks in prefix order, then clause lines.
pub fn write_qdimacs(formula: &EncodedFormula, path: impl AsRef<Path>) -> Result<(), QbfError> {
    let file = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(file);
    write_qdimacs_to(formula, &mut w)?;
    w.flush()?;
    Ok(())
}

fn write_qdimacs_to<W: Write>(formula: &EncodedFormula, w: &mut W) -> Result<(), QbfError> {
    writeln!(w, "p cnf {} {}", formula.num_vars, formula.num_clauses())?;
    for (quantifier, vars) in &formula.quantifier_blocks {
        if vars.is_empty() {
            continue;
        }
        write!(w, "{}", quantifier.letter())?;
        for v in vars {
            write!(w, " {v}")?;
        }
        writeln!(w, " 0")?;
    }
    for clause in &formula.clauses {
        for lit in clause {
            write!(w, "{lit} ")?;
        }
        writeln!(w, "0")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_header_quantifiers_and_clauses() {
        let formula = EncodedFormula {
            num_vars: 4,
            quantifier_blocks: vec![
                (Quantifier::Exists, vec![1, 2]),
                (Quantifier::ForAll, vec![3]),
                (Quantifier::Exists, vec![4]),
            ],
            clauses: vec![vec![1, -3], vec![-2, 4]],
        };
        let mut buf = Vec::new();
        write_qdimacs_to(&formula, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("p cnf 4 2"));
        assert_eq!(lines.next(), Some("e 1 2 0"));
        assert_eq!(lines.next(), Some("a 3 0"));
        assert_eq!(lines.next(), Some("e 4 0"));
        assert_eq!(lines.next(), Some("1 -3 0"));
        assert_eq!(lines.next(), Some("-2 4 0"));
    }
}
