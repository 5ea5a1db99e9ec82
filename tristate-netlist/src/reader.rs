use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tristate_core::{
    BoolGate, BoolGateKind, BoolNetlist, CoreError, TriGate, TriGateKind, TriNetlist, WireId,
};

use crate::error::NetlistError;

struct Header {
    num_gates: usize,
    num_wires: u32,
    input_wires: Vec<WireId>,
    output_wires: Vec<WireId>,
}

/// Parses the shared three-line header: `numGates numWires`, `niv n1 … n_niv`,
/// `nov n1 … n_nov`. Input wires are assigned ids `0..totalInputWires`;
/// output wires are the last `totalOutputWires` ids below `num_wires`.
fn read_header<R: BufRead>(lines: &mut std::io::Lines<R>) -> Result<Header, NetlistError> {
    let line1 = next_nonempty(lines, 1)?;
    let mut header_tokens = line1.1.split_whitespace();
    let num_gates: usize = parse_tok(&mut header_tokens, line1.0, "numGates")?;
    let num_wires: u32 = parse_tok(&mut header_tokens, line1.0, "numWires")?;

    let line2 = next_nonempty(lines, line1.0 + 1)?;
    let total_input_wires = read_value_widths(&line2.1, line2.0)?;

    let line3 = next_nonempty(lines, line2.0 + 1)?;
    let total_output_wires = read_value_widths(&line3.1, line3.0)?;

    let input_wires = (0..total_input_wires).map(WireId).collect();
    let output_wires = ((num_wires - total_output_wires)..num_wires)
        .map(WireId)
        .collect();

    Ok(Header {
        num_gates,
        num_wires,
        input_wires,
        output_wires,
    })
}

/// Parses a `niv n1 … n_niv` style line and returns the sum of the widths.
fn read_value_widths(line: &str, line_no: usize) -> Result<u32, NetlistError> {
    let mut tokens = line.split_whitespace();
    let count: usize = parse_tok(&mut tokens, line_no, "value count")?;
    let mut total = 0u32;
    for _ in 0..count {
        let width: u32 = parse_tok(&mut tokens, line_no, "value width")?;
        total += width;
    }
    Ok(total)
}

fn parse_tok<T: std::str::FromStr>(
    tokens: &mut std::str::SplitWhitespace<'_>,
    line: usize,
    what: &str,
) -> Result<T, NetlistError> {
    let tok = tokens.next().ok_or_else(|| NetlistError::Core(CoreError::Parse {
        line,
        message: format!("expected {what}, found end of line"),
    }))?;
    tok.parse().map_err(|_| {
        NetlistError::Core(CoreError::Parse {
            line,
            message: format!("expected {what}, found {tok:?}"),
        })
    })
}

fn next_nonempty<R: BufRead>(
    lines: &mut std::io::Lines<R>,
    mut line_no: usize,
) -> Result<(usize, String), NetlistError> {
    loop {
        let line = lines
            .next()
            .ok_or_else(|| NetlistError::Core(CoreError::Parse {
                line: line_no,
                message: "unexpected end of file".to_string(),
            }))??;
        if line.trim().is_empty() {
            line_no += 1;
            continue;
        }
        return Ok((line_no, line));
    }
}

struct RawGateLine {
    inputs: Vec<u32>,
    outputs: Vec<u32>,
    kind: String,
}

fn parse_gate_line(line: &str, line_no: usize) -> Result<RawGateLine, NetlistError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(NetlistError::Core(CoreError::Parse {
            line: line_no,
            message: format!("gate line too short: {line:?}"),
        }));
    }
    let num_inputs: usize = tokens[0].parse().map_err(|_| {
        NetlistError::Core(CoreError::Parse {
            line: line_no,
            message: format!("expected numInputs, found {:?}", tokens[0]),
        })
    })?;
    let num_outputs: usize = tokens[1].parse().map_err(|_| {
        NetlistError::Core(CoreError::Parse {
            line: line_no,
            message: format!("expected numOutputs, found {:?}", tokens[1]),
        })
    })?;
    let expected_len = 2 + num_inputs + num_outputs + 1;
    if tokens.len() != expected_len {
        return Err(NetlistError::ArityMismatch {
            line: line_no,
            declared: num_inputs + num_outputs,
            found: tokens.len().saturating_sub(3),
        });
    }
    let mut inputs = Vec::with_capacity(num_inputs);
    for tok in &tokens[2..2 + num_inputs] {
        inputs.push(tok.parse().map_err(|_| {
            NetlistError::Core(CoreError::Parse {
                line: line_no,
                message: format!("expected wire id, found {tok:?}"),
            })
        })?);
    }
    let mut outputs = Vec::with_capacity(num_outputs);
    for tok in &tokens[2 + num_inputs..2 + num_inputs + num_outputs] {
        outputs.push(tok.parse().map_err(|_| {
            NetlistError::Core(CoreError::Parse {
                line: line_no,
                message: format!("expected wire id, found {tok:?}"),
            })
        })?);
    }
    Ok(RawGateLine {
        inputs,
        outputs,
        kind: tokens[expected_len - 1].to_string(),
    })
}

/// Reads a classical Boolean netlist from `path`.
///
/// Malformed gate lines abort the read immediately (fail-fast): see
/// SPEC_FULL.md §4.1 for the rationale.
pub fn read_bool_netlist(path: impl AsRef<Path>) -> Result<BoolNetlist, NetlistError> {
    let file = std::fs::File::open(path)?;
    read_bool_netlist_from(BufReader::new(file))
}

fn read_bool_netlist_from<R: Read>(reader: BufReader<R>) -> Result<BoolNetlist, NetlistError> {
    let mut lines = reader.lines();
    let header = read_header(&mut lines)?;

    let mut gates = Vec::with_capacity(header.num_gates);
    let mut line_no = 3;
    for line in lines {
        line_no += 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let raw = parse_gate_line(&line, line_no)?;
        let kind = BoolGateKind::from_str(&raw.kind).ok_or_else(|| NetlistError::UnknownGateKind {
            line: line_no,
            kind: raw.kind.clone(),
        })?;
        gates.push(BoolGate {
            kind,
            inputs: raw.inputs.into_iter().map(WireId).collect(),
            outputs: raw.outputs.into_iter().map(WireId).collect(),
        });
    }

    tracing::debug!(
        gates = gates.len(),
        wires = header.num_wires,
        "parsed boolean netlist"
    );

    Ok(BoolNetlist {
        gates,
        num_wires: header.num_wires,
        input_wires: header.input_wires,
        output_wires: header.output_wires,
    })
}

/// Reads a tri-state netlist from `path`.
pub fn read_tri_netlist(path: impl AsRef<Path>) -> Result<TriNetlist, NetlistError> {
    let file = std::fs::File::open(path)?;
    read_tri_netlist_from(BufReader::new(file))
}

fn read_tri_netlist_from<R: Read>(reader: BufReader<R>) -> Result<TriNetlist, NetlistError> {
    let mut lines = reader.lines();
    let header = read_header(&mut lines)?;

    let mut gates = Vec::with_capacity(header.num_gates);
    let mut line_no = 3;
    for line in lines {
        line_no += 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let raw = parse_gate_line(&line, line_no)?;
        let kind = TriGateKind::from_str(&raw.kind).ok_or_else(|| NetlistError::UnknownGateKind {
            line: line_no,
            kind: raw.kind.clone(),
        })?;
        if raw.outputs.len() != 1 {
            return Err(NetlistError::ArityMismatch {
                line: line_no,
                declared: 1,
                found: raw.outputs.len(),
            });
        }
        gates.push(TriGate {
            kind,
            inputs: raw.inputs.into_iter().map(WireId).collect(),
            output: WireId(raw.outputs[0]),
        });
    }

    tracing::debug!(
        gates = gates.len(),
        wires = header.num_wires,
        "parsed tri-state netlist"
    );

    Ok(TriNetlist {
        gates,
        num_wires: header.num_wires,
        input_wires: header.input_wires,
        output_wires: header.output_wires,
    })
}
