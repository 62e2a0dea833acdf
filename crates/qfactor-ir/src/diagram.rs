//! Text diagram rendering for circuits.
//!
//! Each qubit gets one wire. Instructions are packed greedily into columns:
//! an instruction lands in the first column after every column already
//! occupied on the wires its operands span, so instructions on disjoint
//! wires share a column and per-wire order is preserved.

use std::fmt;

use crate::circuit::Circuit;

const WIRE: char = '─';
const CROSSING: &str = "┼";

struct Cell {
    row: usize,
    text: String,
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(width * 3);
    out.push_str(text);
    out.extend(std::iter::repeat_n(WIRE, width.saturating_sub(len)));
    out
}

fn layout(circuit: &Circuit) -> Vec<Vec<Cell>> {
    let rows = circuit.num_qubits();
    let mut occupied = vec![0usize; rows];
    let mut columns: Vec<Vec<Cell>> = vec![];

    for inst in circuit.instructions() {
        let indices: Vec<usize> = inst.qubits.iter().map(|q| q.index()).collect();
        let (Some(&lo), Some(&hi)) = (indices.iter().min(), indices.iter().max()) else {
            continue;
        };

        let column = occupied[lo..=hi].iter().copied().max().unwrap_or(0);
        for slot in &mut occupied[lo..=hi] {
            *slot = column + 1;
        }
        if columns.len() <= column {
            columns.resize_with(column + 1, Vec::new);
        }

        let symbols = inst.symbols();
        for row in lo..=hi {
            let text = match indices.iter().position(|&i| i == row) {
                Some(pos) => symbols[pos].clone(),
                None => CROSSING.to_string(),
            };
            columns[column].push(Cell { row, text });
        }
    }

    columns
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.qubits().iter().map(ToString::to_string).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut lines: Vec<String> = labels
            .iter()
            .map(|l| format!("{l:>label_width$}: {}", pad("", 3)))
            .collect();

        for column in layout(self) {
            let width = column
                .iter()
                .map(|c| c.text.chars().count())
                .max()
                .unwrap_or(1);
            for (row, line) in lines.iter_mut().enumerate() {
                let text = column
                    .iter()
                    .find(|c| c.row == row)
                    .map_or("", |c| c.text.as_str());
                line.push_str(&pad(text, width));
                line.push_str(&pad("", 3));
            }
        }

        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
