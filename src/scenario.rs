//! Reading a [`GridMap`] from its textual scenario form.
//!
//! ```text
//! 3 4
//! ..X.
//! ....
//! X...
//! ```
//!
//! The header holds `rows cols`. Each following non-blank line is one row;
//! only `.` and `X` count, anything else on the line is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::environment::{Cell, GridMap};
use crate::error::ScenarioError;

pub type Result<T> = std::result::Result<T, ScenarioError>;

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let invalid = || ScenarioError::InvalidHeader {
        line: line.trim_end().to_string(),
    };
    let mut fields = line.split_whitespace();
    let rows: usize = fields.next().and_then(|f| f.parse().ok()).ok_or_else(invalid)?;
    let cols: usize = fields.next().and_then(|f| f.parse().ok()).ok_or_else(invalid)?;
    if fields.next().is_some() {
        return Err(invalid());
    }
    if rows.checked_mul(cols).is_none() {
        return Err(invalid());
    }
    Ok((rows, cols))
}

impl GridMap {
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(ScenarioError::MissingHeader),
        };
        let (rows, cols) = parse_header(&header)?;

        // Grows row by row; the header alone is not trusted for sizing.
        let mut cells = Vec::new();
        for row in 0..rows {
            let line = loop {
                match lines.next() {
                    Some(line) => {
                        let line = line?;
                        if !line.trim().is_empty() {
                            break line;
                        }
                    }
                    None => return Err(ScenarioError::MissingRow { row }),
                }
            };
            let row_cells: Vec<Cell> = line.chars().filter_map(Cell::from_symbol).collect();
            if row_cells.len() < cols {
                return Err(ScenarioError::ShortRow {
                    row,
                    expected: cols,
                    found: row_cells.len(),
                });
            }
            cells.extend_from_slice(&row_cells[..cols]);
        }

        let map = GridMap::new(rows, cols, cells)?;
        tracing::info!(
            "Loaded {}x{} map with {} open cells",
            rows,
            cols,
            map.traversable_count()
        );
        Ok(map)
    }
}
