pub mod args;
pub mod errors;
pub mod flatten;

use indexmap::IndexMap;
use serde_json::Value;

use crate::record::{cell_text, missing};
use errors::TableError;

/// Header plus data rows. Every row is exactly as wide as the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TableError> {
        if row.len() != self.header.len() {
            return Err(TableError::RowWidth {
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Insert a leading column holding `value` on every row.
    pub fn prepend_column(&mut self, name: &str, value: Value) {
        self.header.insert(0, name.to_string());
        for row in &mut self.rows {
            row.insert(0, value.clone());
        }
    }

    /// Append the rows of `other`, aligning columns by name. A repeated name
    /// is matched by occurrence: the second `DEVICE` of `other` lands in the
    /// second `DEVICE` of `self`. Columns only `other` has are added at the
    /// end and backfilled with `N/A`.
    pub fn merge(&mut self, other: Table) {
        if self.header.is_empty() && self.rows.is_empty() {
            *self = other;
            return;
        }
        if self.header == other.header {
            self.rows.extend(other.rows);
            return;
        }

        let mut seen: IndexMap<&str, usize> = IndexMap::with_capacity(other.header.len());
        let mut targets = Vec::with_capacity(other.header.len());
        for name in &other.header {
            let count = seen.entry(name.as_str()).or_insert(0);
            let nth = *count;
            *count += 1;

            let existing = self
                .header
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .nth(nth)
                .map(|(idx, _)| idx);
            let idx = match existing {
                Some(idx) => idx,
                None => {
                    self.header.push(name.clone());
                    for row in &mut self.rows {
                        row.push(missing());
                    }
                    self.header.len() - 1
                }
            };
            targets.push(idx);
        }

        for row in other.rows {
            let mut aligned = vec![missing(); self.header.len()];
            for (value, &idx) in row.into_iter().zip(&targets) {
                aligned[idx] = value;
            }
            self.rows.push(aligned);
        }
    }

    /// Header row then data rows, every cell as text.
    pub fn text_rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().map(|row| row.iter().map(cell_text).collect()))
    }
}
