//! Generic Record to Table flattening.
//!
//! Two passes over the Record, both depth-first in insertion order:
//! the first collects every key holding a scalar (the leaf keys), the second
//! emits one row per leaf-only mapping, looking every leaf key up in that
//! mapping and writing `N/A` where it is absent.
//!
//! In the default [`FlattenMode::FirstBranch`] mode only the first nested
//! mapping of a level is descended into, so sibling subtrees after it are
//! not emitted. [`FlattenMode::AllBranches`] descends into all of them.

use indexmap::IndexSet;
use serde_json::Value;

use super::Table;
use crate::record::{Record, missing};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlattenMode {
    #[default]
    FirstBranch,
    AllBranches,
}

impl FlattenMode {
    pub fn from_all_branches(all_branches: bool) -> Self {
        if all_branches {
            FlattenMode::AllBranches
        } else {
            FlattenMode::FirstBranch
        }
    }
}

/// Per-call accumulator for the row pass.
struct RowState<'k> {
    leaf_keys: &'k IndexSet<String>,
    mode: FlattenMode,
    rows: Vec<Vec<Value>>,
}

/// Keys holding a non-mapping value anywhere in `record`, first-seen order.
pub fn leaf_keys(record: &Record) -> IndexSet<String> {
    let mut keys = IndexSet::new();
    collect_leaf_keys(record, &mut keys);
    keys
}

fn collect_leaf_keys(record: &Record, keys: &mut IndexSet<String>) {
    for (key, value) in record {
        match value {
            Value::Object(nested) => collect_leaf_keys(nested, keys),
            _ => {
                keys.insert(key.clone());
            }
        }
    }
}

fn emit_rows(record: &Record, state: &mut RowState<'_>) {
    if record.is_empty() {
        return;
    }

    let mut nested = record.values().filter_map(Value::as_object).peekable();
    if nested.peek().is_some() {
        match state.mode {
            FlattenMode::FirstBranch => {
                if let Some(first) = nested.next() {
                    emit_rows(first, state);
                }
            }
            FlattenMode::AllBranches => {
                for child in nested {
                    emit_rows(child, state);
                }
            }
        }
        return;
    }

    let row = state
        .leaf_keys
        .iter()
        .map(|key| record.get(key).cloned().unwrap_or_else(missing))
        .collect();
    state.rows.push(row);
}

pub fn flatten(record: &Record, mode: FlattenMode) -> Table {
    let keys = leaf_keys(record);

    let mut state = RowState {
        leaf_keys: &keys,
        mode,
        rows: Vec::new(),
    };
    emit_rows(record, &mut state);
    let rows = state.rows;

    Table {
        header: keys.iter().map(|key| key.to_uppercase()).collect(),
        rows,
    }
}
