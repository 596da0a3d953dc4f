pub mod args;
pub mod errors;

use std::io::Read;
use std::path::PathBuf;

use serde_json::Value;

use crate::naming::STDIN_NAME;
use crate::record::Record;
use errors::InputError;

/// Raw input text together with the name it was read under.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
}

/// Read `path`, or standard input when `path` is `-`.
pub fn read_document(path: &str) -> Result<Document, InputError> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| InputError::Read {
                path: STDIN_NAME.to_string(),
                source: e,
            })?;
        return Ok(Document {
            name: STDIN_NAME.to_string(),
            text,
        });
    }

    tracing::debug!("[+] Loading data from {}", path);
    let text = std::fs::read_to_string(path).map_err(|e| InputError::Read {
        path: path.to_string(),
        source: e,
    })?;
    Ok(Document {
        name: path.to_string(),
        text,
    })
}

/// Like [`read_document`], but blank command output is an error.
pub fn read_cli_document(path: &str) -> Result<Document, InputError> {
    let document = read_document(path)?;
    if document.text.trim().is_empty() {
        return Err(InputError::Empty(document.name));
    }
    Ok(document)
}

/// Decode a JSON document into the Records to flatten. An object is one
/// Record; an array must hold objects, one Record each. `null`, `{}` and
/// `[]` count as no data.
pub fn records_from_json(document: &Document) -> Result<Vec<Record>, InputError> {
    let value: Value = serde_json::from_str(&document.text).map_err(|e| InputError::Json {
        path: document.name.clone(),
        source: e,
    })?;

    let records = match value {
        Value::Object(record) => vec![record],
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(InputError::NotARecord {
                    path: document.name.clone(),
                    index,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Value::Null => Vec::new(),
        _ => {
            return Err(InputError::NotARecord {
                path: document.name.clone(),
                index: 0,
            });
        }
    };

    if records.iter().all(|record| record.is_empty()) {
        return Err(InputError::Empty(document.name.clone()));
    }
    Ok(records)
}

/// Files matching `pattern`, sorted. Unreadable entries are skipped.
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>, InputError> {
    let paths = glob::glob(pattern).map_err(|e| InputError::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("[!] Skipping unreadable path: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        return Err(InputError::NoMatches(pattern.to_string()));
    }
    files.sort();
    Ok(files)
}
