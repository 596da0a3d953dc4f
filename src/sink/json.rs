use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::errors::SinkError;

/// Pretty-print `value` with `indent` spaces per level, newline terminated.
pub fn write_json<T: Serialize, W: Write>(
    value: &T,
    mut writer: W,
    indent: usize,
) -> Result<(), SinkError> {
    let spaces = vec![b' '; indent];
    let formatter = PrettyFormatter::with_indent(&spaces);
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;

    writeln!(writer).map_err(|e| SinkError::Io {
        path: "<output>".to_string(),
        source: e,
    })?;
    Ok(())
}
