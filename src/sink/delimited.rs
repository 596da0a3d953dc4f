use std::io::Write;
use std::path::Path;

use super::errors::SinkError;
use crate::table::Table;

/// Write `table` as delimited text, header first. An empty header line is
/// skipped rather than written as an empty quoted field.
pub fn write_delimited<W: Write>(
    table: &Table,
    writer: W,
    delimiter: u8,
    label: &str,
) -> Result<usize, SinkError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let csv_error = |e| SinkError::Csv {
        path: label.to_string(),
        source: e,
    };

    let mut count = 0;
    for row in table.text_rows() {
        if row.is_empty() {
            continue;
        }
        csv_writer.write_record(&row).map_err(csv_error)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| SinkError::Io {
        path: label.to_string(),
        source: e,
    })?;

    Ok(count)
}

pub fn write_csv_file(table: &Table, path: &Path, delimiter: u8) -> Result<usize, SinkError> {
    let label = path.display().to_string();
    let file = std::fs::File::create(path).map_err(|e| SinkError::Io {
        path: label.clone(),
        source: e,
    })?;
    write_delimited(table, file, delimiter, &label)
}
