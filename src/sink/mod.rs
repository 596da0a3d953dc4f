pub mod args;
pub mod delimited;
pub mod errors;
pub mod json;
pub mod text;
pub mod workbook;

use std::path::{Path, PathBuf};

use crate::table::Table;
use errors::SinkError;

/// Where a table ends up; chosen from the output file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Csv(PathBuf),
    Workbook(PathBuf),
}

impl Destination {
    pub fn from_outfile(outfile: Option<&str>) -> Result<Self, SinkError> {
        let Some(outfile) = outfile else {
            return Ok(Destination::Stdout);
        };

        let ext = Path::new(outfile)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(Destination::Csv(PathBuf::from(outfile))),
            Some("xls") | Some("xlsx") => Ok(Destination::Workbook(PathBuf::from(outfile))),
            _ => Err(SinkError::UnsupportedFormat(outfile.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SinkOptions {
    pub delimiter: u8,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

/// Write `table` to `destination`. `sheet_name` names the worksheet when the
/// destination is a workbook.
pub fn write_table(
    table: &Table,
    destination: &Destination,
    sheet_name: &str,
    options: SinkOptions,
) -> Result<(), SinkError> {
    match destination {
        Destination::Stdout => {
            let stdout = std::io::stdout();
            text::write_text(table, stdout.lock()).map_err(|e| SinkError::Io {
                path: "<stdout>".to_string(),
                source: e,
            })?;
        }
        Destination::Csv(path) => {
            let lines = delimited::write_csv_file(table, path, options.delimiter)?;
            tracing::info!("[+] Done writing {} lines to {}", lines, path.display());
        }
        Destination::Workbook(path) => {
            let sheet = workbook::add_table_to_workbook(table, path, sheet_name)?;
            tracing::info!(
                "[+] Done writing {} rows to worksheet '{}' of {}",
                table.len(),
                sheet,
                path.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_selects_destination() {
        assert_eq!(Destination::from_outfile(None).unwrap(), Destination::Stdout);
        assert_eq!(
            Destination::from_outfile(Some("out/table.CSV")).unwrap(),
            Destination::Csv(PathBuf::from("out/table.CSV"))
        );
        assert_eq!(
            Destination::from_outfile(Some("SW1.xls")).unwrap(),
            Destination::Workbook(PathBuf::from("SW1.xls"))
        );
        assert_eq!(
            Destination::from_outfile(Some("SW1.xlsx")).unwrap(),
            Destination::Workbook(PathBuf::from("SW1.xlsx"))
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(matches!(
            Destination::from_outfile(Some("table.ods")),
            Err(SinkError::UnsupportedFormat(_))
        ));
        assert!(Destination::from_outfile(Some("table")).is_err());
    }
}
