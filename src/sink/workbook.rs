use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use super::errors::SinkError;
use crate::table::Table;

const MAX_SHEET_NAME: usize = 31;
const ILLEGAL_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const TAKEN_SUFFIX: &str = " NEW";
const RESERVED_SHEET_NAME: &str = "history";

/// Replace characters Excel refuses in sheet names and clip to 31 chars.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if ILLEGAL_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let clipped: String = cleaned.trim().chars().take(MAX_SHEET_NAME).collect();
    // Excel refuses a leading or trailing apostrophe
    let trimmed = clipped.trim_matches(|c: char| c == '\'' || c.is_whitespace());
    if trimmed.is_empty() {
        "Sheet".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `base`, or `base NEW`, `base NEW2`, ... whichever is free. Names compare
/// case-insensitively over the full Unicode range, as in Excel, and the
/// reserved name `History` always counts as taken.
pub fn unique_sheet_name(base: &str, existing: &[String]) -> String {
    let taken = |candidate: &str| {
        let candidate = candidate.to_lowercase();
        candidate == RESERVED_SHEET_NAME
            || existing.iter().any(|n| n.to_lowercase() == candidate)
    };

    if !taken(base) {
        return base.to_string();
    }

    let mut attempt = 1usize;
    loop {
        let suffix = if attempt == 1 {
            TAKEN_SUFFIX.to_string()
        } else {
            format!("{TAKEN_SUFFIX}{attempt}")
        };
        let room = MAX_SHEET_NAME.saturating_sub(suffix.chars().count());
        let candidate: String = base.chars().take(room).chain(suffix.chars()).collect();
        if !taken(&candidate) {
            return candidate;
        }
        attempt += 1;
    }
}

// Sniffs the content rather than trusting the extension: `.xls` outputs
// are written in xlsx format.
fn read_existing_sheets(path: &Path) -> Result<Vec<(String, Range<Data>)>, SinkError> {
    let bytes = std::fs::read(path).map_err(|e| SinkError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| SinkError::WorkbookRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok(workbook.worksheets())
}

fn copy_range(worksheet: &mut Worksheet, range: &Range<Data>) -> Result<(), XlsxError> {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    for (r, row) in range.rows().enumerate() {
        let row_idx = start_row + r as u32;
        for (c, cell) in row.iter().enumerate() {
            let Ok(col_idx) = u16::try_from(start_col as usize + c) else {
                break;
            };
            match cell {
                Data::Empty => {}
                Data::String(s) => {
                    worksheet.write_string(row_idx, col_idx, s)?;
                }
                Data::Float(f) => {
                    worksheet.write_number(row_idx, col_idx, *f)?;
                }
                Data::Int(i) => {
                    worksheet.write_number(row_idx, col_idx, *i as f64)?;
                }
                Data::Bool(b) => {
                    worksheet.write_boolean(row_idx, col_idx, *b)?;
                }
                other => {
                    worksheet.write_string(row_idx, col_idx, other.to_string())?;
                }
            }
        }
    }
    Ok(())
}

fn write_table_rows(worksheet: &mut Worksheet, table: &Table) -> Result<(), XlsxError> {
    let mut row_idx = 0u32;
    for row in table.text_rows() {
        if row.is_empty() {
            continue;
        }
        for (c, text) in row.iter().enumerate() {
            let Ok(col_idx) = u16::try_from(c) else {
                break;
            };
            worksheet.write_string(row_idx, col_idx, text)?;
        }
        row_idx += 1;
    }
    Ok(())
}

/// Add `table` as a new worksheet of the workbook at `path`, creating the
/// file when it doesn't exist. Existing sheets keep their values. Returns
/// the name the new worksheet was given.
pub fn add_table_to_workbook(
    table: &Table,
    path: &Path,
    sheet_name: &str,
) -> Result<String, SinkError> {
    let write_error = |e| SinkError::WorkbookWrite {
        path: path.display().to_string(),
        source: e,
    };

    let existing = if path.exists() {
        tracing::debug!(
            "[+] Workbook {} already exists, adding new worksheet to it",
            path.display()
        );
        read_existing_sheets(path)?
    } else {
        tracing::debug!("[+] Creating new Excel workbook {}", path.display());
        Vec::new()
    };

    let mut workbook = Workbook::new();
    let mut names: Vec<String> = Vec::with_capacity(existing.len() + 1);

    for (name, range) in &existing {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name).map_err(write_error)?;
        copy_range(worksheet, range).map_err(write_error)?;
        names.push(name.clone());
    }

    let new_name = unique_sheet_name(&sanitize_sheet_name(sheet_name), &names);
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&new_name).map_err(write_error)?;
    write_table_rows(worksheet, table).map_err(write_error)?;

    workbook.save(path).map_err(write_error)?;
    Ok(new_name)
}
